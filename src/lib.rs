#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(feature = "std"))]
use core::panic::PanicInfo;

#[cfg(not(feature = "std"))]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! { loop {} }

pub mod field;
pub mod entropy;
pub mod scheme;

pub use crate::scheme::share::Share;
pub use crate::scheme::ShareError;
