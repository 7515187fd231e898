#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

mod process;
pub use process::*;
mod dff;
pub use dff::*;
mod error;
pub use error::*;
mod efm;
pub use efm::*;
mod cascade;
pub use cascade::*;
mod align;
pub use align::*;
mod ncl;
pub use ncl::*;
mod mash;
pub use mash::*;
pub mod ntf;

#[cfg(any(test, feature = "std"))]
pub mod trace;

#[cfg(test)]
pub mod testing;
