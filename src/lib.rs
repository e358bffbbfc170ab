#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
