#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
