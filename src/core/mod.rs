//! Core data types shared by the pricing functions and the I/O shell.

pub mod types;

pub use types::{ChargeMap, Product};
