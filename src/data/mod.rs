//! Data loading
//!
//! Turns delimited text into the dense feature matrix and label vector the
//! classifier consumes.

pub mod csv;

pub use self::csv::*;
