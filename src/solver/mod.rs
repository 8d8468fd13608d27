//! Coefficient solver for the kernel classifier
//!
//! This module implements the fixed-epoch dual coefficient update and the
//! similarity matrix it uses to estimate the bias.

pub mod dual;
pub mod similarity;

pub use self::dual::*;
pub use self::similarity::*;
