//! Kernel functions for the classifier

pub mod polynomial;
pub mod rbf;
pub mod selection;
pub mod sigmoid;
pub mod traits;

pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::selection::*;
pub use self::sigmoid::*;
pub use self::traits::*;
