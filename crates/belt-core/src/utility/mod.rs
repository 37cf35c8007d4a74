//! Utility contract and execution errors

pub mod contract;
pub mod error;

#[cfg(test)]
pub mod test_support;

pub use contract::Utility;
pub use error::UtilityError;
