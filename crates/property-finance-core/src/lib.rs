pub mod error;
pub mod time_value;
pub mod types;
pub mod validation;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "investment")]
pub mod investment;

#[cfg(all(feature = "mortgage", feature = "investment"))]
pub mod calculator;

pub use error::PropertyFinanceError;
pub use types::*;

/// Standard result type for all property-finance operations
pub type PropertyFinanceResult<T> = Result<T, PropertyFinanceError>;
