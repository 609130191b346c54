//! Schedule model: typed operations and the permissive text scanner.

pub mod error;
#[cfg(feature = "parser")]
pub mod lexer;
#[cfg(feature = "parser")]
pub mod parse;
pub mod types;

pub use error::Error;
#[cfg(feature = "parser")]
pub use parse::{parse_schedule, scan_operations};
pub use types::{Operation, Schedule, Timestamp, TransactionId};
