//! Common value types used by order records

pub mod errors;
pub mod symbol;
