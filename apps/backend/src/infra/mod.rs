//! Infrastructure glue: state construction and store error translation.

pub mod state;
pub mod store_errors;
