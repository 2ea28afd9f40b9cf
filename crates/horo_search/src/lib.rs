//! Return search.
//!
//! This crate provides:
//! - Newton–Raphson solving of the instant a body reaches a target longitude
//! - Enumeration of repeated returns across a long window
//! - Solver configuration with eager validation

pub mod error;
pub mod return_types;
pub mod returns;

pub use error::SearchError;
pub use return_types::{ReturnConfig, ReturnEvent};
pub use returns::{search_returns, solve_return};
