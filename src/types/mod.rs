//! Shared response envelope types.

mod response;

pub use response::{ApiError, ApiResponse, ErrorEnvelope};
