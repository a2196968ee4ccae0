//! HTTP API module for the Salary Breakdown Engine.
//!
//! This module provides the REST API endpoint for turning an annual CTC
//! into a monthly salary breakdown.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
