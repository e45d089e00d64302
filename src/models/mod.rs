//! Request and Response models for the sharing service API
//!
//! Anchor endpoints exchange plain text; the operational endpoints and all
//! error bodies use the JSON DTOs defined here.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::validate_anchor_key;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
