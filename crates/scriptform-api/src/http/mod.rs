//! HTTP layer for scriptform.
//!
//! Serves one script as an HTML form at `/` and as a JSON API under
//! `/api/v1/` using the envelope response format.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
