//! API Module
//!
//! HTTP handlers and routing for the sharing service.
//!
//! # Endpoints
//! - `POST /api/anchors` - Store an anchor key, returns its anchor number
//! - `GET /api/anchors/:anchor_number` - Retrieve an anchor key
//! - `GET /api/anchors/last` - Retrieve the most recently stored anchor key
//! - `GET /api/apptoken` - Obtain a Spatial Anchors access token
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
