//! HTTP layer for Voxbot.
//!
//! Axum-based JSON API (`/api/chat`, `/api/voices`, `/health`) plus the
//! static landing page, with permissive CORS.

pub mod error;
pub mod handlers;
pub mod router;
