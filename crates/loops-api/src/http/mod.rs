//! HTTP layer: the widget's `/chat` and `/contact` endpoints, health check and
//! optional static site.

pub mod error;
pub mod handlers;
pub mod router;
