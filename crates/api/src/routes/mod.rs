//! HTTP route handlers.

pub mod frontend;
pub mod health;
pub mod hijri;
pub mod metrics;
pub mod qibla;
