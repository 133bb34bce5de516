//! Aquamon - Time-windowed telemetry query and live device status API
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod routes;
pub mod status;
pub mod store;
pub mod view;
pub mod window;
