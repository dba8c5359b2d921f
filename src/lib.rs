//! PrivacyGuard core — domain model, analytics, and live-feed simulation
//! for a browser privacy monitoring dashboard.
//!
//! This library crate exposes all modules for use by the demo binary and
//! integration tests.

pub mod app;
pub mod managers;
pub mod seed;
pub mod services;
pub mod types;
