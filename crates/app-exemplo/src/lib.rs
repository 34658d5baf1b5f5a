//! app-exemplo — minimal example web service.
//!
//! Serves a landing page at `/` and a health/status endpoint at `/health`
//! that echoes the configuration resolved from the environment at startup.
//! Modules are public so the binary (`main.rs`) and the e2e test crate can
//! build the same router.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;
