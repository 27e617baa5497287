//! RAS Monitor - water quality ingestion and alerting API for recirculating
//! aquaculture systems.
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod filters;
pub mod parameter;
pub mod routes;
pub mod store;
pub mod thresholds;
