#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! HTTP API clients for the govkit family of government web services.
//!
//! Each service gets a small client wrapping the shared [`json_client::JsonClient`]:
//!
//! - [`content`] - content catalog (artefacts and tags)
//! - [`collections`] - curated content lists
//! - [`places`] - location-based service lookups
//! - [`facts`] - fact lookup
//! - [`accounts`] - account session management
//!
//! Clients deserialize JSON responses into simple result types and map
//! non-2xx statuses to [`error::ApiError`] variants. For testing consumer
//! code without a live network, see the `govkit-test-doubles` crate.

pub mod accounts;
pub mod collections;
pub mod config;
pub mod content;
pub mod endpoints;
pub mod error;
pub mod facts;
pub mod json_client;
pub mod places;
