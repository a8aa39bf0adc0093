// Test-double code: panicking on misuse is the desired failure mode.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

//! Test doubles for the govkit service APIs.
//!
//! This crate builds realistic fixture payloads and registers HTTP stub
//! rules so consumer applications can test against the govkit APIs without
//! a live network. Point a client at [`MockHttpServer::url`] and mount the
//! stubs you need:
//!
//! ```ignore
//! use govkit_test_doubles::content::ContentApiStubs;
//! use govkit_test_doubles::MockHttpServer;
//!
//! #[tokio::test]
//! async fn renders_an_artefact() {
//!     let server = MockHttpServer::start().await;
//!     ContentApiStubs::new(&server)
//!         .has_an_artefact("reporting-a-death")
//!         .await;
//!
//!     // Code under test fetches from server.url()
//! }
//! ```
//!
//! Fixture builders are plain functions returning `serde_json::Value`
//! payloads, so tests can also take a fixture, tweak it, and mount it
//! through a custom stub (for example
//! [`content::ArtefactStub::with_response_body`]).

pub mod accounts;
pub mod collections;
pub mod content;
pub mod facts;
pub mod http;
pub mod places;
pub mod responses;

pub use http::{MockHttpServer, StubBuilder};
