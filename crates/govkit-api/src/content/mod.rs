//! Content catalog API client module.
//!
//! Provides HTTP client abstraction for fetching artefacts and tags from
//! the content API.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`ContentApiClient`] - Trait defining API operations
//! - [`HttpContentClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockContentClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! Use `MockContentClient` for fast, isolated unit tests:
//!
//! ```ignore
//! use govkit_api::content::mock::MockContentClient;
//!
//! let mock = MockContentClient::new();
//! mock.add_artefact("vat-rates", artefact);
//!
//! // Pass mock to code under test
//! let result = my_service.lookup(&mock, "vat-rates").await;
//! assert!(result.is_ok());
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use the `govkit-test-doubles` crate to test `HttpContentClient` against
//! stubbed HTTP:
//!
//! ```ignore
//! use govkit_api::content::{ContentApiClient, HttpContentClient};
//! use govkit_test_doubles::content::ContentApiStubs;
//! use govkit_test_doubles::MockHttpServer;
//!
//! let server = MockHttpServer::start().await;
//! ContentApiStubs::new(&server).has_an_artefact("vat-rates").await;
//!
//! let client = HttpContentClient::new(server.url());
//! let artefact = client.artefact("vat-rates").await.unwrap();
//! assert_eq!(artefact.title, "Vat rates");
//! ```

mod client;
mod types;

pub use client::{ContentApiClient, HttpContentClient};
pub use types::{
    Artefact, ArtefactDetails, ContentWithTag, Paginated, Part, RelatedArtefact, ResponseInfo, Tag,
    TagDetails,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
