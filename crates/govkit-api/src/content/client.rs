//! Content API client.

use async_trait::async_trait;

use super::types::{Artefact, Paginated, Tag};
use crate::error::ApiError;
use crate::json_client::JsonClient;

/// Trait for content API operations.
///
/// Implementations can fetch artefacts and tags from the content catalog.
/// Use [`HttpContentClient`] for real HTTP calls, or
/// [`mock::MockContentClient`] for unit tests.
#[async_trait]
pub trait ContentApiClient: Send + Sync {
    /// Get the artefact published at `slug`.
    async fn artefact(&self, slug: &str) -> Result<Artefact, ApiError>;

    /// Get a specific unpublished edition of the artefact at `slug`.
    async fn unpublished_artefact(&self, slug: &str, edition: u32) -> Result<Artefact, ApiError>;

    /// Get the artefact at `slug` localized for a SNAC area code.
    async fn artefact_with_snac(&self, slug: &str, snac: &str) -> Result<Artefact, ApiError>;

    /// Get a single tag by type and slug.
    async fn tag(&self, tag_type: &str, slug: &str) -> Result<Tag, ApiError>;

    /// List live tags of `tag_type`.
    async fn tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError>;

    /// List tags of `tag_type`, including drafts.
    async fn tags_including_drafts(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError>;

    /// List root-level tags of `tag_type`.
    async fn root_tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError>;

    /// List tags of `tag_type` in a server-side sort order.
    async fn sorted_tags(&self, tag_type: &str, sort: &str) -> Result<Paginated<Tag>, ApiError>;

    /// List the children of the tag at `parent_slug`.
    async fn child_tags(&self, tag_type: &str, parent_slug: &str)
        -> Result<Paginated<Tag>, ApiError>;

    /// List the children of the tag at `parent_slug` in a sort order.
    async fn sorted_child_tags(
        &self,
        tag_type: &str,
        parent_slug: &str,
        sort: &str,
    ) -> Result<Paginated<Tag>, ApiError>;

    /// List the artefacts meeting a user need.
    async fn artefacts_for_need(&self, need_id: &str) -> Result<Paginated<Artefact>, ApiError>;
}

/// HTTP-based implementation of [`ContentApiClient`].
pub struct HttpContentClient {
    client: JsonClient,
}

impl HttpContentClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: JsonClient::new(base_url),
        }
    }

    /// Create a client over a pre-configured [`JsonClient`].
    #[must_use]
    pub const fn with_client(client: JsonClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentApiClient for HttpContentClient {
    async fn artefact(&self, slug: &str) -> Result<Artefact, ApiError> {
        let path = format!("/{}.json", urlencoding::encode(slug));
        self.client.get_json(&path).await
    }

    async fn unpublished_artefact(&self, slug: &str, edition: u32) -> Result<Artefact, ApiError> {
        let path = format!("/{}.json", urlencoding::encode(slug));
        self.client
            .get_json_with_query(&path, &[("edition", edition.to_string())])
            .await
    }

    async fn artefact_with_snac(&self, slug: &str, snac: &str) -> Result<Artefact, ApiError> {
        let path = format!("/{}.json", urlencoding::encode(slug));
        self.client
            .get_json_with_query(&path, &[("snac", snac.to_string())])
            .await
    }

    async fn tag(&self, tag_type: &str, slug: &str) -> Result<Tag, ApiError> {
        let path = format!(
            "/tags/{}/{}.json",
            urlencoding::encode(tag_type),
            urlencoding::encode(slug)
        );
        self.client.get_json(&path).await
    }

    async fn tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query("/tags.json", &[("type", tag_type.to_string())])
            .await
    }

    async fn tags_including_drafts(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query(
                "/tags.json",
                &[("type", tag_type.to_string()), ("draft", "true".to_string())],
            )
            .await
    }

    async fn root_tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query(
                "/tags.json",
                &[
                    ("type", tag_type.to_string()),
                    ("root_sections", "true".to_string()),
                ],
            )
            .await
    }

    async fn sorted_tags(&self, tag_type: &str, sort: &str) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query(
                "/tags.json",
                &[("type", tag_type.to_string()), ("sort", sort.to_string())],
            )
            .await
    }

    async fn child_tags(
        &self,
        tag_type: &str,
        parent_slug: &str,
    ) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query(
                "/tags.json",
                &[
                    ("type", tag_type.to_string()),
                    ("parent_id", parent_slug.to_string()),
                ],
            )
            .await
    }

    async fn sorted_child_tags(
        &self,
        tag_type: &str,
        parent_slug: &str,
        sort: &str,
    ) -> Result<Paginated<Tag>, ApiError> {
        self.client
            .get_json_with_query(
                "/tags.json",
                &[
                    ("type", tag_type.to_string()),
                    ("parent_id", parent_slug.to_string()),
                    ("sort", sort.to_string()),
                ],
            )
            .await
    }

    async fn artefacts_for_need(&self, need_id: &str) -> Result<Paginated<Artefact>, ApiError> {
        let path = format!("/for_need/{}.json", urlencoding::encode(need_id));
        self.client.get_json(&path).await
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! In-process mock implementation for unit testing.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{Artefact, ContentApiClient, Paginated, Tag};
    use crate::error::ApiError;

    fn paginate<T>(results: Vec<T>) -> Paginated<T> {
        let total = results.len() as u64;
        Paginated {
            response_info: None,
            description: None,
            total,
            start_index: 1,
            page_size: total,
            current_page: 1,
            pages: 1,
            results,
        }
    }

    /// Mock implementation of [`ContentApiClient`] backed by fixture maps.
    ///
    /// Register fixtures with the `add_*` methods; unregistered lookups
    /// return `NotFound` (single items) or an empty page (listings).
    /// Verify lookups with `artefact_calls()` and `tag_list_calls()`.
    pub struct MockContentClient {
        artefacts: Mutex<HashMap<String, Artefact>>,
        tags: Mutex<HashMap<(String, String), Tag>>,
        tag_lists: Mutex<HashMap<String, Vec<Tag>>>,
        need_artefacts: Mutex<HashMap<String, Vec<Artefact>>>,
        artefact_calls: Mutex<Vec<String>>,
        tag_list_calls: Mutex<Vec<String>>,
    }

    impl MockContentClient {
        pub fn new() -> Self {
            Self {
                artefacts: Mutex::new(HashMap::new()),
                tags: Mutex::new(HashMap::new()),
                tag_lists: Mutex::new(HashMap::new()),
                need_artefacts: Mutex::new(HashMap::new()),
                artefact_calls: Mutex::new(Vec::new()),
                tag_list_calls: Mutex::new(Vec::new()),
            }
        }

        /// Register the artefact returned for `slug`.
        pub fn add_artefact(&self, slug: &str, artefact: Artefact) {
            self.artefacts
                .lock()
                .unwrap()
                .insert(slug.to_string(), artefact);
        }

        /// Register the tag returned for a type and slug.
        pub fn add_tag(&self, tag_type: &str, slug: &str, tag: Tag) {
            self.tags
                .lock()
                .unwrap()
                .insert((tag_type.to_string(), slug.to_string()), tag);
        }

        /// Register the tags every listing of `tag_type` returns.
        pub fn add_tag_list(&self, tag_type: &str, tags: Vec<Tag>) {
            self.tag_lists
                .lock()
                .unwrap()
                .insert(tag_type.to_string(), tags);
        }

        /// Register the artefacts returned for a need.
        pub fn add_need_artefacts(&self, need_id: &str, artefacts: Vec<Artefact>) {
            self.need_artefacts
                .lock()
                .unwrap()
                .insert(need_id.to_string(), artefacts);
        }

        /// Get all slugs passed to artefact lookups.
        pub fn artefact_calls(&self) -> Vec<String> {
            self.artefact_calls.lock().unwrap().clone()
        }

        /// Get all tag types passed to listing calls.
        pub fn tag_list_calls(&self) -> Vec<String> {
            self.tag_list_calls.lock().unwrap().clone()
        }

        fn lookup_artefact(&self, slug: &str) -> Result<Artefact, ApiError> {
            self.artefact_calls.lock().unwrap().push(slug.to_string());
            self.artefacts
                .lock()
                .unwrap()
                .get(slug)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(slug.to_string()))
        }

        fn lookup_tag_list(&self, tag_type: &str) -> Paginated<Tag> {
            self.tag_list_calls
                .lock()
                .unwrap()
                .push(tag_type.to_string());
            paginate(
                self.tag_lists
                    .lock()
                    .unwrap()
                    .get(tag_type)
                    .cloned()
                    .unwrap_or_default(),
            )
        }
    }

    impl Default for MockContentClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ContentApiClient for MockContentClient {
        async fn artefact(&self, slug: &str) -> Result<Artefact, ApiError> {
            self.lookup_artefact(slug)
        }

        async fn unpublished_artefact(
            &self,
            slug: &str,
            _edition: u32,
        ) -> Result<Artefact, ApiError> {
            self.lookup_artefact(slug)
        }

        async fn artefact_with_snac(&self, slug: &str, _snac: &str) -> Result<Artefact, ApiError> {
            self.lookup_artefact(slug)
        }

        async fn tag(&self, tag_type: &str, slug: &str) -> Result<Tag, ApiError> {
            self.tags
                .lock()
                .unwrap()
                .get(&(tag_type.to_string(), slug.to_string()))
                .cloned()
                .ok_or_else(|| ApiError::NotFound(slug.to_string()))
        }

        async fn tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn tags_including_drafts(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn root_tags(&self, tag_type: &str) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn sorted_tags(&self, tag_type: &str, _sort: &str) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn child_tags(
            &self,
            tag_type: &str,
            _parent_slug: &str,
        ) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn sorted_child_tags(
            &self,
            tag_type: &str,
            _parent_slug: &str,
            _sort: &str,
        ) -> Result<Paginated<Tag>, ApiError> {
            Ok(self.lookup_tag_list(tag_type))
        }

        async fn artefacts_for_need(&self, need_id: &str) -> Result<Paginated<Artefact>, ApiError> {
            Ok(paginate(
                self.need_artefacts
                    .lock()
                    .unwrap()
                    .get(need_id)
                    .cloned()
                    .unwrap_or_default(),
            ))
        }
    }
}
