//! Stub rules and fixture payloads for the content API.
//!
//! The fixture builders are pure functions returning `serde_json::Value`
//! payloads shaped like the live API's responses, parameterized on the
//! endpoint URL they should claim to come from. [`ContentApiStubs`] binds
//! them to a [`MockHttpServer`] and mounts query-matched stub rules.

use serde_json::{json, Value};
use urlencoding::encode;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

use crate::http::{MockHttpServer, StubBuilder};
use crate::responses::{plural_response_base, titleize_slug};

/// Domain the content API uses for public-facing browse URLs in fixtures.
const WWW_BASE: &str = "http://www.test.gov.uk";
/// Domain artefact web URLs point at in fixtures.
const FRONTEND_BASE: &str = "http://frontend.test.gov.uk";

/// Description of a tag to synthesize, with layered defaults.
///
/// Only the slug is required: the consuming helper fills in the tag type,
/// and [`tag_result`] derives title and descriptions from the slug unless
/// they are set here. `From<&str>` builds a slug-only spec, so helper
/// arguments accept `"business".into()` and fully-specified specs alike.
#[derive(Debug, Clone, Default)]
pub struct TagSpec {
    pub slug: String,
    pub tag_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub parent: Option<Box<TagSpec>>,
    pub state: Option<String>,
}

impl TagSpec {
    /// Create a spec with the two required pieces.
    #[must_use]
    pub fn new(slug: &str, tag_type: &str) -> Self {
        Self {
            slug: slug.to_string(),
            tag_type: tag_type.to_string(),
            ..Self::default()
        }
    }

    /// Override the derived title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Override the derived description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Override the derived short description.
    #[must_use]
    pub fn with_short_description(mut self, short_description: &str) -> Self {
        self.short_description = Some(short_description.to_string());
        self
    }

    /// Nest this tag under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Set the publication state ("live" or "draft").
    #[must_use]
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// Fill in the tag type on specs built from bare slugs, parents included.
    fn defaulted(mut self, tag_type: &str) -> Self {
        if self.tag_type.is_empty() {
            self.tag_type = tag_type.to_string();
        }
        if let Some(parent) = self.parent.take() {
            self.parent = Some(Box::new(parent.defaulted(tag_type)));
        }
        self
    }
}

impl From<&str> for TagSpec {
    fn from(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            ..Self::default()
        }
    }
}

impl From<String> for TagSpec {
    fn from(slug: String) -> Self {
        Self {
            slug,
            ..Self::default()
        }
    }
}

/// Pluralize a tag type the way the live API's tag paths do.
#[must_use]
pub fn pluralize_tag_type(tag_type: &str) -> String {
    if let Some(stem) = tag_type.strip_suffix("ss") {
        format!("{stem}sses")
    } else if let Some(stem) = tag_type.strip_suffix('o') {
        format!("{stem}es")
    } else if let Some(stem) = tag_type.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{tag_type}s")
    }
}

/// Build the full tag payload described by `spec`.
///
/// Parents render recursively, so a spec chain produces the same nested
/// payload the live API returns for tags deep in a hierarchy.
#[must_use]
pub fn tag_result(endpoint: &str, spec: &TagSpec) -> Value {
    let parent = spec
        .parent
        .as_ref()
        .map_or(Value::Null, |parent| tag_result(endpoint, parent));
    let plural_type = pluralize_tag_type(&spec.tag_type);
    let last_segment = spec.slug.rsplit('/').next().unwrap_or(&spec.slug);

    json!({
        "id": format!(
            "{endpoint}/tags/{}/{}.json",
            encode(&plural_type),
            encode(&spec.slug)
        ),
        "slug": spec.slug,
        "web_url": format!("{WWW_BASE}/browse/{}", spec.slug),
        "title": spec
            .title
            .clone()
            .unwrap_or_else(|| titleize_slug(last_segment)),
        "details": {
            "type": spec.tag_type,
            "description": spec
                .description
                .clone()
                .unwrap_or_else(|| format!("{} description", spec.slug)),
            "short_description": spec
                .short_description
                .clone()
                .unwrap_or_else(|| format!("{} short description", spec.slug)),
        },
        "parent": parent,
        "content_with_tag": {
            "id": format!("{endpoint}/with_tag.json?tag={}", encode(&spec.slug)),
            "web_url": format!("{WWW_BASE}/browse/{}", spec.slug),
        },
        "state": spec.state,
    })
}

/// Build the standard "guide" artefact payload for `slug`.
#[must_use]
pub fn artefact_for_slug(endpoint: &str, slug: &str) -> Value {
    artefact_with_format(endpoint, slug, "guide")
}

/// Build the standard artefact payload for `slug` with a specific format.
#[must_use]
pub fn artefact_with_format(endpoint: &str, slug: &str, artefact_format: &str) -> Value {
    json!({
        "_response_info": {
            "status": "ok"
        },
        "title": titleize_slug(slug),
        "format": artefact_format,
        "id": format!("{endpoint}/{}.json", encode(slug)),
        "web_url": format!("{FRONTEND_BASE}/{slug}"),
        "details": {
            "need_ids": ["100001"],
            "business_proposition": false,
            "format": artefact_format,
            "alternative_title": "",
            "overview": "This is an overview",
            "video_summary": "",
            "video_url": "",
            "parts": [
                {
                    "id": "overview",
                    "order": 1,
                    "title": "Overview",
                    "body": "<p>Some content</p>"
                },
                {
                    "id": format!("{slug}-part-2"),
                    "order": 2,
                    "title": "How to make a nomination",
                    "body": "<p>Some more content</p>"
                }
            ]
        },
        "tags": [],
        "related": []
    })
}

/// Artefact payload carrying a single flat tag.
#[must_use]
pub fn artefact_with_tag(endpoint: &str, slug: &str, tag_type: &str, tag_slug: &str) -> Value {
    let mut artefact = artefact_for_slug(endpoint, slug);
    push_tag(&mut artefact, tag_result(endpoint, &TagSpec::new(tag_slug, tag_type)));
    artefact
}

/// Artefact payload carrying one nested child tag built from a slash path.
#[must_use]
pub fn artefact_with_child_tag(
    endpoint: &str,
    slug: &str,
    tag_type: &str,
    child_tag_path: &str,
) -> Value {
    artefact_with_child_tags(endpoint, slug, tag_type, &[child_tag_path])
}

/// Artefact payload carrying nested child tags built from slash paths.
///
/// Each path grows a chain of cumulative slugs, nested child-over-parent:
/// `"thing1/thing2"` becomes `Tag{thing1/thing2, parent: Tag{thing1}}`.
#[must_use]
pub fn artefact_with_child_tags(
    endpoint: &str,
    slug: &str,
    tag_type: &str,
    child_tag_paths: &[&str],
) -> Value {
    let mut artefact = artefact_for_slug(endpoint, slug);

    for child_tag_path in child_tag_paths {
        let mut tree: Option<Value> = None;
        let mut cumulative = String::new();

        for segment in child_tag_path.split('/') {
            if cumulative.is_empty() {
                cumulative.push_str(segment);
            } else {
                cumulative = format!("{cumulative}/{segment}");
            }

            let mut tag = tag_result(endpoint, &TagSpec::new(&cumulative, tag_type));
            // The segments seen so far become the ancestors of this one.
            if let Some(ancestors) = tree.take() {
                tag["parent"] = ancestors;
            }
            tree = Some(tag);
        }

        if let Some(tag) = tree {
            push_tag(&mut artefact, tag);
        }
    }

    artefact
}

/// Artefact payload with related-item links.
#[must_use]
pub fn artefact_with_related_artefacts(
    endpoint: &str,
    slug: &str,
    related_slugs: &[&str],
) -> Value {
    let mut artefact = artefact_for_slug(endpoint, slug);
    artefact["related"] = related_slugs
        .iter()
        .map(|related_slug| {
            json!({
                "title": titleize_slug(related_slug),
                "id": format!("{endpoint}/{}.json", encode(related_slug)),
                "web_url": format!("https://www.test.gov.uk/{related_slug}"),
                "details": {}
            })
        })
        .collect();
    artefact
}

/// Fixture alias: artefact tagged into a section.
#[must_use]
pub fn artefact_in_a_section(endpoint: &str, slug: &str, section_slug: &str) -> Value {
    artefact_with_tag(endpoint, slug, "section", section_slug)
}

/// Fixture alias: artefact tagged into a subsection path.
#[must_use]
pub fn artefact_in_a_subsection(endpoint: &str, slug: &str, subsection_path: &str) -> Value {
    artefact_with_child_tag(endpoint, slug, "section", subsection_path)
}

fn push_tag(artefact: &mut Value, tag: Value) {
    artefact["tags"]
        .as_array_mut()
        .expect("artefact tags should be an array")
        .push(tag);
}

fn not_found_body() -> Value {
    json!({
        "_response_info": {
            "status": "not found"
        }
    })
}

fn gone_body() -> Value {
    json!({
        "_response_info": {
            "status": "gone",
            "status_message": "This item is no longer available"
        }
    })
}

fn plural_body(results: Vec<Value>) -> Value {
    let mut body = plural_response_base();
    body["results"] = Value::Array(results);
    body
}

/// Stub rule builder for a single artefact lookup.
#[must_use]
pub struct ArtefactStub<'a> {
    server: &'a MockHttpServer,
    slug: String,
    response_body: Option<Value>,
    response_status: u16,
    query: Vec<(String, String)>,
}

impl<'a> ArtefactStub<'a> {
    /// Begin a stub for the artefact at `slug`.
    pub fn new(server: &'a MockHttpServer, slug: &str) -> Self {
        Self {
            server,
            slug: slug.to_string(),
            response_body: None,
            response_status: 200,
            query: Vec::new(),
        }
    }

    /// Respond with `body` instead of the default artefact payload.
    pub fn with_response_body(mut self, body: Value) -> Self {
        self.response_body = Some(body);
        self
    }

    /// Respond with `status` instead of 200.
    pub fn with_response_status(mut self, status: u16) -> Self {
        self.response_status = status;
        self
    }

    /// Only match requests carrying this query parameter.
    pub fn with_query_parameter(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Register the stub rule.
    pub async fn mount(self) {
        let body = self
            .response_body
            .unwrap_or_else(|| artefact_for_slug(&self.server.url(), &self.slug));

        let mut stub = self
            .server
            .expect_get(&format!("/{}.json", encode(&self.slug)))
            .respond_with_status(self.response_status)
            .with_json_response(body);
        for (name, value) in &self.query {
            stub = stub.with_query_param(name, value);
        }
        stub.mount().await;
    }
}

/// Synthesizes a standard artefact from whatever slug was requested.
struct AnyArtefactResponder {
    endpoint: String,
}

impl Respond for AnyArtefactResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let slug = request
            .url
            .path()
            .trim_start_matches('/')
            .trim_end_matches(".json");
        ResponseTemplate::new(200).set_body_json(artefact_for_slug(&self.endpoint, slug))
    }
}

/// Stub helpers for the content API, bound to a mock server.
pub struct ContentApiStubs<'a> {
    server: &'a MockHttpServer,
}

impl<'a> ContentApiStubs<'a> {
    /// Bind the helpers to `server`.
    #[must_use]
    pub const fn new(server: &'a MockHttpServer) -> Self {
        Self { server }
    }

    /// Endpoint fixtures are built against: the mock server's own URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.server.url()
    }

    fn tag_results(&self, tag_type: &str, tags: Vec<TagSpec>) -> Vec<Value> {
        let endpoint = self.endpoint();
        tags.into_iter()
            .map(|tag| tag_result(&endpoint, &tag.defaulted(tag_type)))
            .collect()
    }

    // The listing rules carry is-missing guards for the parameters that
    // distinguish narrower listings. wiremock gives precedence to the rule
    // mounted first, so a bare listing rule without guards would shadow a
    // child or sorted listing mounted after it.
    fn plain_listing(&self, tag_type: &str) -> StubBuilder<'_> {
        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .without_query_param("root_sections")
            .without_query_param("parent_id")
            .without_query_param("sort")
            .without_query_param("draft")
    }

    /// Stub the root-tag listings of `tag_type` to return `tags`.
    ///
    /// Mounts both the explicit `root_sections=true` listing and the plain
    /// listing, matching how consumers fetch top-level navigation.
    pub async fn has_root_tags(&self, tag_type: &str, tags: Vec<TagSpec>) {
        let body = plural_body(self.tag_results(tag_type, tags));

        self.plain_listing(tag_type)
            .respond_with_json(body.clone())
            .mount()
            .await;
        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .with_query_param("root_sections", "true")
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub the plain listing of `tag_type` to return `tags`.
    pub async fn has_tags(&self, tag_type: &str, tags: Vec<TagSpec>) {
        let body = plural_body(self.tag_results(tag_type, tags));
        self.plain_listing(tag_type)
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub the listing of `tag_type` in a sort order to return `tags`.
    pub async fn has_sorted_tags(&self, tag_type: &str, sort: &str, tags: Vec<TagSpec>) {
        let body = plural_body(self.tag_results(tag_type, tags));
        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .with_query_param("sort", sort)
            .without_query_param("parent_id")
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub the child listing under `parent` to return `children`.
    pub async fn has_child_tags(
        &self,
        tag_type: &str,
        parent: impl Into<TagSpec>,
        children: Vec<TagSpec>,
    ) {
        let parent = parent.into().defaulted(tag_type);
        let children = children
            .into_iter()
            .map(|child| child.defaulted(tag_type).with_parent(parent.clone()))
            .collect();
        let body = plural_body(self.tag_results(tag_type, children));

        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .with_query_param("parent_id", &parent.slug)
            .without_query_param("sort")
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub the sorted child listing under `parent` to return `children`.
    pub async fn has_sorted_child_tags(
        &self,
        tag_type: &str,
        parent: impl Into<TagSpec>,
        sort: &str,
        children: Vec<TagSpec>,
    ) {
        let parent = parent.into().defaulted(tag_type);
        let children = children
            .into_iter()
            .map(|child| child.defaulted(tag_type).with_parent(parent.clone()))
            .collect();
        let body = plural_body(self.tag_results(tag_type, children));

        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .with_query_param("parent_id", &parent.slug)
            .with_query_param("sort", sort)
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub a single tag lookup.
    pub async fn has_tag(&self, tag_type: &str, tag: impl Into<TagSpec>) {
        let spec = tag.into().defaulted(tag_type);
        let body = tag_result(&self.endpoint(), &spec);
        self.server
            .expect_get(&format!(
                "/tags/{}/{}.json",
                encode(tag_type),
                encode(&spec.slug)
            ))
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub a single tag lookup for a tag nested under `parent_slug`.
    pub async fn has_tag_with_parent(
        &self,
        tag_type: &str,
        tag: impl Into<TagSpec>,
        parent_slug: &str,
    ) {
        let spec = tag
            .into()
            .defaulted(tag_type)
            .with_parent(TagSpec::new(parent_slug, tag_type));
        let body = tag_result(&self.endpoint(), &spec);
        self.server
            .expect_get(&format!(
                "/tags/{}/{}.json",
                encode(tag_type),
                encode(&spec.slug)
            ))
            .respond_with_json(body)
            .mount()
            .await;
    }

    /// Stub a tag lookup to 404.
    pub async fn does_not_have_tag(&self, tag_type: &str, slug: &str) {
        self.server
            .expect_get(&format!("/tags/{}/{}.json", encode(tag_type), encode(slug)))
            .respond_with_status(404)
            .with_json_response(not_found_body())
            .mount()
            .await;
    }

    /// Stub the listing of `tag_type` to 404.
    pub async fn does_not_have_tags(&self, tag_type: &str) {
        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .respond_with_status(404)
            .with_json_response(not_found_body())
            .mount()
            .await;
    }

    /// Stub the listings of `tag_type` so the plain listing returns only
    /// live tags and the `draft=true` listing returns live and draft tags.
    pub async fn has_draft_and_live_tags(
        &self,
        tag_type: &str,
        live: Vec<TagSpec>,
        draft: Vec<TagSpec>,
    ) {
        let endpoint = self.endpoint();
        let live_results: Vec<Value> = live
            .into_iter()
            .map(|tag| tag_result(&endpoint, &tag.defaulted(tag_type).with_state("live")))
            .collect();
        let draft_results: Vec<Value> = draft
            .into_iter()
            .map(|tag| tag_result(&endpoint, &tag.defaulted(tag_type).with_state("draft")))
            .collect();

        self.plain_listing(tag_type)
            .respond_with_json(plural_body(live_results.clone()))
            .mount()
            .await;

        let mut combined = live_results;
        combined.extend(draft_results);
        self.server
            .expect_get("/tags.json")
            .with_query_param("type", tag_type)
            .with_query_param("draft", "true")
            .respond_with_json(plural_body(combined))
            .mount()
            .await;
    }

    /// Stub the artefact at `slug` with the standard payload.
    pub async fn has_an_artefact(&self, slug: &str) {
        ArtefactStub::new(self.server, slug).mount().await;
    }

    /// Begin a customizable stub for the artefact at `slug`.
    #[must_use]
    pub fn artefact_stub(&self, slug: &str) -> ArtefactStub<'a> {
        ArtefactStub::new(self.server, slug)
    }

    /// Stub an unpublished edition of the artefact at `slug`.
    pub async fn has_unpublished_artefact(&self, slug: &str, edition: u32) {
        ArtefactStub::new(self.server, slug)
            .with_query_parameter("edition", &edition.to_string())
            .mount()
            .await;
    }

    /// Stub the artefact at `slug` localized for a SNAC area code.
    pub async fn has_artefact_with_snac(&self, slug: &str, snac: &str) {
        ArtefactStub::new(self.server, slug)
            .with_query_parameter("snac", snac)
            .mount()
            .await;
    }

    /// Stub the artefact at `slug` to 404.
    pub async fn does_not_have_an_artefact(&self, slug: &str) {
        ArtefactStub::new(self.server, slug)
            .with_response_body(not_found_body())
            .with_response_status(404)
            .mount()
            .await;
    }

    /// Stub the artefact at `slug` to 410 gone.
    pub async fn has_an_archived_artefact(&self, slug: &str) {
        ArtefactStub::new(self.server, slug)
            .with_response_body(gone_body())
            .with_response_status(410)
            .mount()
            .await;
    }

    /// Stub every artefact lookup, synthesizing the response from the slug
    /// in the request at response time.
    pub async fn stubs_any_artefact(&self) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/[a-z0-9-]+\.json$"))
            .respond_with(AnyArtefactResponder {
                endpoint: self.endpoint(),
            })
            .mount(self.server.inner())
            .await;
    }

    /// Stub the artefact listing for a need.
    pub async fn has_artefacts_for_need(&self, need_id: &str, artefacts: Vec<Value>) {
        self.server
            .expect_get(&format!("/for_need/{}.json", encode(need_id)))
            .respond_with_json(plural_body(artefacts))
            .mount()
            .await;
    }

    // Legacy section helpers.
    //
    // Sections predate typed tags; retire these in favour of the tag
    // helpers above, which work with any tag type.

    /// Stub the root section listing.
    pub async fn has_root_sections(&self, slugs: &[&str]) {
        let tags = slugs.iter().map(|slug| (*slug).into()).collect();
        self.has_root_tags("section", tags).await;
    }

    /// Stub a single section lookup.
    pub async fn has_section(&self, slug: &str) {
        self.has_tag("section", slug).await;
    }

    /// Stub the subsection listing under `parent_slug`.
    pub async fn has_subsections(&self, parent_slug: &str, subsection_slugs: &[&str]) {
        let children = subsection_slugs.iter().map(|slug| (*slug).into()).collect();
        self.has_child_tags("section", parent_slug, children).await;
    }
}
