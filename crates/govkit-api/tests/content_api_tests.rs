//! Integration tests for the content API client using HTTP stubbing.
//!
//! These tests drive `HttpContentClient` against stub rules mounted by
//! `govkit-test-doubles`, without making real network calls.

use govkit_api::content::{ContentApiClient, HttpContentClient};
use govkit_api::error::ApiError;
use govkit_test_doubles::content::{
    artefact_with_child_tags, artefact_with_related_artefacts, ContentApiStubs, TagSpec,
};
use govkit_test_doubles::MockHttpServer;

#[tokio::test]
async fn fetches_an_artefact() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_an_artefact("reporting-a-death")
        .await;

    let client = HttpContentClient::new(server.url());
    let artefact = client
        .artefact("reporting-a-death")
        .await
        .expect("should succeed");

    assert_eq!(artefact.title, "Reporting a death");
    assert_eq!(artefact.format.as_deref(), Some("guide"));
    assert_eq!(
        artefact.web_url.as_deref(),
        Some("http://frontend.test.gov.uk/reporting-a-death")
    );
    assert_eq!(artefact.details.parts.len(), 2);
    assert_eq!(artefact.details.parts[1].id, "reporting-a-death-part-2");
    assert_eq!(artefact.details.need_ids, vec!["100001"]);
    assert!(artefact.tags.is_empty());
    assert!(artefact.related.is_empty());
}

#[tokio::test]
async fn missing_artefact_is_not_found() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .does_not_have_an_artefact("no-such-thing")
        .await;

    let client = HttpContentClient::new(server.url());
    let result = client.artefact("no-such-thing").await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn archived_artefact_is_gone() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_an_archived_artefact("old-scheme")
        .await;

    let client = HttpContentClient::new(server.url());
    let result = client.artefact("old-scheme").await;

    assert!(matches!(result, Err(ApiError::Gone(_))));
}

#[tokio::test]
async fn fetches_an_unpublished_edition() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_unpublished_artefact("benefit-rates", 3)
        .await;

    let client = HttpContentClient::new(server.url());
    let artefact = client
        .unpublished_artefact("benefit-rates", 3)
        .await
        .expect("should succeed");

    assert_eq!(artefact.title, "Benefit rates");
}

#[tokio::test]
async fn fetches_an_artefact_for_a_snac_code() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_artefact_with_snac("register-to-vote", "00BK")
        .await;

    let client = HttpContentClient::new(server.url());
    let artefact = client
        .artefact_with_snac("register-to-vote", "00BK")
        .await
        .expect("should succeed");

    assert_eq!(artefact.title, "Register to vote");
}

#[tokio::test]
async fn custom_fixture_bodies_deserialize_with_nested_tags() {
    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);

    let body = artefact_with_child_tags(&stubs.endpoint(), "duty-rates", "section", &["tax/vat"]);
    stubs
        .artefact_stub("duty-rates")
        .with_response_body(body)
        .mount()
        .await;

    let client = HttpContentClient::new(server.url());
    let artefact = client.artefact("duty-rates").await.expect("should succeed");

    assert_eq!(artefact.tags.len(), 1);
    let tag = &artefact.tags[0];
    assert_eq!(tag.slug, "tax/vat");
    assert_eq!(tag.title, "Vat");
    let parent = tag.parent.as_ref().expect("parent should be present");
    assert_eq!(parent.slug, "tax");
    assert!(parent.parent.is_none());
}

#[tokio::test]
async fn related_artefacts_round_trip() {
    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);

    let body = artefact_with_related_artefacts(&stubs.endpoint(), "vat", &["vat-rates"]);
    stubs.artefact_stub("vat").with_response_body(body).mount().await;

    let client = HttpContentClient::new(server.url());
    let artefact = client.artefact("vat").await.expect("should succeed");

    assert_eq!(artefact.related.len(), 1);
    assert_eq!(artefact.related[0].title, "Vat rates");
}

#[tokio::test]
async fn lists_root_tags_and_plain_listings() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_root_tags("section", vec!["business".into(), "driving".into()])
        .await;

    let client = HttpContentClient::new(server.url());

    let roots = client.root_tags("section").await.expect("should succeed");
    assert_eq!(roots.results.len(), 2);
    assert_eq!(roots.results[0].slug, "business");
    assert_eq!(roots.results[0].title, "Business");
    assert_eq!(
        roots.results[0].details.tag_type.as_deref(),
        Some("section")
    );

    // The same rule set also answers the plain listing.
    let listed = client.tags("section").await.expect("should succeed");
    assert_eq!(listed.results.len(), 2);
    assert_eq!(listed.total, 100);
}

#[tokio::test]
async fn lists_sorted_tags() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_sorted_tags(
            "section",
            "alphabetical",
            vec!["apples".into(), "bananas".into()],
        )
        .await;

    let client = HttpContentClient::new(server.url());
    let tags = client
        .sorted_tags("section", "alphabetical")
        .await
        .expect("should succeed");

    assert_eq!(tags.results.len(), 2);
    assert_eq!(tags.results[1].slug, "bananas");
}

#[tokio::test]
async fn lists_child_tags_with_their_parent() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_child_tags("section", "money", vec!["money/tax".into()])
        .await;

    let client = HttpContentClient::new(server.url());
    let children = client
        .child_tags("section", "money")
        .await
        .expect("should succeed");

    assert_eq!(children.results.len(), 1);
    assert_eq!(children.results[0].slug, "money/tax");
    let parent = children.results[0]
        .parent
        .as_ref()
        .expect("parent should be present");
    assert_eq!(parent.slug, "money");
}

#[tokio::test]
async fn fetches_a_tag_with_its_parent() {
    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);
    stubs
        .has_tag_with_parent("section", "money/tax", "money")
        .await;

    let client = HttpContentClient::new(server.url());
    let tag = client
        .tag("section", "money/tax")
        .await
        .expect("should succeed");

    assert_eq!(tag.slug, "money/tax");
    assert_eq!(tag.parent.expect("parent should be present").slug, "money");
}

#[tokio::test]
async fn missing_tag_is_not_found() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .does_not_have_tag("section", "no-such-section")
        .await;

    let client = HttpContentClient::new(server.url());
    let result = client.tag("section", "no-such-section").await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn missing_tag_listing_is_not_found() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .does_not_have_tags("made-up-type")
        .await;

    let client = HttpContentClient::new(server.url());
    let result = client.tags("made-up-type").await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn draft_tags_only_show_up_when_asked_for() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server)
        .has_draft_and_live_tags(
            "specialist_sector",
            vec!["oil-and-gas".into()],
            vec!["onshore-wind".into()],
        )
        .await;

    let client = HttpContentClient::new(server.url());

    let live = client
        .tags("specialist_sector")
        .await
        .expect("should succeed");
    assert_eq!(live.results.len(), 1);
    assert_eq!(live.results[0].state.as_deref(), Some("live"));

    let all = client
        .tags_including_drafts("specialist_sector")
        .await
        .expect("should succeed");
    assert_eq!(all.results.len(), 2);
    assert_eq!(all.results[1].slug, "onshore-wind");
    assert_eq!(all.results[1].state.as_deref(), Some("draft"));
}

#[tokio::test]
async fn any_artefact_stub_synthesizes_from_the_requested_slug() {
    let server = MockHttpServer::start().await;
    ContentApiStubs::new(&server).stubs_any_artefact().await;

    let client = HttpContentClient::new(server.url());

    let first = client
        .artefact("student-finance")
        .await
        .expect("should succeed");
    assert_eq!(first.title, "Student finance");

    let second = client.artefact("jury-service").await.expect("should succeed");
    assert_eq!(second.title, "Jury service");
}

#[tokio::test]
async fn lists_artefacts_for_a_need() {
    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);
    let artefacts = vec![
        govkit_test_doubles::content::artefact_for_slug(&stubs.endpoint(), "report-a-pothole"),
    ];
    stubs.has_artefacts_for_need("100001", artefacts).await;

    let client = HttpContentClient::new(server.url());
    let page = client
        .artefacts_for_need("100001")
        .await
        .expect("should succeed");

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "Report a pothole");
}

#[tokio::test]
async fn legacy_section_helpers_still_mount() {
    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);
    stubs.has_root_sections(&["business", "driving"]).await;
    stubs.has_subsections("business", &["business/tax"]).await;

    let client = HttpContentClient::new(server.url());

    let roots = client.root_tags("section").await.expect("should succeed");
    assert_eq!(roots.results.len(), 2);

    let children = client
        .child_tags("section", "business")
        .await
        .expect("should succeed");
    assert_eq!(children.results[0].slug, "business/tax");
}

#[tokio::test]
async fn verifies_expected_call_counts() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/vat-rates.json")
        .respond_with_json(govkit_test_doubles::content::artefact_for_slug(
            &server.url(),
            "vat-rates",
        ))
        .expect_times(2)
        .mount()
        .await;

    let client = HttpContentClient::new(server.url());
    let _ = client.artefact("vat-rates").await;
    let _ = client.artefact("vat-rates").await;

    server.verify().await;
}

#[tokio::test]
async fn mock_client_serves_registered_fixtures() {
    use govkit_api::content::mock::MockContentClient;

    let server = MockHttpServer::start().await;
    let stubs = ContentApiStubs::new(&server);

    // Borrow a fixture payload to seed the in-process mock.
    let artefact = serde_json::from_value(govkit_test_doubles::content::artefact_for_slug(
        &stubs.endpoint(),
        "vat-rates",
    ))
    .expect("fixture should deserialize");

    let mock = MockContentClient::new();
    mock.add_artefact("vat-rates", artefact);

    let found = mock.artefact("vat-rates").await.expect("should succeed");
    assert_eq!(found.title, "Vat rates");

    let missing = mock.artefact("gone").await;
    assert!(matches!(missing, Err(ApiError::NotFound(slug)) if slug == "gone"));

    assert_eq!(mock.artefact_calls(), vec!["vat-rates", "gone"]);
}
