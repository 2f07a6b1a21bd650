//! Publish / republish dispatch against a stub Publishing API.

mod common;

use assert_matches::assert_matches;
use herald_core::locale::Locale;
use herald_core::update_type::UpdateType;
use herald_publishing::{Publishable, PublishingApiError, PublishingError};
use serde_json::json;

use common::*;

fn locales(codes: &[&str]) -> Vec<Locale> {
    codes.iter().map(|c| c.parse().unwrap()).collect()
}

// ---------------------------------------------------------------------------
// Publish
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_sends_presented_edition() {
    let stub = StubPublishingApi::start().await;
    let edition = edition(1, "published");

    let outcome = stub.dispatcher().publish(&edition).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].base_path, "/government/publications/annual-report-1");

    let expected = edition.present(&"en".parse().unwrap(), UpdateType::Major);
    assert_eq!(requests[0].body, serde_json::to_value(&expected.payload).unwrap());
    assert_eq!(requests[0].body["update_type"], "major");

    assert_eq!(outcome.content_kind, "Edition");
    assert_eq!(outcome.update_type, UpdateType::Major);
    assert_eq!(outcome.locales, locales(&["en"]));
}

#[tokio::test]
async fn publish_sends_organisation() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher().publish(&organisation()).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].base_path,
        "/government/organisations/office-for-national-statistics"
    );
    assert_eq!(requests[0].body["format"], "placeholder_organisation");
    assert_eq!(requests[0].body["title"], "Office for National Statistics");
    assert_eq!(requests[0].body["details"]["acronym"], "ONS");
}

#[tokio::test]
async fn publish_sends_statistics_announcement() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher().publish(&announcement()).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].base_path,
        "/government/statistics/announcements/labour-market-overview"
    );
    let body = &requests[0].body;
    assert_eq!(body["format"], "statistics_announcement");
    assert_eq!(body["locale"], "en");
    assert_eq!(body["details"]["format_sub_type"], "national");
    assert_eq!(body["details"]["display_date"], "20 April 2026 10:00am");
}

#[tokio::test]
async fn publish_sends_one_request_per_translation() {
    let stub = StubPublishingApi::start().await;
    let org = with_french_name(organisation());

    let outcome = stub.dispatcher().publish(&org).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.base_path == org.base_path()));

    assert_eq!(requests[0].body["locale"], "en");
    assert_eq!(requests[0].body["title"], "Office for National Statistics");
    assert_eq!(requests[1].body["locale"], "fr");
    assert_eq!(requests[1].body["title"], "French name");

    assert_eq!(outcome.locales, locales(&["en", "fr"]));
}

#[tokio::test]
async fn record_without_usable_translations_is_sent_in_default_locale() {
    let stub = StubPublishingApi::start().await;
    let mut item = edition(5, "published");
    item.translations[0].locale = "xx-unknown".into();

    let outcome = stub.dispatcher().republish(&item).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["locale"], "en");
    assert_eq!(requests[0].body["title"], "Annual report");
    assert_eq!(outcome.locales, locales(&["en"]));
}

#[tokio::test]
async fn publish_is_not_restricted_to_visible_records() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher().publish(&edition(2, "draft")).await.unwrap();

    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn publishing_twice_sends_identical_payloads() {
    let stub = StubPublishingApi::start().await;
    let api = stub.dispatcher();
    let org = with_french_name(organisation());

    api.publish(&org).await.unwrap();
    api.publish(&org).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].body, requests[2].body);
    assert_eq!(requests[1].body, requests[3].body);
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher_with_token(Some("secret-token"))
        .publish(&organisation())
        .await
        .unwrap();

    assert_eq!(
        stub.requests()[0].authorization.as_deref(),
        Some("Bearer secret-token")
    );
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher().publish(&organisation()).await.unwrap();

    assert_eq!(stub.requests()[0].authorization, None);
}

// ---------------------------------------------------------------------------
// Republish
// ---------------------------------------------------------------------------

#[tokio::test]
async fn republish_uses_republish_update_type() {
    let stub = StubPublishingApi::start().await;

    let outcome = stub
        .dispatcher()
        .republish(&edition(1, "published"))
        .await
        .unwrap();

    assert_eq!(outcome.update_type, UpdateType::Republish);
    assert_eq!(stub.requests()[0].body["update_type"], "republish");
}

#[tokio::test]
async fn republish_sends_every_translation() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher()
        .republish(&with_french_name(organisation()))
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.body["update_type"] == "republish"));
}

#[tokio::test]
async fn republish_archived_edition_succeeds() {
    let stub = StubPublishingApi::start().await;

    stub.dispatcher()
        .republish(&edition(3, "archived"))
        .await
        .unwrap();

    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn republish_draft_edition_is_rejected_without_requests() {
    let stub = StubPublishingApi::start().await;

    let result = stub.dispatcher().republish(&edition(4, "draft")).await;

    assert_matches!(
        result,
        Err(PublishingError::UnpublishableInstance { kind: "Edition", id: 4 })
    );
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn republish_unknown_edition_state_is_rejected() {
    let stub = StubPublishingApi::start().await;

    let result = stub.dispatcher().republish(&edition(5, "mystery")).await;

    assert_matches!(result, Err(PublishingError::UnpublishableInstance { .. }));
    assert!(stub.requests().is_empty());
}

// ---------------------------------------------------------------------------
// Unpublishings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn republish_unpublishing_ignores_edition_state() {
    let stub = StubPublishingApi::start().await;
    let item = unpublishing(edition(6, "draft"), false);

    stub.dispatcher().republish(&item).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].base_path, "/government/publications/annual-report-6");
    assert_eq!(requests[0].body["format"], "unpublishing");
    assert_eq!(
        requests[0].body["details"]["explanation"],
        "This page was published by mistake"
    );
    assert_eq!(requests[0].body["details"]["reason"], "Published in error");
}

#[tokio::test]
async fn redirect_unpublishing_is_sent_as_redirect() {
    let stub = StubPublishingApi::start().await;
    let item = unpublishing(edition(7, "draft"), true);

    stub.dispatcher().publish(&item).await.unwrap();

    let body = &stub.requests()[0].body;
    assert_eq!(body["format"], "redirect");
    assert_eq!(body["routes"], json!([]));
    assert_eq!(
        body["redirects"],
        json!([{
            "path": "/government/publications/annual-report-7",
            "type": "exact",
            "destination": "https://www.gov.uk/government/other",
        }])
    );
    assert!(body.get("content_id").is_none());
    assert!(body.get("rendering_app").is_none());
}

#[tokio::test]
async fn translated_unpublished_edition_is_sent_in_every_locale() {
    let stub = StubPublishingApi::start().await;
    let mut withdrawn = edition(8, "draft");
    withdrawn
        .translations
        .push(edition_translation(8, 2, "de", "Jahresbericht"));
    let item = unpublishing(withdrawn, false);

    let outcome = stub.dispatcher().publish(&item).await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body["title"], "Annual report");
    assert_eq!(requests[1].body["locale"], "de");
    assert_eq!(requests[1].body["title"], "Jahresbericht");
    assert_eq!(outcome.locales, locales(&["en", "de"]));
}

#[tokio::test]
async fn republish_invalid_redirect_unpublishing_is_rejected() {
    let stub = StubPublishingApi::start().await;
    let mut item = unpublishing(edition(9, "draft"), false);
    item.unpublishing.redirect = true;

    let result = stub.dispatcher().republish(&item).await;

    assert_matches!(
        result,
        Err(PublishingError::UnpublishableInstance { kind: "Unpublishing", id: 9 })
    );
    assert!(stub.requests().is_empty());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_error_is_propagated() {
    let stub = StubPublishingApi::start_failing_after(0).await;

    let result = stub.dispatcher().publish(&organisation()).await;

    assert_matches!(
        result,
        Err(PublishingError::Api(PublishingApiError::ApiError { status: 500, .. }))
    );
}

#[tokio::test]
async fn failure_stops_remaining_locales() {
    let stub = StubPublishingApi::start_failing_after(1).await;
    let mut org = with_french_name(organisation());
    org.translations.push(herald_db::models::organisation::OrganisationTranslation {
        id: 3,
        organisation_id: org.organisation.id,
        locale: "cy".into(),
        name: "Welsh name".into(),
        acronym: None,
        created_at: ts(3),
        updated_at: ts(3),
    });

    let result = stub.dispatcher().publish(&org).await;

    assert_matches!(result, Err(PublishingError::Api(_)));
    let requests = stub.requests();
    assert_eq!(requests.len(), 2, "the third locale must not be sent");
    assert_eq!(requests[1].body["locale"], "fr");
}

#[tokio::test]
async fn unreachable_api_is_a_request_error() {
    let api = herald_publishing::PublishingApi::new(
        herald_publishing::client::PublishingApiClient::with_client(
            reqwest::Client::new(),
            "http://127.0.0.1:1".into(),
            None,
        ),
    );

    let result = api.publish(&organisation()).await;

    assert_matches!(
        result,
        Err(PublishingError::Api(PublishingApiError::Request(_)))
    );
}
