//! Shared fixtures and an in-process stand-in for the Publishing API.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::put;
use axum::{Json, Router};
use chrono::TimeZone;
use herald_core::types::Timestamp;
use herald_db::models::edition::{Edition, EditionTranslation, TranslatedEdition};
use herald_db::models::organisation::{
    Organisation, OrganisationTranslation, TranslatedOrganisation,
};
use herald_db::models::statistics_announcement::{
    StatisticsAnnouncement, StatisticsAnnouncementDate, StatisticsAnnouncementDetail,
};
use herald_db::models::unpublishing::{Unpublishing, UnpublishingWithEdition};
use herald_publishing::client::PublishingApiClient;
use herald_publishing::PublishingApi;
use tokio::task::JoinHandle;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

/// A PUT received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Base path the item was stored under (request path minus `/content`).
    pub base_path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Requests beyond this many are answered with 500.
    succeed_first: Option<usize>,
}

/// Records every `PUT /content/*` and answers 200, or 500 once the
/// configured number of successes is used up.
pub struct StubPublishingApi {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubPublishingApi {
    pub async fn start() -> Self {
        Self::spawn(None).await
    }

    /// Answer the first `n` requests with 200 and every later one with 500.
    pub async fn start_failing_after(n: usize) -> Self {
        Self::spawn(Some(n)).await
    }

    async fn spawn(succeed_first: Option<usize>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            requests: Arc::clone(&requests),
            succeed_first,
        };
        let app = Router::new()
            .route("/content/{*path}", put(record_put))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// A dispatcher pointed at this stub.
    pub fn dispatcher(&self) -> PublishingApi {
        self.dispatcher_with_token(None)
    }

    pub fn dispatcher_with_token(&self, token: Option<&str>) -> PublishingApi {
        PublishingApi::new(PublishingApiClient::with_client(
            reqwest::Client::new(),
            self.url.clone(),
            token.map(str::to_string),
        ))
    }
}

impl Drop for StubPublishingApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_put(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let mut requests = state.requests.lock().unwrap();
    let already_answered = requests.len();
    requests.push(RecordedRequest {
        base_path: uri
            .path()
            .strip_prefix("/content")
            .unwrap_or(uri.path())
            .to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match state.succeed_first {
        Some(n) if already_answered >= n => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn ts(day: u32) -> Timestamp {
    chrono::Utc.with_ymd_and_hms(2026, 4, day, 10, 0, 0).unwrap()
}

pub fn edition(id: i64, state: &str) -> TranslatedEdition {
    TranslatedEdition {
        edition: Edition {
            id,
            content_id: Uuid::from_u128(0x1000 + id as u128),
            document_type: "publication".into(),
            slug: format!("annual-report-{id}"),
            state: state.into(),
            first_published_at: Some(ts(1)),
            public_updated_at: Some(ts(2)),
            created_at: ts(1),
            updated_at: ts(2),
        },
        translations: vec![edition_translation(id, 1, "en", "Annual report")],
    }
}

pub fn edition_translation(edition_id: i64, id: i64, locale: &str, title: &str) -> EditionTranslation {
    EditionTranslation {
        id,
        edition_id,
        locale: locale.into(),
        title: title.into(),
        summary: Some(format!("{title} summary")),
        body: Some(format!("{title} body")),
        created_at: ts(1),
        updated_at: ts(1),
    }
}

pub fn organisation() -> TranslatedOrganisation {
    TranslatedOrganisation {
        organisation: Organisation {
            id: 3,
            content_id: Uuid::from_u128(0x3000),
            slug: "office-for-national-statistics".into(),
            created_at: ts(1),
            updated_at: ts(3),
        },
        translations: vec![OrganisationTranslation {
            id: 1,
            organisation_id: 3,
            locale: "en".into(),
            name: "Office for National Statistics".into(),
            acronym: Some("ONS".into()),
            created_at: ts(1),
            updated_at: ts(1),
        }],
    }
}

pub fn with_french_name(mut org: TranslatedOrganisation) -> TranslatedOrganisation {
    org.translations.push(OrganisationTranslation {
        id: 2,
        organisation_id: org.organisation.id,
        locale: "fr".into(),
        name: "French name".into(),
        acronym: None,
        created_at: ts(2),
        updated_at: ts(2),
    });
    org
}

pub fn unpublishing(edition: TranslatedEdition, redirect: bool) -> UnpublishingWithEdition {
    UnpublishingWithEdition {
        unpublishing: Unpublishing {
            id: 9,
            edition_id: edition.edition.id,
            unpublishing_reason_id: 1,
            explanation: Some("This page was published by mistake".into()),
            alternative_url: redirect.then(|| "https://www.gov.uk/government/other".into()),
            redirect,
            created_at: ts(5),
            updated_at: ts(5),
        },
        edition,
    }
}

pub fn announcement() -> StatisticsAnnouncementDetail {
    let announcement = StatisticsAnnouncement {
        id: 12,
        content_id: Uuid::from_u128(0x1200),
        title: "Labour market overview".into(),
        slug: "labour-market-overview".into(),
        summary: "Monthly labour market figures".into(),
        organisation_id: 3,
        topic_id: 4,
        publication_type_id: 5,
        publication_id: None,
        creator_id: 1,
        cancellation_reason: None,
        cancelled_at: None,
        cancelled_by_id: None,
        created_at: ts(1),
        updated_at: ts(6),
    };
    let date = StatisticsAnnouncementDate {
        id: 1,
        statistics_announcement_id: 12,
        release_date: ts(20),
        precision: 0,
        confirmed: true,
        change_note: None,
        creator_id: Some(1),
        created_at: ts(1),
        updated_at: ts(1),
    };
    StatisticsAnnouncementDetail::new(announcement, Some(date))
}
