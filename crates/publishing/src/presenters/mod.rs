//! Presenters turning content records into Publishing API content items.
//!
//! Every publishable record implements [`Publishable`]. The locale to render
//! is always passed in explicitly; presenters never read ambient state, so
//! presenting the same record twice yields identical items.

pub mod edition;
pub mod organisation;
pub mod statistics_announcement;
pub mod unpublishing;

use herald_core::locale::Locale;
use herald_core::types::{DbId, Timestamp};
use herald_core::update_type::UpdateType;
use serde::Serialize;
use uuid::Uuid;

/// Application name reported as the publisher of every item.
pub const PUBLISHING_APP: &str = "whitehall";

/// Frontend application that renders items published from here.
pub const RENDERING_APP: &str = "whitehall-frontend";

/// A record that can be pushed to the Publishing API.
pub trait Publishable {
    /// Human-readable record type, used in errors and logs.
    fn content_kind(&self) -> &'static str;

    /// Database id of the record.
    fn record_id(&self) -> DbId;

    /// Path the record is published under.
    fn base_path(&self) -> String;

    /// Locales the record has content in, in declaration order.
    fn available_locales(&self) -> Vec<Locale>;

    /// Whether the record may be republished.
    fn is_publicly_visible(&self) -> bool;

    /// Render the record in `locale`.
    fn present(&self, locale: &Locale, update_type: UpdateType) -> PresentedItem;
}

/// A rendered content item and the path it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedItem {
    pub base_path: String,
    pub payload: ContentItem,
}

/// A Publishing API content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<Uuid>,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub format: String,
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_updated_at: Option<Timestamp>,
    pub update_type: UpdateType,
    pub publishing_app: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering_app: Option<&'static str>,
    pub routes: Vec<Route>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
    pub details: serde_json::Value,
}

/// A path the content item answers on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    #[serde(rename = "type")]
    pub route_type: &'static str,
}

impl Route {
    pub fn exact(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            route_type: "exact",
        }
    }
}

/// A path that forwards to another location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub path: String,
    #[serde(rename = "type")]
    pub route_type: &'static str,
    pub destination: String,
}

impl Redirect {
    pub fn exact(path: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            route_type: "exact",
            destination: destination.into(),
        }
    }
}
