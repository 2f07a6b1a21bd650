//! Statistics announcement presenter.

use herald_core::locale::Locale;
use herald_core::statistics_announcement::PUBLICATION_TYPE_NATIONAL_STATISTICS;
use herald_core::types::DbId;
use herald_core::update_type::UpdateType;
use herald_db::models::statistics_announcement::StatisticsAnnouncementDetail;
use serde_json::json;

use super::{ContentItem, PresentedItem, Publishable, Route, PUBLISHING_APP, RENDERING_APP};

pub const STATISTICS_ANNOUNCEMENT_FORMAT: &str = "statistics_announcement";

/// Public path of an announcement.
pub fn base_path(detail: &StatisticsAnnouncementDetail) -> String {
    format!(
        "/government/statistics/announcements/{}",
        detail.announcement.slug
    )
}

fn format_sub_type(publication_type_id: i16) -> &'static str {
    if publication_type_id == PUBLICATION_TYPE_NATIONAL_STATISTICS {
        "national"
    } else {
        "official"
    }
}

impl Publishable for StatisticsAnnouncementDetail {
    fn content_kind(&self) -> &'static str {
        "StatisticsAnnouncement"
    }

    fn record_id(&self) -> DbId {
        self.announcement.id
    }

    fn base_path(&self) -> String {
        base_path(self)
    }

    /// Announcements are only ever written in English.
    fn available_locales(&self) -> Vec<Locale> {
        vec![Locale::default_locale()]
    }

    /// Announcements stay public once made, including after cancellation.
    fn is_publicly_visible(&self) -> bool {
        true
    }

    fn present(&self, locale: &Locale, update_type: UpdateType) -> PresentedItem {
        let base_path = base_path(self);
        let announcement = &self.announcement;

        let payload = ContentItem {
            content_id: Some(announcement.content_id),
            base_path: base_path.clone(),
            title: Some(announcement.title.clone()),
            description: Some(announcement.summary.clone()),
            format: STATISTICS_ANNOUNCEMENT_FORMAT.to_string(),
            locale: locale.clone(),
            public_updated_at: Some(announcement.updated_at),
            update_type,
            publishing_app: PUBLISHING_APP,
            rendering_app: Some(RENDERING_APP),
            routes: vec![Route::exact(base_path.clone())],
            redirects: Vec::new(),
            details: json!({
                "display_date": self.display_date,
                "state": self.release_status,
                "format_sub_type": format_sub_type(announcement.publication_type_id),
                "cancellation_reason": announcement.cancellation_reason,
                "cancelled_at": announcement.cancelled_at,
            }),
        };

        PresentedItem { base_path, payload }
    }
}
