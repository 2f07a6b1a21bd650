//! Organisation presenter.

use herald_core::locale::Locale;
use herald_core::types::DbId;
use herald_core::update_type::UpdateType;
use herald_db::models::organisation::TranslatedOrganisation;
use serde_json::json;

use super::{ContentItem, PresentedItem, Publishable, Route, PUBLISHING_APP, RENDERING_APP};

/// Format organisations are published with until they have a native frontend.
pub const ORGANISATION_FORMAT: &str = "placeholder_organisation";

/// Public path of an organisation.
pub fn base_path(organisation: &TranslatedOrganisation) -> String {
    format!(
        "/government/organisations/{}",
        organisation.organisation.slug
    )
}

impl Publishable for TranslatedOrganisation {
    fn content_kind(&self) -> &'static str {
        "Organisation"
    }

    fn record_id(&self) -> DbId {
        self.organisation.id
    }

    fn base_path(&self) -> String {
        base_path(self)
    }

    fn available_locales(&self) -> Vec<Locale> {
        TranslatedOrganisation::available_locales(self)
    }

    /// Organisations have no lifecycle; they are always public.
    fn is_publicly_visible(&self) -> bool {
        true
    }

    fn present(&self, locale: &Locale, update_type: UpdateType) -> PresentedItem {
        let base_path = base_path(self);
        let translation = self.translation(locale);

        let payload = ContentItem {
            content_id: Some(self.organisation.content_id),
            base_path: base_path.clone(),
            title: translation.map(|t| t.name.clone()),
            description: None,
            format: ORGANISATION_FORMAT.to_string(),
            locale: locale.clone(),
            public_updated_at: Some(self.organisation.updated_at),
            update_type,
            publishing_app: PUBLISHING_APP,
            rendering_app: Some(RENDERING_APP),
            routes: vec![Route::exact(base_path.clone())],
            redirects: Vec::new(),
            details: json!({
                "acronym": translation.and_then(|t| t.acronym.clone()),
            }),
        };

        PresentedItem { base_path, payload }
    }
}
