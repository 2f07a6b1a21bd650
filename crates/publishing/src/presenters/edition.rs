//! Edition presenter.

use herald_core::edition;
use herald_core::locale::Locale;
use herald_core::types::DbId;
use herald_core::update_type::UpdateType;
use herald_db::models::edition::TranslatedEdition;
use serde_json::json;

use super::{ContentItem, PresentedItem, Publishable, Route, PUBLISHING_APP, RENDERING_APP};

/// Public path of an edition, e.g. `/government/publications/{slug}`.
pub fn base_path(edition: &TranslatedEdition) -> String {
    format!(
        "{}/{}",
        edition::base_path_prefix(&edition.edition.document_type),
        edition.edition.slug
    )
}

impl Publishable for TranslatedEdition {
    fn content_kind(&self) -> &'static str {
        "Edition"
    }

    fn record_id(&self) -> DbId {
        self.edition.id
    }

    fn base_path(&self) -> String {
        base_path(self)
    }

    fn available_locales(&self) -> Vec<Locale> {
        TranslatedEdition::available_locales(self)
    }

    fn is_publicly_visible(&self) -> bool {
        self.edition
            .edition_state()
            .is_some_and(|state| state.is_publicly_visible())
    }

    fn present(&self, locale: &Locale, update_type: UpdateType) -> PresentedItem {
        let base_path = base_path(self);
        let translation = self.translation(locale);

        let payload = ContentItem {
            content_id: Some(self.edition.content_id),
            base_path: base_path.clone(),
            title: translation.map(|t| t.title.clone()),
            description: translation.and_then(|t| t.summary.clone()),
            format: self.edition.document_type.clone(),
            locale: locale.clone(),
            public_updated_at: self.edition.public_updated_at,
            update_type,
            publishing_app: PUBLISHING_APP,
            rendering_app: Some(RENDERING_APP),
            routes: vec![Route::exact(base_path.clone())],
            redirects: Vec::new(),
            details: json!({
                "body": translation.and_then(|t| t.body.clone()).unwrap_or_default(),
                "first_public_at": self.edition.first_published_at,
            }),
        };

        PresentedItem { base_path, payload }
    }
}
