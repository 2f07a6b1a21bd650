//! Unpublishing presenter.
//!
//! An unpublished edition keeps its base path. A redirecting unpublishing is
//! sent as a `redirect` item pointing at the alternative URL; any other is
//! sent as an `unpublishing` item carrying the explanation.

use herald_core::locale::Locale;
use herald_core::types::DbId;
use herald_core::update_type::UpdateType;
use herald_db::models::unpublishing::UnpublishingWithEdition;
use serde_json::json;

use super::{
    edition, ContentItem, PresentedItem, Publishable, Redirect, Route, PUBLISHING_APP,
    RENDERING_APP,
};

pub const UNPUBLISHING_FORMAT: &str = "unpublishing";

pub const REDIRECT_FORMAT: &str = "redirect";

impl Publishable for UnpublishingWithEdition {
    fn content_kind(&self) -> &'static str {
        "Unpublishing"
    }

    fn record_id(&self) -> DbId {
        self.unpublishing.id
    }

    fn base_path(&self) -> String {
        edition::base_path(&self.edition)
    }

    fn available_locales(&self) -> Vec<Locale> {
        self.edition.available_locales()
    }

    /// Visible whenever the unpublishing itself is valid, whatever state the
    /// withdrawn edition is in.
    fn is_publicly_visible(&self) -> bool {
        self.unpublishing.is_valid()
    }

    fn present(&self, locale: &Locale, update_type: UpdateType) -> PresentedItem {
        let base_path = edition::base_path(&self.edition);
        let unpublishing = &self.unpublishing;

        let payload = match (unpublishing.redirect, unpublishing.alternative_url.as_deref()) {
            (true, Some(destination)) => ContentItem {
                content_id: None,
                base_path: base_path.clone(),
                title: None,
                description: None,
                format: REDIRECT_FORMAT.to_string(),
                locale: locale.clone(),
                public_updated_at: Some(unpublishing.updated_at),
                update_type,
                publishing_app: PUBLISHING_APP,
                rendering_app: None,
                routes: Vec::new(),
                redirects: vec![Redirect::exact(base_path.clone(), destination)],
                details: json!({}),
            },
            _ => {
                let translation = self.edition.translation(locale);
                ContentItem {
                    content_id: Some(self.edition.edition.content_id),
                    base_path: base_path.clone(),
                    title: translation.map(|t| t.title.clone()),
                    description: translation.and_then(|t| t.summary.clone()),
                    format: UNPUBLISHING_FORMAT.to_string(),
                    locale: locale.clone(),
                    public_updated_at: Some(unpublishing.updated_at),
                    update_type,
                    publishing_app: PUBLISHING_APP,
                    rendering_app: Some(RENDERING_APP),
                    routes: vec![Route::exact(base_path.clone())],
                    redirects: Vec::new(),
                    details: json!({
                        "explanation": unpublishing.explanation,
                        "unpublished_at": unpublishing.created_at,
                        "alternative_url": unpublishing.alternative_url,
                        "reason": unpublishing.reason().map(|r| r.label()),
                    }),
                }
            }
        };

        PresentedItem { base_path, payload }
    }
}
