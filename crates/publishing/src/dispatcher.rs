//! Publish / republish dispatch.
//!
//! For each locale a record has content in, the record is presented in that
//! locale and sent to the Publishing API. Locales are sent one at a time, in
//! order; the first failure stops the run and is returned unchanged.

use herald_core::locale::Locale;
use herald_core::update_type::UpdateType;
use serde::Serialize;

use crate::client::PublishingApiClient;
use crate::error::PublishingError;
use crate::presenters::Publishable;

/// Summary of a completed publish or republish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishOutcome {
    pub content_kind: &'static str,
    pub base_path: String,
    pub update_type: UpdateType,
    /// Locales sent, in the order they were sent.
    pub locales: Vec<Locale>,
}

/// Pushes [`Publishable`] records to the Publishing API.
#[derive(Debug, Clone)]
pub struct PublishingApi {
    client: PublishingApiClient,
}

impl PublishingApi {
    pub fn new(client: PublishingApiClient) -> Self {
        Self { client }
    }

    /// Base URL content is sent to.
    pub fn endpoint(&self) -> &str {
        self.client.api_url()
    }

    /// Send every locale of `item` with the default update type.
    ///
    /// No visibility check is made, so this also serves first-time publishes
    /// and unpublishing events.
    pub async fn publish<P>(&self, item: &P) -> Result<PublishOutcome, PublishingError>
    where
        P: Publishable + ?Sized,
    {
        self.send_all_locales(item, UpdateType::default()).await
    }

    /// Re-send every locale of `item` with update type `republish`.
    ///
    /// Fails with [`PublishingError::UnpublishableInstance`] before sending
    /// anything if the record is not publicly visible.
    pub async fn republish<P>(&self, item: &P) -> Result<PublishOutcome, PublishingError>
    where
        P: Publishable + ?Sized,
    {
        if !item.is_publicly_visible() {
            tracing::warn!(
                kind = item.content_kind(),
                id = item.record_id(),
                "Refusing to republish record that is not publicly visible"
            );
            return Err(PublishingError::UnpublishableInstance {
                kind: item.content_kind(),
                id: item.record_id(),
            });
        }
        self.send_all_locales(item, UpdateType::Republish).await
    }

    async fn send_all_locales<P>(
        &self,
        item: &P,
        update_type: UpdateType,
    ) -> Result<PublishOutcome, PublishingError>
    where
        P: Publishable + ?Sized,
    {
        let locales = item.available_locales();
        let mut sent = Vec::with_capacity(locales.len());

        for locale in locales {
            let presented = item.present(&locale, update_type);
            tracing::debug!(
                kind = item.content_kind(),
                id = item.record_id(),
                base_path = %presented.base_path,
                %locale,
                %update_type,
                "Sending content item to Publishing API"
            );

            if let Err(e) = self
                .client
                .put_content_item(&presented.base_path, &presented.payload)
                .await
            {
                tracing::error!(
                    kind = item.content_kind(),
                    id = item.record_id(),
                    base_path = %presented.base_path,
                    %locale,
                    error = %e,
                    "Publishing API request failed"
                );
                return Err(e.into());
            }
            sent.push(locale);
        }

        let outcome = PublishOutcome {
            content_kind: item.content_kind(),
            base_path: item.base_path(),
            update_type,
            locales: sent,
        };
        tracing::info!(
            kind = outcome.content_kind,
            id = item.record_id(),
            base_path = %outcome.base_path,
            %update_type,
            locale_count = outcome.locales.len(),
            "Published content item"
        );
        Ok(outcome)
    }
}
