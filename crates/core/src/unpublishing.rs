//! Unpublishing reasons and validity rules.

use crate::error::FieldErrors;

/// Why a previously published edition was taken down.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpublishingReason {
    PublishedInError = 1,
    Consolidated = 4,
    Archived = 5,
}

impl UnpublishingReason {
    /// Look up a reason by its stored id.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(UnpublishingReason::PublishedInError),
            4 => Some(UnpublishingReason::Consolidated),
            5 => Some(UnpublishingReason::Archived),
            _ => None,
        }
    }

    pub fn id(self) -> i16 {
        self as i16
    }

    /// Short label shown on the public "gone" page.
    pub fn label(self) -> &'static str {
        match self {
            UnpublishingReason::PublishedInError => "Published in error",
            UnpublishingReason::Consolidated => "Consolidated into another GOV.UK page",
            UnpublishingReason::Archived => "No longer current government policy/activity",
        }
    }
}

/// Validate an unpublishing record.
///
/// A consolidated or redirecting unpublishing must point somewhere.
pub fn validate(
    reason_id: i16,
    redirect: bool,
    alternative_url: Option<&str>,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let reason = UnpublishingReason::from_id(reason_id);
    if reason.is_none() {
        errors.add("unpublishing_reason_id", "is not a known reason");
    }

    let has_url = alternative_url.is_some_and(|url| !url.trim().is_empty());
    let needs_url = redirect || reason == Some(UnpublishingReason::Consolidated);
    if needs_url && !has_url {
        errors.add("alternative_url", "must be provided to redirect the page");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
