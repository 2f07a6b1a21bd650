//! Publishing API integration.
//!
//! Presents content records (editions, organisations, unpublishings,
//! statistics announcements) as Publishing API content items and pushes
//! them, one PUT per available locale, through [`client::PublishingApiClient`].

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod presenters;

pub use dispatcher::{PublishOutcome, PublishingApi};
pub use error::{PublishingApiError, PublishingError};
pub use presenters::{ContentItem, Publishable, PresentedItem};
