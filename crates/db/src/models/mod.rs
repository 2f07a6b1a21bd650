//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates
//! - Aggregates that bundle a row with its translations where the
//!   publishing layer needs them

pub mod edition;
pub mod organisation;
pub mod statistics_announcement;
pub mod topic;
pub mod translation;
pub mod unpublishing;
pub mod user;

/// Deserialize a nullable field so an explicit `null` becomes `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}
