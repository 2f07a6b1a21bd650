//! Domain types and rules shared by the database, publishing, and API crates.

pub mod edition;
pub mod error;
pub mod locale;
pub mod roles;
pub mod slug;
pub mod statistics_announcement;
pub mod types;
pub mod unpublishing;
pub mod update_type;
