//! Request extractors for authentication and authorization.
//!
//! - [`auth::AuthUser`] -- Identity from a bearer token.
//! - [`auth::CurrentUser`] -- The token's user row, loaded from the database.
//! - [`auth::RequireAdmin`] -- A user whose role may publish.

pub mod auth;
