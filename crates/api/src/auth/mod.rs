//! Authentication primitives.
//!
//! - [`jwt`] -- Access-token verification and minting.

pub mod jwt;
