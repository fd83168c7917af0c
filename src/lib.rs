//! Core services for a store directory: user accounts with password
//! recovery, stores with unique slugs and geolocation, reviews, hearts,
//! and the tag/search/top-rated queries behind the public pages.
//!
//! The crate is the application core only. Routing, rendering, uploads and
//! session middleware belong to the embedding web layer; this crate exposes
//! command and query services wired over repository and port traits.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
