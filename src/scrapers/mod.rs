//! Site-specific extraction logic.
//!
//! Each submodule owns the class-name contracts of one source page and turns
//! its parsed DOM into [`crate::models::NewsItem`] values. The generic
//! tree-walk primitives they build on live in [`crate::dom`], so a markup
//! change on a source site touches only its scraper module.
//!
//! # Sources
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | Hytale news | [`hytale`] | Blog listing page, one post per `postWrapper` |

pub mod hytale;
