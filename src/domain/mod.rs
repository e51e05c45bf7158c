//! Domain layer: the URL mapping entity, slug assignment, and the store contract.
//!
//! Nothing in here knows about HTTP or PostgreSQL. Concrete stores live in
//! [`crate::infrastructure::persistence`] and the orchestration lives in
//! [`crate::application::services`].
//!
//! # Modules
//!
//! - [`entities`] - The [`entities::UrlMapping`] record
//! - [`repositories`] - The [`repositories::UrlStore`] capability trait
//! - [`slug`] - Deterministic and random [`slug::SlugAssigner`] strategies

pub mod entities;
pub mod repositories;
pub mod slug;
