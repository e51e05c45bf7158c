//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::repositories::UrlStore`] contract against
//! PostgreSQL and an in-memory map.
//!
//! # Modules
//!
//! - [`persistence`] - Store implementations and pool setup

pub mod persistence;
