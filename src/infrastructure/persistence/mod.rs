//! Store implementations.
//!
//! # Stores
//!
//! - [`PgUrlStore`] - PostgreSQL, the production backend
//! - [`MemoryUrlStore`] - in-memory map, the test double
//!
//! [`connect_with_retry`] builds the PostgreSQL pool at startup.

pub mod connect;
pub mod memory_url_store;
pub mod pg_url_store;

pub use connect::connect_with_retry;
pub use memory_url_store::MemoryUrlStore;
pub use pg_url_store::PgUrlStore;
