//! Slug assignment strategies.
//!
//! Two interchangeable strategies implement [`SlugAssigner`]:
//!
//! - [`HashSlugAssigner`] derives the slug from the URL itself (first 6 hex
//!   characters of its SHA-256 digest), so the same URL always maps to the
//!   same slug. Distinct URLs can collide in the 16^6 space; the shortener
//!   surfaces that as a conflict.
//! - [`RandomSlugAssigner`] draws 6 characters uniformly from the 62-symbol
//!   alphanumeric alphabet using an injected random source.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use std::sync::{Mutex, PoisonError};

/// Length of every slug handed out by the service.
pub const SLUG_LEN: usize = 6;

/// Slugs that collide with fixed routes and are never assigned.
pub const RESERVED_SLUGS: &[&str] = &["health"];

/// Derives a short slug for a URL.
///
/// Assignment cannot fail; persistence of the result can.
#[cfg_attr(test, mockall::automock)]
pub trait SlugAssigner: Send + Sync {
    /// Produces a slug candidate for `url`.
    fn assign(&self, url: &str) -> String;

    /// Returns `true` when the same URL always yields the same slug.
    ///
    /// Deterministic assigners enable idempotent shortening through the
    /// store's reverse lookup.
    fn is_deterministic(&self) -> bool;
}

/// Content-addressed slugs: SHA-256 of the URL, hex-encoded, truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashSlugAssigner;

impl HashSlugAssigner {
    pub fn new() -> Self {
        Self
    }
}

impl SlugAssigner for HashSlugAssigner {
    fn assign(&self, url: &str) -> String {
        let digest = Sha256::digest(url.as_bytes());
        hex::encode(&digest[..SLUG_LEN / 2])
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

/// Random alphanumeric slugs drawn from an injected generator.
///
/// The generator is owned by the assigner, so tests can pass a seeded
/// [`StdRng`] and get a reproducible sequence.
#[derive(Debug)]
pub struct RandomSlugAssigner<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: RngCore> RandomSlugAssigner<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RandomSlugAssigner<StdRng> {
    /// Seeds the generator from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeds the generator with a fixed value.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> SlugAssigner for RandomSlugAssigner<R> {
    fn assign(&self, _url: &str) -> String {
        // A panicking holder cannot leave the generator in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..SLUG_LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

/// Returns `true` if `candidate` has the shape of an assignable slug.
pub fn is_well_formed_slug(candidate: &str) -> bool {
    candidate.len() == SLUG_LEN && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns `true` if `slug` is reserved for a fixed route.
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}
