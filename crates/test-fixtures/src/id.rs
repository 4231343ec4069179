//! Surrogate identifier generation.
//!
//! Fixtures are keyed by 24-character hex identifiers so they can stand in
//! for database primary keys without a round trip to the database.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;

/// A 24-character lowercase-hex identifier.
///
/// The leading 8 hex digits encode the creation time in whole seconds and the
/// remaining 16 are random, which keeps ids roughly sortable by creation
/// order and collision-resistant within a test run. No uniqueness is enforced
/// beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generates a fresh identifier from the given random source.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let seconds = OffsetDateTime::now_utc().unix_timestamp() as u32;
        let payload: u64 = rng.r#gen();
        Self(format!("{seconds:08x}{payload:016x}"))
    }

    /// Returns the hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a fresh identifier string using the thread-local random source.
pub fn generate_id() -> String {
    ObjectId::generate(&mut rand::thread_rng()).0
}
