//! Reference generation (directed endorsement edges between users).

use rand::Rng;
use serde::Serialize;

use crate::error::FixtureError;
use crate::generators::user::GeneratedUser;
use crate::id::ObjectId;
use crate::merge::{Overlay, overwrite};

/// How the two users interacted, three independent flags.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Interactions {
    pub met: bool,
    pub hosted_me: bool,
    pub hosted_them: bool,
}

/// Whether the referencing user recommends the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommend {
    Yes,
    No,
    Unknown,
}

/// A directed reference from one user to another.
#[derive(Debug, Clone, Serialize)]
pub struct Reference {
    pub user_from: ObjectId,
    pub user_to: ObjectId,
    pub public: bool,
    pub interactions: Interactions,
    pub recommend: Recommend,
}

/// Overrides for a generated reference. `None` keeps the generated default,
/// at every nesting level.
#[derive(Debug, Clone, Default)]
pub struct ReferenceOverrides {
    pub public: Option<bool>,
    pub interactions: InteractionOverrides,
    pub recommend: Option<Recommend>,
}

/// Overrides for the nested interactions record.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionOverrides {
    pub met: Option<bool>,
    pub hosted_me: Option<bool>,
    pub hosted_them: Option<bool>,
}

impl Overlay for ReferenceOverrides {
    type Target = Reference;

    fn overlay(self, target: &mut Reference) {
        overwrite(&mut target.public, self.public);
        overwrite(&mut target.interactions.met, self.interactions.met);
        overwrite(&mut target.interactions.hosted_me, self.interactions.hosted_me);
        overwrite(&mut target.interactions.hosted_them, self.interactions.hosted_them);
        overwrite(&mut target.recommend, self.recommend);
    }
}

/// One reference to build: indices into the user sequence plus overrides.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSpec {
    pub from: usize,
    pub to: usize,
    pub overrides: ReferenceOverrides,
}

impl ReferenceSpec {
    /// A reference between the given user indices with generated defaults.
    pub fn between(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            overrides: ReferenceOverrides::default(),
        }
    }
}

/// Generates references between previously generated users.
pub struct ReferenceGenerator;

impl ReferenceGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates one reference per spec.
    ///
    /// `user_from`/`user_to` are the ids of the users at the spec's indices.
    /// Out-of-range indices and server users (which carry no id) are
    /// rejected.
    pub fn generate(
        &self,
        users: &[GeneratedUser],
        specs: &[ReferenceSpec],
        rng: &mut impl Rng,
    ) -> Result<Vec<Reference>, FixtureError> {
        specs
            .iter()
            .enumerate()
            .map(|(spec_idx, spec)| {
                let user_from = Self::id_at(users, spec.from, spec_idx)?;
                let user_to = Self::id_at(users, spec.to, spec_idx)?;

                let mut reference = Reference {
                    user_from,
                    user_to,
                    public: true,
                    interactions: Interactions {
                        met: rng.r#gen(),
                        hosted_me: rng.r#gen(),
                        hosted_them: rng.r#gen(),
                    },
                    recommend: Self::pick_recommend(rng),
                };
                spec.overrides.clone().overlay(&mut reference);
                Ok(reference)
            })
            .collect()
    }

    fn id_at(
        users: &[GeneratedUser],
        index: usize,
        spec: usize,
    ) -> Result<ObjectId, FixtureError> {
        let user = users.get(index).ok_or(FixtureError::IndexOutOfRange {
            spec,
            index,
            len: users.len(),
        })?;
        user.id()
            .cloned()
            .ok_or(FixtureError::MissingId { index })
    }

    fn pick_recommend(rng: &mut impl Rng) -> Recommend {
        match rng.gen_range(0..3) {
            0 => Recommend::Yes,
            1 => Recommend::No,
            _ => Recommend::Unknown,
        }
    }
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
