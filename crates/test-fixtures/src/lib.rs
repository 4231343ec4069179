//! Test fixture generation for homestay.
//!
//! This crate produces synthetic users, tribes, and references between users
//! for seeding test databases and writing assertions. Everything is generated
//! in memory; nothing here talks to a database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_fixtures::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//!
//! let tribes = TribeGenerator::new().generate_batch(3, &mut rng);
//! let users = UserGenerator::new()
//!     .generate_batch(5, &UserVariant::Client, &tribes, &mut rng);
//! let references = ReferenceGenerator::new()
//!     .generate(&users, &[ReferenceSpec::between(0, 1)], &mut rng)?;
//! ```
//!
//! Every generator takes the random source as a parameter, so tests that need
//! reproducible fixtures can pass a seeded [`rand::rngs::StdRng`].

pub mod error;
pub mod generators;
pub mod id;
pub mod merge;
pub mod sampling;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::error::FixtureError;
    pub use crate::generators::{
        ClientUser, ClientUserOverrides, GeneratedUser, InteractionOverrides, Interactions,
        Recommend, Reference, ReferenceGenerator, ReferenceOverrides, ReferenceSpec, ServerUser,
        ServerUserOverrides, Tribe, TribeGenConfig, TribeGenerator, UserGenConfig, UserGenerator,
        UserVariant,
    };
    pub use crate::id::{ObjectId, generate_id};
    pub use crate::merge::Overlay;
    pub use crate::sampling::select_random;
}
