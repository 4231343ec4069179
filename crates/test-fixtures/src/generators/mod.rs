//! Entity generators for test fixtures.
//!
//! This module provides generators for the fixture domain:
//! - [`UserGenerator`]: Generate users in server or client shape
//! - [`ReferenceGenerator`]: Create endorsement edges between users
//! - [`TribeGenerator`]: Create tribes with unique labels

pub mod reference;
pub mod tribe;
pub mod user;

pub use reference::{
    InteractionOverrides, Interactions, Recommend, Reference, ReferenceGenerator,
    ReferenceOverrides, ReferenceSpec,
};
pub use tribe::{Tribe, TribeGenConfig, TribeGenerator};
pub use user::{
    ClientUser, ClientUserOverrides, GeneratedUser, ServerUser, ServerUserOverrides,
    UserGenConfig, UserGenerator, UserVariant,
};
