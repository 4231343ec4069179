//! Override merging.
//!
//! Override bags are partial records layered onto generated defaults. The
//! precedence is fixed: an override value wins at every nesting level, and a
//! `None` keeps the generated default.

/// A partial record that can be layered onto a fully generated target.
pub trait Overlay {
    type Target;

    /// Applies this override bag onto `target`, replacing every field the
    /// bag provides and leaving the rest untouched.
    fn overlay(self, target: &mut Self::Target);
}

/// Replaces `slot` when the override provides a value.
pub fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
