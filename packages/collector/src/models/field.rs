//! Two-state update fields for merge-style upserts.
//!
//! An update patch has to distinguish "leave this column alone" from
//! "write this value", and for nullable columns additionally from "clear
//! this column". `Field<T>` encodes the first distinction in the type
//! system; nullable columns use `Field<Option<T>>` so that clearing is
//! `Set(None)` and cannot be confused with an omitted field.
//!
//! # Example
//!
//! ```rust
//! use collector_core::models::Field;
//!
//! let mut stored = Some("old note".to_string());
//!
//! Field::Unset.apply_to(&mut stored);
//! assert_eq!(stored.as_deref(), Some("old note"));
//!
//! Field::Set(None).apply_to(&mut stored);
//! assert_eq!(stored, None);
//! ```

/// A single field of an update patch: either absent or carrying a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The patch does not touch this field.
    Unset,
    /// The patch writes this value, replacing whatever is stored.
    Set(T),
}

impl<T> Field<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// The carried value, or `default` when unset.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Field::Set(value) => value,
            Field::Unset => default,
        }
    }

    /// Overwrite `slot` when set, leave it untouched when unset.
    pub fn apply_to(self, slot: &mut T) {
        if let Field::Set(value) = self {
            *slot = value;
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_leaves_slot_untouched() {
        let mut slot = 42;
        Field::Unset.apply_to(&mut slot);
        assert_eq!(slot, 42);
    }

    #[test]
    fn set_overwrites_slot() {
        let mut slot = 42;
        Field::Set(7).apply_to(&mut slot);
        assert_eq!(slot, 7);
    }

    #[test]
    fn set_none_clears_nullable_slot() {
        let mut slot = Some("keep me".to_string());
        Field::Set(None).apply_to(&mut slot);
        assert_eq!(slot, None);
    }

    #[test]
    fn unwrap_or_falls_back_when_unset() {
        assert_eq!(Field::<i32>::Unset.unwrap_or(0), 0);
        assert_eq!(Field::Set(5).unwrap_or(0), 5);
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(Field::<bool>::default(), Field::Unset);
        assert!(!Field::<bool>::default().is_set());
    }
}
