//! Boundary commands.
//!
//! HTTP forms arrive as loosely-typed strings.  The `parse` constructors here
//! turn them into typed commands, rejecting missing or malformed fields with a
//! [`BagError`] before anything reaches the store.

use crate::BagError;

/// Input for creating a bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBag {
    pub player: String,
    pub capacity: u32,
}

impl NewBag {
    /// Build a command from raw form values.
    ///
    /// # Errors
    /// - [`BagError::MissingField`] if `player` or `capacity` is absent or blank.
    /// - [`BagError::InvalidField`] if `capacity` is not a non-negative integer.
    pub fn parse(player: Option<&str>, capacity: Option<&str>) -> Result<Self, BagError> {
        let player = required_text("player", player)?;
        let capacity = required_text("capacity", capacity)?;
        let capacity = capacity.parse::<u32>().map_err(|e| BagError::InvalidField {
            field: "capacity",
            reason: format!("expected a non-negative integer ({e})"),
        })?;

        Ok(Self { player, capacity })
    }
}

/// Input for appending a club to a bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClub {
    pub name: String,
}

impl NewClub {
    /// Build a command from the raw `name` form value.
    ///
    /// # Errors
    /// [`BagError::MissingField`] if `name` is absent or blank.
    pub fn parse(name: Option<&str>) -> Result<Self, BagError> {
        Ok(Self {
            name: required_text("name", name)?,
        })
    }
}

/// Trimmed, non-empty text or `MissingField`.
fn required_text(field: &'static str, value: Option<&str>) -> Result<String, BagError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(BagError::MissingField(field)),
    }
}
