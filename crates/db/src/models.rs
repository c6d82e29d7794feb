//! Rows of the `bags` and `clubs` tables, column for column.
//!
//! Ids are SQLite rowids.  The `bags` crate turns these into the `Bag`
//! aggregate; nothing here knows about capacity rules or club ordering.

use sqlx::FromRow;

// ---------------------------------------------------------------------------
// bags
// ---------------------------------------------------------------------------

/// A persisted golf bag row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BagRow {
    pub id: i64,
    pub player: String,
    /// Number of clubs the bag is rated to hold.  Stored, never enforced.
    pub capacity: u32,
}

// ---------------------------------------------------------------------------
// clubs
// ---------------------------------------------------------------------------

/// A persisted club row.  Always owned by exactly one bag.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClubRow {
    pub id: i64,
    pub bag_id: i64,
    pub name: String,
}
