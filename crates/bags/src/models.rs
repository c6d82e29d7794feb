//! Core domain models.
//!
//! A [`Bag`] is the aggregate root; its [`Club`]s cannot exist without it.
//! These are built from the `db` crate's row structs and never written back
//! directly — mutations go through [`crate::BagStore`].

use db::models::{BagRow, ClubRow};

// ---------------------------------------------------------------------------
// Club
// ---------------------------------------------------------------------------

/// One item inside a bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: i64,
    /// Id of the owning bag.
    pub bag_id: i64,
    /// Free-text label, e.g. "five iron".
    pub name: String,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Self {
            id: row.id,
            bag_id: row.bag_id,
            name: row.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Bag
// ---------------------------------------------------------------------------

/// One player's equipment container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    pub id: i64,
    pub player: String,
    /// Number of clubs the bag is rated to hold.
    pub capacity: u32,
    /// Clubs in the order they were added.  Empty when the bag was loaded
    /// without its clubs (see [`crate::BagStore::list_bags`]).
    pub clubs: Vec<Club>,
}

impl Bag {
    /// Assemble a bag from its row and the rows of its clubs.
    pub fn from_rows(bag: BagRow, clubs: Vec<ClubRow>) -> Self {
        Self {
            clubs: clubs.into_iter().map(Club::from).collect(),
            ..Self::from(bag)
        }
    }

    /// Whether the bag holds more clubs than it is rated for.
    ///
    /// Capacity is a soft limit: this is surfaced to the user but never
    /// blocks adding a club.
    pub fn is_over_capacity(&self) -> bool {
        self.clubs.len() > self.capacity as usize
    }
}

impl From<BagRow> for Bag {
    fn from(row: BagRow) -> Self {
        Self {
            id: row.id,
            player: row.player,
            capacity: row.capacity,
            clubs: Vec::new(),
        }
    }
}
