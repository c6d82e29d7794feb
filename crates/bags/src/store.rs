//! The aggregate store.
//!
//! [`BagStore`] is the contract handlers depend on; [`SqlBagStore`] fulfils it
//! with the `db` crate's repository functions.
//!
//! Guarantees:
//! 1. A successful insert is visible to the next `get_bag` / `list_bags`.
//! 2. `delete_bag` removes the bag and its clubs in one statement.
//! 3. `append_club` never creates a club for a missing bag.

use async_trait::async_trait;
use tracing::{info, instrument};

use db::DbPool;
use db::repository::{bags as bag_repo, clubs as club_repo};

use crate::{Bag, BagError, NewBag, NewClub};

/// CRUD access to bags and their clubs.
#[async_trait]
pub trait BagStore: Send + Sync {
    /// All bags ordered by id.  Clubs are not loaded.
    async fn list_bags(&self) -> Result<Vec<Bag>, BagError>;

    /// One bag with its clubs loaded.
    async fn get_bag(&self, id: i64) -> Result<Bag, BagError>;

    /// Persist a new bag and return it with its generated id.
    async fn insert_bag(&self, bag: NewBag) -> Result<Bag, BagError>;

    /// Remove a bag together with its clubs.
    async fn delete_bag(&self, id: i64) -> Result<(), BagError>;

    /// Add a club to a bag and return the updated bag with clubs loaded.
    async fn append_club(&self, bag_id: i64, club: NewClub) -> Result<Bag, BagError>;
}

// ---------------------------------------------------------------------------
// SqlBagStore
// ---------------------------------------------------------------------------

/// [`BagStore`] backed by the shared SQLite pool.
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct SqlBagStore {
    pool: DbPool,
}

impl SqlBagStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BagStore for SqlBagStore {
    async fn list_bags(&self) -> Result<Vec<Bag>, BagError> {
        let rows = bag_repo::list_bags(&self.pool).await?;
        Ok(rows.into_iter().map(Bag::from).collect())
    }

    async fn get_bag(&self, id: i64) -> Result<Bag, BagError> {
        let row = bag_repo::get_bag(&self.pool, id)
            .await
            .map_err(|e| BagError::for_bag(id, e))?;
        let clubs = club_repo::list_clubs_for_bag(&self.pool, id).await?;
        Ok(Bag::from_rows(row, clubs))
    }

    #[instrument(skip(self))]
    async fn insert_bag(&self, bag: NewBag) -> Result<Bag, BagError> {
        let row = bag_repo::insert_bag(&self.pool, &bag.player, bag.capacity).await?;
        info!(bag_id = row.id, "bag created");
        Ok(Bag::from(row))
    }

    #[instrument(skip(self))]
    async fn delete_bag(&self, id: i64) -> Result<(), BagError> {
        bag_repo::delete_bag(&self.pool, id)
            .await
            .map_err(|e| BagError::for_bag(id, e))?;
        info!(bag_id = id, "bag deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn append_club(&self, bag_id: i64, club: NewClub) -> Result<Bag, BagError> {
        let row = club_repo::insert_club(&self.pool, bag_id, &club.name)
            .await
            .map_err(|e| BagError::for_bag(bag_id, e))?;
        info!(bag_id, club_id = row.id, "club added");
        self.get_bag(bag_id).await
    }
}
