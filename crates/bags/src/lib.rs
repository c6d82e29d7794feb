//! `bags` crate — golf bag domain models, boundary commands, and the
//! aggregate store.

pub mod models;
pub mod error;
pub mod commands;
pub mod store;

pub use models::{Bag, Club};
pub use error::BagError;
pub use commands::{NewBag, NewClub};
pub use store::{BagStore, SqlBagStore};
