//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` (or an open transaction) and returns a
//! `Result<T, DbError>`.  No business logic, no domain types — pure SQL.

pub mod bags;
pub mod clubs;
