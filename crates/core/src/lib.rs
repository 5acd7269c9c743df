//! Domain types and rules shared by the campsite favorites crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod favorites;
pub mod types;
