//! The aggregation core: joins, rollups, and filters over caller-supplied
//! entity snapshots.
//!
//! Every function here is pure and synchronous. Callers pass the current
//! collections on each query; nothing is memoized, nothing is mutated in
//! place, and degenerate input (empty collections, dangling references,
//! zero denominators) yields defined zero/empty results instead of errors.

pub mod aggregate;
pub mod calendar;
pub mod filter;
pub mod lookup;
mod seed;
pub mod store;

pub use store::{EntityStore, StoreError};
