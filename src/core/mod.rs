//! Core domain types

pub mod pairing;
pub mod plan;

pub use pairing::{find_orphans, stem_set, MatchMode, Pairing, StemKey};
pub use plan::{Plan, PlanEntry};
