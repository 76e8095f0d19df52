//! Domain models for Mission Board.
//!
//! One entity survives aggregation: [`MissionRecord`], the flattened join of
//! a mission's static fields with its first launch's rocket name. The
//! aggregated batch is immutable for the lifetime of a session; everything
//! shown to the user is a derived view over it.

mod mission;

pub use mission::*;
