//! Mission Board: fetch spaceflight missions from a GraphQL archive, join
//! each with its first launch's rocket name, and browse the result with local
//! search.
//!
//! The flow has two halves. [`aggregator`] runs once up front: one query for
//! all missions, then one dependent query per mission, assembled into ordered
//! [`models::MissionRecord`]s. [`view`] holds that list for the rest of the
//! session and derives the displayed subset on every search change; [`tui`]
//! renders it. [`api`] exposes the same aggregation pass over HTTP for
//! clients that want the joined list as initial data.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod graphql;
pub mod models;
pub mod tui;
pub mod view;
