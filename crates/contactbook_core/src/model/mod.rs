//! Domain model for hackathon contacts and events.
//!
//! # Responsibility
//! - Define validated value objects, persons, events and their unique lists.
//! - Hold mutable application state behind `Model`.
//!
//! # Invariants
//! - Domain records are immutable; edits produce new records.
//! - Books never contain two records with the same identity.

pub mod book;
pub mod event;
pub mod fields;
pub mod filter;
pub mod manager;
pub mod person;
pub mod sample;
