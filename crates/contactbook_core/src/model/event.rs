//! Event domain model.
//!
//! # Invariants
//! - Identity is name + category; two events differing only by date are the
//!   same event for duplicate detection.

use crate::model::fields::{EventCategory, EventDate, EventName};
use std::fmt::{Display, Formatter};

/// Hackathon event such as a workshop or a pitch session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    name: EventName,
    category: EventCategory,
    date: EventDate,
}

impl Event {
    pub fn new(name: EventName, category: EventCategory, date: EventDate) -> Self {
        Self {
            name,
            category,
            date,
        }
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn category(&self) -> &EventCategory {
        &self.category
    }

    pub fn date(&self) -> EventDate {
        self.date
    }

    /// Weak equality used for duplicate detection.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name == other.name && self.category == other.category
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Category: {}; Date: {}",
            self.name, self.category, self.date
        )
    }
}
