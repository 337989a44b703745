//! Person domain model.
//!
//! # Responsibility
//! - Define the immutable contact record kept in the address book.
//! - Enforce category-specific group rules.
//!
//! # Invariants
//! - `group` is `Some` only when `category.is_groupable()`.
//! - Identity (duplicate detection) is name + phone.

use crate::model::fields::{Category, Comment, Email, Group, Name, Phone};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returned by [`Person::group_number`] for persons without a group.
pub const INVALID_GROUP_NUMBER: i64 = -1;

/// Rejected person mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    /// Staff and sponsors cannot be assigned to a group.
    NotGroupable(Category),
}

impl Display for PersonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotGroupable(category) => write!(
                f,
                "Only participants can be grouped; this person is {category}"
            ),
        }
    }
}

impl Error for PersonError {}

/// Contact record for a participant, staff member or sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    category: Category,
    comment: Comment,
    group: Option<Group>,
}

impl Person {
    /// Creates a person with no comment and no group.
    pub fn new(name: Name, phone: Phone, email: Email, category: Category) -> Self {
        Self {
            name,
            phone,
            email,
            category,
            comment: Comment::default(),
            group: None,
        }
    }

    /// Builds a person from every field, applying the group rule.
    ///
    /// A group given for a non-groupable category is dropped rather than
    /// rejected; this is what category changes through `edit` rely on.
    pub fn from_parts(
        name: Name,
        phone: Phone,
        email: Email,
        category: Category,
        comment: Comment,
        group: Option<Group>,
    ) -> Self {
        let group = group.filter(|_| category.is_groupable());
        Self {
            name,
            phone,
            email,
            category,
            comment,
            group,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn group(&self) -> Option<Group> {
        self.group
    }

    /// Group number, or [`INVALID_GROUP_NUMBER`] when ungrouped.
    pub fn group_number(&self) -> i64 {
        self.group
            .map(|group| i64::from(group.number()))
            .unwrap_or(INVALID_GROUP_NUMBER)
    }

    /// Returns a copy with the comment replaced.
    pub fn with_comment(&self, comment: Comment) -> Self {
        Self {
            comment,
            ..self.clone()
        }
    }

    /// Returns a copy assigned to `group` (or ungrouped for `None`).
    ///
    /// # Errors
    /// - `PersonError::NotGroupable` when assigning a group to staff or sponsors.
    pub fn with_group(&self, group: Option<Group>) -> Result<Self, PersonError> {
        if group.is_some() && !self.category.is_groupable() {
            return Err(PersonError::NotGroupable(self.category));
        }
        Ok(Self {
            group,
            ..self.clone()
        })
    }

    /// Weak equality used for duplicate detection: same name and phone.
    pub fn is_same_identity(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone
    }

    /// Identity equality that also requires the same category.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.category == other.category && self.is_same_identity(other)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Category: {}",
            self.name, self.phone, self.email, self.category
        )?;
        if !self.comment.is_empty() {
            write!(f, "; Comment: {}", self.comment)?;
        }
        if let Some(group) = self.group {
            write!(f, "; Group: {group}")?;
        }
        Ok(())
    }
}
