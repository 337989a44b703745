//! Predicates backing the filtered person/event views.

use crate::model::event::Event;
use crate::model::fields::{Category, Group};
use crate::model::person::Person;

/// Filter applied to the displayed person list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any keyword equals a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
    Category(Category),
    Group(Group),
    CategoryAndGroup(Category, Group),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => contains_any_word(person.name().as_str(), keywords),
            Self::Category(category) => person.category() == *category,
            Self::Group(group) => person.group() == Some(*group),
            Self::CategoryAndGroup(category, group) => {
                person.category() == *category && person.group() == Some(*group)
            }
        }
    }
}

/// Filter applied to the displayed event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    NameKeywords(Vec<String>),
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => contains_any_word(event.name().as_str(), keywords),
        }
    }
}

fn contains_any_word(sentence: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| {
        sentence
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::contains_any_word;

    #[test]
    fn keywords_match_whole_words_ignoring_case() {
        let keywords = vec!["alice".to_string(), "zed".to_string()];
        assert!(contains_any_word("Alice Pauline", &keywords));
        assert!(!contains_any_word("Alicia Pauline", &keywords));
        assert!(!contains_any_word("Alice Pauline", &[]));
    }
}
