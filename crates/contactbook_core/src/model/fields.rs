//! Validated value objects shared by persons and events.
//!
//! # Responsibility
//! - Own the validation rules for every user-supplied field.
//! - Expose canonical display text used by storage and feedback messages.
//!
//! # Invariants
//! - A value object can only be obtained through validation.
//! - Raw input is trimmed before validation; the stored text is the trimmed form.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\nThe domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";
pub const CATEGORY_CONSTRAINTS: &str = "Category should be one of PARTICIPANT, STAFF, SPONSOR";
pub const GROUP_CONSTRAINTS: &str = "Group number should be a positive integer";
pub const EVENT_NAME_CONSTRAINTS: &str = "Names of events should only contain alphanumeric \
characters and spaces, and it should not be blank";
pub const EVENT_CATEGORY_CONSTRAINTS: &str = "Event categories should only contain alphanumeric \
characters and spaces, and it should not be blank";
pub const EVENT_DATE_CONSTRAINTS: &str =
    "Event dates should be valid calendar dates in the format YYYY-MM-DD";

const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

static ALNUM_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let alnum = r"[A-Za-z0-9]+";
    let local = format!(r"{alnum}([+_.\-]{alnum})*");
    let label = format!(r"{alnum}(-{alnum})*");
    let pattern = format!(r"^{local}@({label}\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("valid email regex")
});

/// Validation failure for one field; `Display` is the user-facing constraint.
///
/// The rejected input is not carried so errors can be logged freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Name,
    Phone,
    Email,
    Category,
    Group,
    EventName,
    EventCategory,
    EventDate,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Name => NAME_CONSTRAINTS,
            Self::Phone => PHONE_CONSTRAINTS,
            Self::Email => EMAIL_CONSTRAINTS,
            Self::Category => CATEGORY_CONSTRAINTS,
            Self::Group => GROUP_CONSTRAINTS,
            Self::EventName => EVENT_NAME_CONSTRAINTS,
            Self::EventCategory => EVENT_CATEGORY_CONSTRAINTS,
            Self::EventDate => EVENT_DATE_CONSTRAINTS,
        };
        f.write_str(message)
    }
}

impl Error for ValidationError {}

/// Declares a regex-validated string wrapper with `FromStr` and `Display`.
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $regex:expr, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates and wraps raw input.
            pub fn parse(raw: &str) -> Result<Self, ValidationError> {
                if Self::is_valid(raw) {
                    Ok(Self(raw.trim().to_string()))
                } else {
                    Err(ValidationError::$variant)
                }
            }

            /// Returns true if `raw` would be accepted by [`Self::parse`].
            pub fn is_valid(raw: &str) -> bool {
                $regex.is_match(raw.trim())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    /// A person's name: alphanumeric words separated by spaces.
    Name,
    ALNUM_WORDS_RE,
    Name
);
text_field!(
    /// A phone number of at least three digits.
    Phone,
    PHONE_RE,
    Phone
);
text_field!(
    /// An email address in `local-part@domain` form.
    Email,
    EMAIL_RE,
    Email
);
text_field!(
    /// An event's name.
    EventName,
    ALNUM_WORDS_RE,
    EventName
);
text_field!(
    /// Free-form event category label such as `Workshop`.
    EventCategory,
    ALNUM_WORDS_RE,
    EventCategory
);

/// Role of a person at the hackathon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Participant,
    Staff,
    Sponsor,
}

impl Category {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PARTICIPANT" => Ok(Self::Participant),
            "STAFF" => Ok(Self::Staff),
            "SPONSOR" => Ok(Self::Sponsor),
            _ => Err(ValidationError::Category),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Participant => "PARTICIPANT",
            Self::Staff => "STAFF",
            Self::Sponsor => "SPONSOR",
        }
    }

    /// Only participants are organised into groups.
    pub fn is_groupable(self) -> bool {
        matches!(self, Self::Participant)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text remark attached to a person. Empty means no comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Comment(String);

impl Comment {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive group number a participant is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group(u32);

impl Group {
    pub fn new(number: u32) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::Group);
        }
        Ok(Self(number))
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        // Rejects signs and whitespace that `u32::from_str` would otherwise accept.
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Group);
        }
        let number = trimmed
            .parse::<u32>()
            .map_err(|_| ValidationError::Group)?;
        Self::new(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl FromStr for Group {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventDate(NaiveDate);

impl EventDate {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), EVENT_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::EventDate)
    }
}

impl FromStr for EventDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(EVENT_DATE_FORMAT))
    }
}
