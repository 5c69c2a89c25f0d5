//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string was shorter than the required number of characters.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Email validation failed.
    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),
    /// Slug contained characters outside `[a-z0-9-]` or misplaced hyphens.
    #[error("slug must contain only lowercase letters, digits and single hyphens")]
    InvalidSlug,
    /// Category is not part of the fixed enumeration.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Contact number contained characters other than digits and separators.
    #[error("contact number can only contain digits, spaces, hyphens and parentheses")]
    InvalidContactCharacters,
    /// Contact number digit count outside the accepted range.
    #[error("contact number must have {min}-{max} digits")]
    InvalidContactLength { min: usize, max: usize },
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

fn trim_and_require_min_chars<S: Into<String>>(
    value: S,
    field: &'static str,
    min: usize,
) -> Result<String, TypeConstraintError> {
    let trimmed = trim_and_require_non_empty(value, field)?;
    if trimmed.chars().count() < min {
        Err(TypeConstraintError::TooShort { field, min })
    } else {
        Ok(trimmed)
    }
}

/// Shared accessor and conversion impls for string-backed newtypes.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! min_chars_string_newtype {
    ($name:ident, $doc:expr, $field:expr, $min:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Minimum number of characters after trimming.
            pub const MIN_CHARS: usize = $min;

            /// Constructs a trimmed value with at least [`Self::MIN_CHARS`] characters.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_min_chars(value, $field, $min).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Serialize,
            Deserialize,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(
    CelebrityId,
    "Unique identifier for a celebrity.",
    "celebrity_id"
);
id_newtype!(EnquiryId, "Unique identifier for an enquiry.", "enquiry_id");

non_empty_string_newtype!(
    CelebrityName,
    "Celebrity display name enforcing non-empty values.",
    "celebrity name"
);
non_empty_string_newtype!(
    ImageRef,
    "Reference to a profile image (asset path or URL).",
    "image"
);
non_empty_string_newtype!(Biography, "Profile biography text.", "bio");
non_empty_string_newtype!(Gender, "Gender tag used for filtering.", "gender");
non_empty_string_newtype!(Language, "Spoken language tag.", "language");
non_empty_string_newtype!(Location, "Home city or region tag.", "location");
non_empty_string_newtype!(EventType, "Supported event type tag.", "event type");

min_chars_string_newtype!(
    SubmitterName,
    "Name of the visitor submitting an enquiry.",
    "name",
    2
);
min_chars_string_newtype!(
    EnquiryPurpose,
    "Free-text description of the event being enquired about.",
    "purpose",
    10
);

url_string_newtype!(SocialLink, "Social profile URL.", "social link");

non_negative_i32_newtype!(ViewCount, "Number of profile page views.", "views");
non_negative_i32_newtype!(LikeCount, "Aggregate number of likes.", "likes");

/// URL-safe unique handle of a celebrity, e.g. `priya-sharma`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validates lowercase ASCII letters, digits and single inner hyphens.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "slug")?;
        let valid_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars
            || trimmed.starts_with('-')
            || trimmed.ends_with('-')
            || trimmed.contains("--")
        {
            return Err(TypeConstraintError::InvalidSlug);
        }
        Ok(Self(trimmed))
    }

    /// Derives a slug from a display name: `"Dr. Arun Sharma"` becomes `dr-arun-sharma`.
    pub fn from_name(name: &str) -> Result<Self, TypeConstraintError> {
        let mut slug = String::with_capacity(name.len());
        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        Self::new(slug)
    }
}

string_newtype_impls!(Slug);

/// Email address validated against the standard address grammar.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "email")?;
        if !trimmed.as_str().validate_email() {
            return Err(TypeConstraintError::InvalidEmail("email"));
        }
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(EmailAddress);

/// Phone number as typed by the submitter.
///
/// Only digits, spaces, hyphens, dots and parentheses are accepted, with an
/// optional single leading `+`. Once reduced to digits the number must have
/// between [`ContactNumber::MIN_DIGITS`] and [`ContactNumber::MAX_DIGITS`]
/// digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub const MIN_DIGITS: usize = 10;
    pub const MAX_DIGITS: usize = 15;

    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "contact")?;
        let body = trimmed.strip_prefix('+').unwrap_or(&trimmed);
        let allowed = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'));
        if !allowed {
            return Err(TypeConstraintError::InvalidContactCharacters);
        }
        let digits = body.chars().filter(char::is_ascii_digit).count();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits) {
            return Err(TypeConstraintError::InvalidContactLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }
        Ok(Self(trimmed))
    }

    /// The number reduced to its digits, e.g. `919876543210`.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

string_newtype_impls!(ContactNumber);

/// Fixed talent categories, in default display order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Singers,
    Actors,
    Actresses,
    Comedians,
    Influencers,
    Choreographers,
    Chefs,
    #[serde(rename = "Motivational Speakers")]
    MotivationalSpeakers,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 8] = [
        Self::Singers,
        Self::Actors,
        Self::Actresses,
        Self::Comedians,
        Self::Influencers,
        Self::Choreographers,
        Self::Chefs,
        Self::MotivationalSpeakers,
    ];

    /// Display name, also used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singers => "Singers",
            Self::Actors => "Actors",
            Self::Actresses => "Actresses",
            Self::Comedians => "Comedians",
            Self::Influencers => "Influencers",
            Self::Choreographers => "Choreographers",
            Self::Chefs => "Chefs",
            Self::MotivationalSpeakers => "Motivational Speakers",
        }
    }

    /// Path segment for the category page, e.g. `motivational-speakers`.
    pub fn slug(self) -> String {
        self.as_str()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Resolves a category from its path segment.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| TypeConstraintError::UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}
