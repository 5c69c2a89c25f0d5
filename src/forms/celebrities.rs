use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::celebrity::NewCelebrity;
use crate::domain::filter::{FilterState, SearchScope, Selector};
use crate::domain::types::{
    Biography, Category, CelebrityName, EventType, Gender, ImageRef, Language, Location,
    SocialLink, Slug, TypeConstraintError,
};

/// Listing filters as they arrive in the query string. Missing values and
/// `all` mean "no constraint".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CelebrityFilterQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub location: Option<String>,
    pub event_type: Option<String>,
}

impl CelebrityFilterQuery {
    /// Filter for the home view; an unknown category is an error.
    pub fn into_filter_state(self) -> Result<FilterState, TypeConstraintError> {
        let category = Selector::parse_category(self.category.as_deref())?;
        Ok(FilterState {
            category,
            ..self.into_selectors(SearchScope::NameAndCategory)
        })
    }

    /// Filter for a category page; any `category` parameter is ignored.
    pub fn into_category_filter_state(self, category: Category) -> FilterState {
        FilterState {
            category: Selector::Only(category),
            ..self.into_selectors(SearchScope::NameOnly)
        }
    }

    fn into_selectors(self, scope: SearchScope) -> FilterState {
        FilterState {
            search: self.search.unwrap_or_default(),
            scope,
            category: Selector::All,
            gender: Selector::parse_text(self.gender.as_deref()),
            language: Selector::parse_text(self.language.as_deref()),
            location: Selector::parse_text(self.location.as_deref()),
            event_type: Selector::parse_text(self.event_type.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCelebrityForm {
    /// Derived from `name` when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[validate(length(min = 1))]
    pub gender: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub event_types: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCelebrityFormPayload {
    pub slug: Slug,
    pub name: CelebrityName,
    pub category: Category,
    pub image: ImageRef,
    pub bio: Biography,
    pub social_links: Vec<SocialLink>,
    pub gender: Gender,
    pub languages: Vec<Language>,
    pub location: Location,
    pub event_types: Vec<EventType>,
    pub is_featured: bool,
}

impl AddCelebrityFormPayload {
    pub fn into_new_celebrity(self) -> NewCelebrity {
        NewCelebrity {
            slug: self.slug,
            name: self.name,
            category: self.category,
            image: self.image,
            bio: self.bio,
            social_links: self.social_links,
            gender: self.gender,
            languages: self.languages,
            location: self.location,
            event_types: self.event_types,
            is_featured: self.is_featured,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddCelebrityFormError {
    #[error("Add celebrity form validation failed: {0}")]
    Validation(String),
    #[error("Add celebrity form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCelebrityFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCelebrityFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Parse each entry of a list field, dropping blank entries.
pub(crate) fn parse_tags<T>(
    values: impl IntoIterator<Item = String>,
    parse: impl Fn(String) -> Result<T, TypeConstraintError>,
) -> Result<Vec<T>, TypeConstraintError> {
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .map(parse)
        .collect()
}

/// Use the explicit slug when present, otherwise derive one from the name.
pub(crate) fn resolve_slug(slug: Option<String>, name: &str) -> Result<Slug, TypeConstraintError> {
    match slug.filter(|s| !s.trim().is_empty()) {
        Some(slug) => Slug::new(slug),
        None => Slug::from_name(name),
    }
}

impl TryFrom<AddCelebrityForm> for AddCelebrityFormPayload {
    type Error = AddCelebrityFormError;

    fn try_from(value: AddCelebrityForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            slug: resolve_slug(value.slug, &value.name)?,
            name: CelebrityName::new(value.name)?,
            category: Category::try_from(value.category)?,
            image: ImageRef::new(value.image)?,
            bio: Biography::new(value.bio)?,
            social_links: parse_tags(value.social_links, SocialLink::new)?,
            gender: Gender::new(value.gender)?,
            languages: parse_tags(value.languages, Language::new)?,
            location: Location::new(value.location)?,
            event_types: parse_tags(value.event_types, EventType::new)?,
            is_featured: value.is_featured,
        })
    }
}
