//! Filter-and-rank logic shared by every celebrity listing.
//!
//! Everything here is a pure function of a celebrity snapshot and a
//! [`FilterState`]; callers re-run it whenever either changes.

use crate::domain::celebrity::Celebrity;
use crate::domain::types::{Category, TypeConstraintError};

/// Maximum number of entries in the featured and trending rails.
pub const RANKED_LIMIT: usize = 3;

/// Query value meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

fn is_all_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// A single filter selector: either unconstrained or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selector<T> {
    /// `All` is vacuously true; `Only` defers to `predicate`.
    pub fn matches(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => predicate(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl Selector<String> {
    /// Reads a free-form selector from a query parameter.
    pub fn parse_text(value: Option<&str>) -> Self {
        match value {
            Some(value) if !is_all_sentinel(value) => Self::Only(value.trim().to_string()),
            _ => Self::All,
        }
    }
}

impl Selector<Category> {
    /// Reads a category selector, accepting either the display name or its slug.
    pub fn parse_category(value: Option<&str>) -> Result<Self, TypeConstraintError> {
        match value {
            Some(value) if !is_all_sentinel(value) => Category::try_from(value)
                .or_else(|err| Category::from_slug(value).ok_or(err))
                .map(Self::Only),
            _ => Ok(Self::All),
        }
    }
}

/// Which fields the free-text search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Home view: name or category.
    #[default]
    NameAndCategory,
    /// Category page: name only.
    NameOnly,
}

/// Current filter selection for a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub scope: SearchScope,
    pub category: Selector<Category>,
    pub gender: Selector<String>,
    pub language: Selector<String>,
    pub location: Selector<String>,
    pub event_type: Selector<String>,
}

impl FilterState {
    /// Unconstrained state for the home view.
    pub fn home() -> Self {
        Self::default()
    }

    /// State for a category page: category pinned, search on names only.
    pub fn category_page(category: Category) -> Self {
        Self {
            scope: SearchScope::NameOnly,
            category: Selector::Only(category),
            ..Self::default()
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Selector::Only(gender.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Selector::Only(language.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Selector::Only(location.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Selector::Only(event_type.into());
        self
    }

    /// True when any attribute selector is set.
    ///
    /// Search text is not counted, nor is the category pinned by a category page.
    pub fn has_active_selectors(&self) -> bool {
        let category_pinned = self.scope == SearchScope::NameOnly;
        !((category_pinned || self.category.is_all())
            && self.gender.is_all()
            && self.language.is_all()
            && self.location.is_all()
            && self.event_type.is_all())
    }

    /// Resets search and every selector. A category page keeps its category.
    pub fn clear(&mut self) {
        let category = match self.scope {
            SearchScope::NameOnly => std::mem::take(&mut self.category),
            SearchScope::NameAndCategory => Selector::All,
        };
        *self = Self {
            scope: self.scope,
            category,
            ..Self::default()
        };
    }

    /// Whether `celebrity` satisfies every active predicate.
    pub fn matches(&self, celebrity: &Celebrity) -> bool {
        self.matches_with_needle(celebrity, &self.search.trim().to_lowercase())
    }

    fn matches_with_needle(&self, celebrity: &Celebrity, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || celebrity.name.to_lowercase().contains(needle)
            || (self.scope == SearchScope::NameAndCategory
                && celebrity.category.as_str().to_lowercase().contains(needle));

        matches_search
            && self.category.matches(|c| celebrity.category == *c)
            && self.gender.matches(|g| celebrity.gender.as_str() == g.as_str())
            && self.language.matches(|l| celebrity.speaks(l))
            && self.location.matches(|l| celebrity.location.as_str() == l.as_str())
            && self.event_type.matches(|e| celebrity.supports_event(e))
    }
}

/// Celebrities satisfying `filter`, in input order.
pub fn compute_visible<'a>(all: &'a [Celebrity], filter: &FilterState) -> Vec<&'a Celebrity> {
    let needle = filter.search.trim().to_lowercase();
    all.iter()
        .filter(|celebrity| filter.matches_with_needle(celebrity, &needle))
        .collect()
}

/// Editorially featured celebrities ranked by likes, optionally within one category.
///
/// Ties keep their input order.
pub fn featured(all: &[Celebrity], category: Option<Category>) -> Vec<&Celebrity> {
    let mut ranked = all
        .iter()
        .filter(|c| c.is_featured && category.is_none_or(|category| c.category == category))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked.truncate(RANKED_LIMIT);
    ranked
}

/// Most viewed celebrities. Ties keep their input order.
pub fn trending(all: &[Celebrity]) -> Vec<&Celebrity> {
    let mut ranked = all.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(RANKED_LIMIT);
    ranked
}

/// Number of celebrities per category, in category display order.
pub fn category_counts(all: &[Celebrity]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = all.iter().filter(|c| c.category == category).count();
            (category, count)
        })
        .collect()
}
