use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::celebrity::{Celebrity as DomainCelebrity, NewCelebrity as DomainNewCelebrity};
use crate::domain::types::{
    Biography, Category, CelebrityName, EventType, Gender, ImageRef, Language, LikeCount,
    Location, SocialLink, Slug, TypeConstraintError, ViewCount,
};

/// Diesel model representing a row in the `celebrities` table.
///
/// `social_links`, `languages` and `event_types` are stored as JSON arrays
/// of strings.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::celebrities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Celebrity {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub bio: String,
    pub social_links: String,
    pub gender: String,
    pub languages: String,
    pub location: String,
    pub event_types: String,
    pub is_featured: bool,
    pub views: i32,
    pub likes: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Celebrity`]; counters and timestamps use column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::celebrities)]
pub struct NewCelebrity {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub bio: String,
    pub social_links: String,
    pub gender: String,
    pub languages: String,
    pub location: String,
    pub event_types: String,
    pub is_featured: bool,
}

fn encode_list<T: AsRef<str>>(values: &[T]) -> String {
    let values = values
        .iter()
        .map(|v| serde_json::Value::from(v.as_ref()))
        .collect::<Vec<_>>();
    serde_json::Value::Array(values).to_string()
}

fn decode_list<T>(
    raw: &str,
    parse: impl Fn(String) -> Result<T, TypeConstraintError>,
) -> Result<Vec<T>, TypeConstraintError> {
    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(e.to_string()))?
        .into_iter()
        .map(parse)
        .collect()
}

impl TryFrom<Celebrity> for DomainCelebrity {
    type Error = TypeConstraintError;

    fn try_from(celebrity: Celebrity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: celebrity.id.try_into()?,
            slug: Slug::new(celebrity.slug)?,
            name: CelebrityName::new(celebrity.name)?,
            category: Category::try_from(celebrity.category)?,
            image: ImageRef::new(celebrity.image)?,
            bio: Biography::new(celebrity.bio)?,
            social_links: decode_list(&celebrity.social_links, SocialLink::new)?,
            gender: Gender::new(celebrity.gender)?,
            languages: decode_list(&celebrity.languages, Language::new)?,
            location: Location::new(celebrity.location)?,
            event_types: decode_list(&celebrity.event_types, EventType::new)?,
            is_featured: celebrity.is_featured,
            views: ViewCount::new(celebrity.views)?,
            likes: LikeCount::new(celebrity.likes)?,
        })
    }
}

impl From<&DomainNewCelebrity> for NewCelebrity {
    fn from(celebrity: &DomainNewCelebrity) -> Self {
        Self {
            slug: celebrity.slug.as_str().to_string(),
            name: celebrity.name.as_str().to_string(),
            category: celebrity.category.into(),
            image: celebrity.image.as_str().to_string(),
            bio: celebrity.bio.as_str().to_string(),
            social_links: encode_list(&celebrity.social_links),
            gender: celebrity.gender.as_str().to_string(),
            languages: encode_list(&celebrity.languages),
            location: celebrity.location.as_str().to_string(),
            event_types: encode_list(&celebrity.event_types),
            is_featured: celebrity.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::new_celebrity;

    fn row(languages: &str) -> Celebrity {
        Celebrity {
            id: 7,
            slug: "amit-tandon".to_string(),
            name: "Amit Tandon".to_string(),
            category: "Comedians".to_string(),
            image: "/assets/celebrities/amit.jpg".to_string(),
            bio: "Stand-up comedian.".to_string(),
            social_links: "[\"https://instagram.com/amittandon\"]".to_string(),
            gender: "Male".to_string(),
            languages: languages.to_string(),
            location: "Delhi".to_string(),
            event_types: "[\"Corporate\",\"Wedding\"]".to_string(),
            is_featured: true,
            views: 12,
            likes: 3,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn row_converts_into_domain_celebrity() {
        let celebrity = DomainCelebrity::try_from(row("[\"Hindi\",\"English\"]")).unwrap();
        assert_eq!(celebrity.category, Category::Comedians);
        assert!(celebrity.speaks("English"));
        assert!(celebrity.supports_event("Wedding"));
        assert_eq!(celebrity.social_links.len(), 1);
        assert_eq!(celebrity.likes.get(), 3);
    }

    #[test]
    fn malformed_list_column_is_rejected() {
        let err = DomainCelebrity::try_from(row("Hindi, English")).unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidValue(_)));
    }

    #[test]
    fn insertable_encodes_lists_as_json() {
        let domain = new_celebrity("Vikram Singh", Category::Choreographers);
        let insertable = NewCelebrity::from(&domain);
        assert_eq!(insertable.languages, "[\"Hindi\"]");
        assert_eq!(insertable.social_links, "[]");
        assert_eq!(insertable.category, "Choreographers");
        assert_eq!(insertable.slug, "vikram-singh");
    }
}
