use serde::{Deserialize, Serialize};

use crate::domain::celebrity::Celebrity;
use crate::domain::types::{
    Biography, Category, CelebrityId, CelebrityName, EventType, Gender, ImageRef, Language,
    LikeCount, Location, SocialLink, Slug, TypeConstraintError, ViewCount,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub category_slug: String,
    pub image: String,
    pub bio: String,
    pub social_links: Vec<String>,
    pub gender: String,
    pub languages: Vec<String>,
    pub location: String,
    pub event_types: Vec<String>,
    pub is_featured: bool,
    pub views: i32,
    pub likes: i32,
}

fn strings<T: AsRef<str>>(values: Vec<T>) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}

impl From<Celebrity> for CelebrityDto {
    fn from(value: Celebrity) -> Self {
        Self {
            id: value.id.get(),
            slug: value.slug.into_inner(),
            name: value.name.into_inner(),
            category: value.category,
            category_slug: value.category.slug(),
            image: value.image.into_inner(),
            bio: value.bio.into_inner(),
            social_links: strings(value.social_links),
            gender: value.gender.into_inner(),
            languages: strings(value.languages),
            location: value.location.into_inner(),
            event_types: strings(value.event_types),
            is_featured: value.is_featured,
            views: value.views.get(),
            likes: value.likes.get(),
        }
    }
}

impl TryFrom<CelebrityDto> for Celebrity {
    type Error = TypeConstraintError;

    fn try_from(value: CelebrityDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CelebrityId::new(value.id)?,
            slug: Slug::new(value.slug)?,
            name: CelebrityName::new(value.name)?,
            category: value.category,
            image: ImageRef::new(value.image)?,
            bio: Biography::new(value.bio)?,
            social_links: value
                .social_links
                .into_iter()
                .map(SocialLink::new)
                .collect::<Result<_, _>>()?,
            gender: Gender::new(value.gender)?,
            languages: value
                .languages
                .into_iter()
                .map(Language::new)
                .collect::<Result<_, _>>()?,
            location: Location::new(value.location)?,
            event_types: value
                .event_types
                .into_iter()
                .map(EventType::new)
                .collect::<Result<_, _>>()?,
            is_featured: value.is_featured,
            views: ViewCount::new(value.views)?,
            likes: LikeCount::new(value.likes)?,
        })
    }
}

/// Counter values after an engagement update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementDto {
    pub id: i32,
    pub views: i32,
    pub likes: i32,
}

impl From<&Celebrity> for EngagementDto {
    fn from(value: &Celebrity) -> Self {
        Self {
            id: value.id.get(),
            views: value.views.get(),
            likes: value.likes.get(),
        }
    }
}
