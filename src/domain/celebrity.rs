use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Biography, Category, CelebrityId, CelebrityName, EventType, Gender, ImageRef, Language,
    LikeCount, Location, SocialLink, Slug, ViewCount,
};

/// A bookable talent profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Celebrity {
    pub id: CelebrityId,
    /// Unique and immutable once created.
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
    pub views: ViewCount,
    pub likes: LikeCount,
}

impl Celebrity {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.as_str() == language)
    }

    pub fn supports_event(&self, event_type: &str) -> bool {
        self.event_types.iter().any(|e| e.as_str() == event_type)
    }
}

/// Data required to insert a new [`Celebrity`]. Counters start at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCelebrity {
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
