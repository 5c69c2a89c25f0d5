//! Builders for domain values used across unit tests.

use crate::domain::celebrity::{Celebrity, NewCelebrity};
use crate::domain::types::{
    Biography, Category, CelebrityId, CelebrityName, EventType, Gender, ImageRef, Language,
    LikeCount, Location, Slug, ViewCount,
};

pub struct CelebrityBuilder {
    celebrity: Celebrity,
}

/// Minimal valid celebrity; the slug is derived from `name` and `id`.
pub fn celebrity(id: i32, name: &str, category: Category) -> CelebrityBuilder {
    let slug = format!("{}-{id}", Slug::from_name(name).unwrap());
    CelebrityBuilder {
        celebrity: Celebrity {
            id: CelebrityId::new(id).unwrap(),
            slug: Slug::new(slug).unwrap(),
            name: CelebrityName::new(name).unwrap(),
            category,
            image: ImageRef::new("/assets/celebrities/placeholder.jpg").unwrap(),
            bio: Biography::new("Performer available for events.").unwrap(),
            social_links: Vec::new(),
            gender: Gender::new("Other").unwrap(),
            languages: vec![Language::new("Hindi").unwrap()],
            location: Location::new("Mumbai").unwrap(),
            event_types: vec![EventType::new("Corporate").unwrap()],
            is_featured: false,
            views: ViewCount::default(),
            likes: LikeCount::default(),
        },
    }
}

impl CelebrityBuilder {
    pub fn languages(mut self, languages: &[&str]) -> Self {
        self.celebrity.languages = languages.iter().map(|l| Language::new(*l).unwrap()).collect();
        self
    }

    pub fn events(mut self, events: &[&str]) -> Self {
        self.celebrity.event_types = events.iter().map(|e| EventType::new(*e).unwrap()).collect();
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.celebrity.gender = Gender::new(gender).unwrap();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.celebrity.location = Location::new(location).unwrap();
        self
    }

    pub fn featured(mut self) -> Self {
        self.celebrity.is_featured = true;
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.celebrity.likes = LikeCount::new(likes).unwrap();
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.celebrity.views = ViewCount::new(views).unwrap();
        self
    }

    pub fn build(self) -> Celebrity {
        self.celebrity
    }
}

/// Insertable counterpart of [`celebrity`].
pub fn new_celebrity(name: &str, category: Category) -> NewCelebrity {
    let c = celebrity(1, name, category).build();
    NewCelebrity {
        slug: Slug::from_name(name).unwrap(),
        name: c.name,
        category: c.category,
        image: c.image,
        bio: c.bio,
        social_links: c.social_links,
        gender: c.gender,
        languages: c.languages,
        location: c.location,
        event_types: c.event_types,
        is_featured: c.is_featured,
    }
}
