//! Helpers for integration tests.
#![allow(dead_code)]

use celebs_booking::db::{DbPool, MIGRATIONS, establish_connection_pool};
use celebs_booking::domain::celebrity::NewCelebrity;
use celebs_booking::domain::enquiry::NewEnquiry;
use celebs_booking::domain::types::{
    Biography, Category, CelebrityId, CelebrityName, ContactNumber, EmailAddress, EnquiryPurpose,
    EventType, Gender, ImageRef, Language, Location, SocialLink, Slug, SubmitterName,
};
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn new_celebrity(name: &str, category: Category) -> NewCelebrity {
    NewCelebrity {
        slug: Slug::from_name(name).expect("valid slug"),
        name: CelebrityName::new(name).expect("valid name"),
        category,
        image: ImageRef::new("/assets/celebrities/placeholder.png").expect("valid image"),
        bio: Biography::new("Performer available for private and corporate events.")
            .expect("valid bio"),
        social_links: vec![SocialLink::new("https://instagram.com/example").expect("valid link")],
        gender: Gender::new("Female").expect("valid gender"),
        languages: vec![
            Language::new("Hindi").expect("valid language"),
            Language::new("English").expect("valid language"),
        ],
        location: Location::new("Mumbai").expect("valid location"),
        event_types: vec![EventType::new("Wedding").expect("valid event type")],
        is_featured: false,
    }
}

pub fn new_enquiry(celebrity_id: CelebrityId, celebrity_name: &str, user_name: &str) -> NewEnquiry {
    NewEnquiry {
        celebrity_id,
        celebrity_name: CelebrityName::new(celebrity_name).expect("valid name"),
        user_name: SubmitterName::new(user_name).expect("valid submitter"),
        email: EmailAddress::new("booker@example.com").expect("valid email"),
        contact: ContactNumber::new("+91 98765 43210").expect("valid contact"),
        purpose: EnquiryPurpose::new("Wedding sangeet performance in December")
            .expect("valid purpose"),
    }
}
