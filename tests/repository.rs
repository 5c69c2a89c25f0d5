use celebs_booking::domain::types::{Category, CelebrityId, Slug};
use celebs_booking::repository::errors::RepositoryError;
use celebs_booking::repository::{
    CelebrityReader, CelebrityWriter, DieselRepository, EnquiryListQuery, EnquiryReader,
    EnquiryWriter,
};

mod common;

use common::{TestDb, new_celebrity, new_enquiry};

#[test]
fn create_and_lookup_celebrity() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_celebrity(&new_celebrity("Priya Sharma", Category::Singers))
        .expect("should create celebrity");
    assert_eq!(created.views.get(), 0);
    assert_eq!(created.likes.get(), 0);

    let by_slug = repo
        .get_celebrity_by_slug(&Slug::new("priya-sharma").unwrap())
        .expect("lookup by slug")
        .expect("celebrity exists");
    assert_eq!(by_slug, created);
    assert_eq!(by_slug.languages.len(), 2);
    assert_eq!(by_slug.social_links[0].as_str(), "https://instagram.com/example");

    let by_id = repo
        .get_celebrity_by_id(created.id)
        .expect("lookup by id")
        .expect("celebrity exists");
    assert_eq!(by_id.category, Category::Singers);

    let missing = repo
        .get_celebrity_by_slug(&Slug::new("nobody").unwrap())
        .expect("lookup by slug");
    assert!(missing.is_none());
}

#[test]
fn duplicate_slug_is_a_constraint_violation() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_celebrity(&new_celebrity("Arjun Mehta", Category::Singers))
        .expect("first insert");
    let result = repo.create_celebrity(&new_celebrity("Arjun Mehta", Category::Actors));

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
    assert_eq!(repo.list_celebrities().unwrap().len(), 1);
}

#[test]
fn list_keeps_insertion_order() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for (name, category) in [
        ("Neha Patel", Category::Influencers),
        ("Amit Tandon", Category::Comedians),
        ("Vikram Singh", Category::Choreographers),
    ] {
        repo.create_celebrity(&new_celebrity(name, category)).unwrap();
    }

    let names = repo
        .list_celebrities()
        .unwrap()
        .into_iter()
        .map(|c| c.name.into_inner())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Neha Patel", "Amit Tandon", "Vikram Singh"]);
}

#[test]
fn counters_update_atomically_and_likes_floor_at_zero() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_celebrity(&new_celebrity("Rajesh Kumar", Category::Actors))
        .unwrap();

    assert_eq!(repo.increment_views(created.id).unwrap(), 1);
    assert_eq!(repo.increment_views(created.id).unwrap(), 1);
    assert_eq!(repo.increment_likes(created.id).unwrap(), 1);
    assert_eq!(repo.decrement_likes(created.id).unwrap(), 1);
    assert_eq!(repo.decrement_likes(created.id).unwrap(), 0);

    let stored = repo.get_celebrity_by_id(created.id).unwrap().unwrap();
    assert_eq!(stored.views.get(), 2);
    assert_eq!(stored.likes.get(), 0);
}

#[test]
fn counter_update_on_missing_celebrity_touches_nothing() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = CelebrityId::new(99).unwrap();
    assert_eq!(repo.increment_likes(missing).unwrap(), 0);
}

#[test]
fn enquiry_round_trip_and_listing() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let priya = repo
        .create_celebrity(&new_celebrity("Priya Sharma", Category::Singers))
        .unwrap();
    let chef = repo
        .create_celebrity(&new_celebrity("Chef Ritu Malhotra", Category::Chefs))
        .unwrap();

    let first = repo
        .create_enquiry(&new_enquiry(priya.id, "Priya Sharma", "Anita Rao"))
        .expect("should store enquiry");
    assert_eq!(first.user_name.as_str(), "Anita Rao");
    assert_eq!(first.contact.as_str(), "+91 98765 43210");
    let second = repo
        .create_enquiry(&new_enquiry(chef.id, "Chef Ritu Malhotra", "Vivek Iyer"))
        .unwrap();
    repo.create_enquiry(&new_enquiry(priya.id, "Priya Sharma", "Kabir Shah"))
        .unwrap();

    let (total, enquiries) = repo.list_enquiries(EnquiryListQuery::default()).unwrap();
    assert_eq!(total, 3);
    assert_eq!(enquiries.last().unwrap().id, first.id);

    let (total, enquiries) = repo
        .list_enquiries(EnquiryListQuery::default().celebrity(chef.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(enquiries, vec![second]);

    let (total, page) = repo
        .list_enquiries(EnquiryListQuery::default().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);
}

#[test]
fn enquiry_for_unknown_celebrity_is_rejected() {
    let test_db = TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = repo.create_enquiry(&new_enquiry(
        CelebrityId::new(7).unwrap(),
        "Ghost",
        "Anita Rao",
    ));

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}
