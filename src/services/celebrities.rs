use crate::domain::celebrity::Celebrity;
use crate::domain::filter::{compute_visible, featured, trending};
use crate::domain::types::{Category, CelebrityId, Slug};
use crate::dto::ListingDto;
use crate::dto::celebrities::{CelebrityDto, EngagementDto};
use crate::forms::celebrities::{AddCelebrityFormPayload, CelebrityFilterQuery};
use crate::repository::errors::RepositoryError;
use crate::repository::{CelebrityReader, CelebrityWriter};

use super::{OperatorAccess, ServiceError, ServiceResult};

pub(crate) fn load_celebrities<R>(repo: &R) -> ServiceResult<Vec<Celebrity>>
where
    R: CelebrityReader,
{
    repo.list_celebrities().map_err(|e| {
        log::error!("Failed to list celebrities: {e}");
        ServiceError::Internal
    })
}

fn to_listing(celebrities: Vec<&Celebrity>) -> ListingDto<CelebrityDto> {
    celebrities
        .into_iter()
        .cloned()
        .map(CelebrityDto::from)
        .collect()
}

/// Home view listing with the query's filters applied.
pub fn list_celebrities<R>(
    query: CelebrityFilterQuery,
    repo: &R,
) -> ServiceResult<ListingDto<CelebrityDto>>
where
    R: CelebrityReader,
{
    let filter = query.into_filter_state()?;
    let all = load_celebrities(repo)?;
    Ok(to_listing(compute_visible(&all, &filter)))
}

/// Category page listing; search looks at names only.
pub fn list_category_celebrities<R>(
    category_slug: &str,
    query: CelebrityFilterQuery,
    repo: &R,
) -> ServiceResult<ListingDto<CelebrityDto>>
where
    R: CelebrityReader,
{
    let category = Category::from_slug(category_slug).ok_or(ServiceError::NotFound)?;
    let filter = query.into_category_filter_state(category);
    let all = load_celebrities(repo)?;
    Ok(to_listing(compute_visible(&all, &filter)))
}

pub fn featured_celebrities<R>(
    category: Option<&str>,
    repo: &R,
) -> ServiceResult<ListingDto<CelebrityDto>>
where
    R: CelebrityReader,
{
    let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(value) => Some(
            Category::try_from(value)
                .or_else(|err| Category::from_slug(value).ok_or(err))?,
        ),
        None => None,
    };
    let all = load_celebrities(repo)?;
    Ok(to_listing(featured(&all, category)))
}

pub fn trending_celebrities<R>(repo: &R) -> ServiceResult<ListingDto<CelebrityDto>>
where
    R: CelebrityReader,
{
    let all = load_celebrities(repo)?;
    Ok(to_listing(trending(&all)))
}

fn find_by_id<R>(id: i32, repo: &R) -> ServiceResult<Celebrity>
where
    R: CelebrityReader,
{
    let id = CelebrityId::new(id).map_err(|_| ServiceError::NotFound)?;
    match repo.get_celebrity_by_id(id) {
        Ok(Some(celebrity)) => Ok(celebrity),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get celebrity {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_celebrity<R>(id: i32, repo: &R) -> ServiceResult<CelebrityDto>
where
    R: CelebrityReader,
{
    find_by_id(id, repo).map(CelebrityDto::from)
}

pub fn get_celebrity_by_slug<R>(slug: &str, repo: &R) -> ServiceResult<CelebrityDto>
where
    R: CelebrityReader,
{
    let slug = Slug::new(slug).map_err(|_| ServiceError::NotFound)?;
    match repo.get_celebrity_by_slug(&slug) {
        Ok(Some(celebrity)) => Ok(celebrity.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get celebrity by slug {slug}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Which counter an engagement call updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    View,
    Like,
    Unlike,
}

/// Apply one engagement update and report the resulting counters.
///
/// Unliking a celebrity whose count is already zero is a successful no-op.
pub fn record_engagement<R>(
    id: i32,
    engagement: Engagement,
    repo: &R,
) -> ServiceResult<EngagementDto>
where
    R: CelebrityReader + CelebrityWriter,
{
    let celebrity = find_by_id(id, repo)?;

    let result = match engagement {
        Engagement::View => repo.increment_views(celebrity.id),
        Engagement::Like => repo.increment_likes(celebrity.id),
        Engagement::Unlike => repo.decrement_likes(celebrity.id),
    };
    if let Err(e) = result {
        log::error!("Failed to record {engagement:?} for celebrity {}: {e}", celebrity.id);
        return Err(ServiceError::Internal);
    }

    let updated = find_by_id(id, repo)?;
    Ok(EngagementDto::from(&updated))
}

pub fn create_celebrity<R>(
    payload: AddCelebrityFormPayload,
    _access: OperatorAccess,
    repo: &R,
) -> ServiceResult<CelebrityDto>
where
    R: CelebrityWriter,
{
    let celebrity = payload.into_new_celebrity();
    match repo.create_celebrity(&celebrity) {
        Ok(created) => {
            log::info!("Created celebrity {} ({})", created.name, created.slug);
            Ok(created.into())
        }
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Rejected celebrity {}: {e}", celebrity.slug);
            Err(ServiceError::Conflict(format!(
                "slug {} already exists",
                celebrity.slug
            )))
        }
        Err(e) => {
            log::error!("Failed to create celebrity: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{celebrity, new_celebrity};
    use crate::repository::test::TestRepository;

    fn repo() -> TestRepository {
        TestRepository::new(vec![
            celebrity(1, "Priya Sharma", Category::Singers)
                .featured()
                .likes(40)
                .views(10)
                .build(),
            celebrity(2, "Rajesh Kumar", Category::Actors)
                .featured()
                .likes(90)
                .views(5)
                .build(),
            celebrity(3, "Amit Tandon", Category::Comedians)
                .likes(0)
                .views(70)
                .build(),
        ])
    }

    fn payload(name: &str) -> AddCelebrityFormPayload {
        let c = new_celebrity(name, Category::Chefs);
        AddCelebrityFormPayload {
            slug: c.slug,
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

    #[test]
    fn listing_reports_empty_state() {
        let repo = repo();
        let query = CelebrityFilterQuery {
            search: Some("nobody".to_string()),
            ..CelebrityFilterQuery::default()
        };
        let listing = list_celebrities(query, &repo).unwrap();
        assert!(listing.empty);
        assert!(listing.items.is_empty());

        let listing = list_celebrities(CelebrityFilterQuery::default(), &repo).unwrap();
        assert!(!listing.empty);
        assert_eq!(listing.items.len(), 3);
    }

    #[test]
    fn unknown_category_filter_is_a_type_constraint_error() {
        let query = CelebrityFilterQuery {
            category: Some("Jugglers".to_string()),
            ..CelebrityFilterQuery::default()
        };
        let err = list_celebrities(query, &repo()).unwrap_err();
        assert!(matches!(err, ServiceError::TypeConstraint(_)));
    }

    #[test]
    fn category_page_of_unknown_slug_is_not_found() {
        let err =
            list_category_celebrities("jugglers", CelebrityFilterQuery::default(), &repo())
                .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn featured_and_trending_are_ranked() {
        let repo = repo();
        let featured = featured_celebrities(None, &repo).unwrap();
        let ids = featured.items.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1]);

        let singers = featured_celebrities(Some("singers"), &repo).unwrap();
        assert_eq!(singers.items.len(), 1);

        let trending = trending_celebrities(&repo).unwrap();
        let ids = trending.items.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn lookup_by_slug_and_id() {
        let repo = repo();
        assert_eq!(get_celebrity(2, &repo).unwrap().name, "Rajesh Kumar");
        assert_eq!(get_celebrity(0, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(get_celebrity(99, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(get_celebrity_by_slug("amit-tandon-3", &repo).unwrap().id, 3);
        assert_eq!(
            get_celebrity_by_slug("Not A Slug", &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn engagement_updates_counters() {
        let repo = repo();
        let view = record_engagement(1, Engagement::View, &repo).unwrap();
        assert_eq!(view.views, 11);
        let like = record_engagement(1, Engagement::Like, &repo).unwrap();
        assert_eq!(like.likes, 41);
        let unlike = record_engagement(1, Engagement::Unlike, &repo).unwrap();
        assert_eq!(unlike.likes, 40);
    }

    #[test]
    fn unlike_at_zero_stays_at_zero() {
        let repo = repo();
        let unlike = record_engagement(3, Engagement::Unlike, &repo).unwrap();
        assert_eq!(unlike.likes, 0);
        assert_eq!(repo.celebrity(3).unwrap().likes.get(), 0);
    }

    #[test]
    fn engagement_on_missing_celebrity_is_not_found() {
        let err = record_engagement(42, Engagement::Like, &repo()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn engagement_write_failure_is_internal() {
        let repo = TestRepository::failing_writes(vec![
            celebrity(1, "Priya Sharma", Category::Singers).build(),
        ]);
        let err = record_engagement(1, Engagement::Like, &repo).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[test]
    fn duplicate_slug_is_a_conflict() {
        let repo = repo();
        let access = OperatorAccess(());
        let created = create_celebrity(payload("Chef Ritu Malhotra"), access, &repo).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.likes, 0);

        let err = create_celebrity(payload("Chef Ritu Malhotra"), access, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
