use crate::db::{DbConnection, DbPool};
use crate::domain::celebrity::{Celebrity, NewCelebrity};
use crate::domain::enquiry::{Enquiry, NewEnquiry};
use crate::domain::types::{CelebrityId, Slug};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod celebrity;
pub mod enquiry;
pub mod errors;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters for the operator enquiry listing.
#[derive(Debug, Clone, Default)]
pub struct EnquiryListQuery {
    /// Restrict to enquiries about one celebrity.
    pub celebrity_id: Option<CelebrityId>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl EnquiryListQuery {
    pub fn celebrity(mut self, celebrity_id: CelebrityId) -> Self {
        self.celebrity_id = Some(celebrity_id);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for celebrity entities.
pub trait CelebrityReader {
    /// List every celebrity in insertion order.
    fn list_celebrities(&self) -> RepositoryResult<Vec<Celebrity>>;
    /// Retrieve a celebrity by its identifier.
    fn get_celebrity_by_id(&self, id: CelebrityId) -> RepositoryResult<Option<Celebrity>>;
    /// Retrieve a celebrity by its slug.
    fn get_celebrity_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Celebrity>>;
}

/// Write operations for celebrity entities.
///
/// Counter updates are single atomic statements and return the number of
/// affected rows.
pub trait CelebrityWriter {
    /// Persist a new celebrity; a duplicate slug is a constraint violation.
    fn create_celebrity(&self, celebrity: &NewCelebrity) -> RepositoryResult<Celebrity>;
    /// Add one to the view counter.
    fn increment_views(&self, id: CelebrityId) -> RepositoryResult<usize>;
    /// Add one to the like counter.
    fn increment_likes(&self, id: CelebrityId) -> RepositoryResult<usize>;
    /// Subtract one from the like counter; a counter at zero is left untouched.
    fn decrement_likes(&self, id: CelebrityId) -> RepositoryResult<usize>;
}

/// Read-only operations for enquiry entities.
pub trait EnquiryReader {
    /// List enquiries, newest first, together with the unpaginated total.
    fn list_enquiries(&self, query: EnquiryListQuery) -> RepositoryResult<(usize, Vec<Enquiry>)>;
}

/// Write operations for enquiry entities.
pub trait EnquiryWriter {
    /// Persist an enquiry; the store assigns its id and creation time.
    fn create_enquiry(&self, enquiry: &NewEnquiry) -> RepositoryResult<Enquiry>;
}
