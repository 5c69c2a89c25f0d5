use crate::domain::filter::category_counts;
use crate::dto::categories::CategoryDto;
use crate::repository::CelebrityReader;

use super::ServiceResult;
use super::celebrities::load_celebrities;

/// Every category in display order with the number of celebrities in it.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CelebrityReader,
{
    let all = load_celebrities(repo)?;
    Ok(category_counts(&all)
        .into_iter()
        .map(CategoryDto::from)
        .collect())
}
