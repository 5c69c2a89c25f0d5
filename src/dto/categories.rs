use serde::{Deserialize, Serialize};

use crate::domain::types::Category;

/// Category grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: Category,
    pub slug: String,
    pub count: usize,
}

impl From<(Category, usize)> for CategoryDto {
    fn from((category, count): (Category, usize)) -> Self {
        Self {
            name: category,
            slug: category.slug(),
            count,
        }
    }
}
