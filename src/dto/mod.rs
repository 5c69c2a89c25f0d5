//! JSON payloads exchanged between the HTTP API and its clients.

use serde::{Deserialize, Serialize};

pub mod categories;
pub mod celebrities;
pub mod enquiries;

/// A list response that also tells the client whether to show the "no results" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDto<T> {
    pub items: Vec<T>,
    pub empty: bool,
}

impl<T> ListingDto<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            empty: items.is_empty(),
            items,
        }
    }
}

impl<T> FromIterator<T> for ListingDto<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
