//! Session-scoped favorites with optimistic like/unlike.
//!
//! A toggle updates the local set immediately and then asks the store to
//! adjust the like counter. A failed request rolls the local set back to what
//! it was before the toggle. Overlapping toggles on the same id are not
//! ordered against each other: only the most recent toggle for an id may
//! settle its state, completions of older toggles are ignored.

use std::collections::HashMap;

use crate::client::{CelebrityStore, StoreError};
use crate::domain::celebrity::Celebrity;
use crate::domain::types::CelebrityId;
use crate::dto::celebrities::EngagementDto;

/// Business messaging number the combined enquiry is sent to.
pub const CONTACT_PHONE: &str = "919876543210";

const MESSAGE_INTRO: &str = "Hi! I'd like to enquire about the following celebrities for an event:";
const MESSAGE_OUTRO: &str = "Please share more details about availability and pricing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteState {
    #[default]
    NotFavorited,
    PendingFavorite,
    Favorited,
    PendingUnfavorite,
}

impl FavoriteState {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::PendingFavorite | Self::PendingUnfavorite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIntent {
    Like,
    Unlike,
}

/// A toggle that has been applied locally but not yet confirmed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub id: CelebrityId,
    pub intent: ToggleIntent,
    generation: u64,
    /// Index the id held in the favorites list before an unlike.
    position: Option<usize>,
}

impl PendingToggle {
    /// Issue the counter update for this toggle.
    pub async fn dispatch<S>(&self, store: &S) -> Result<EngagementDto, StoreError>
    where
        S: CelebrityStore + ?Sized,
    {
        match self.intent {
            ToggleIntent::Like => store.increment_likes(self.id).await,
            ToggleIntent::Unlike => store.decrement_likes(self.id).await,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Confirmed,
    RolledBack,
    /// A newer toggle for the same id owns the state.
    Superseded,
}

pub struct FavoritesController<S> {
    store: S,
    celebrities: Vec<Celebrity>,
    favorites: Vec<CelebrityId>,
    states: HashMap<CelebrityId, FavoriteState>,
    latest: HashMap<CelebrityId, u64>,
    next_generation: u64,
}

impl<S: CelebrityStore> FavoritesController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            celebrities: Vec::new(),
            favorites: Vec::new(),
            states: HashMap::new(),
            latest: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Last celebrity snapshot fetched from the store.
    pub fn celebrities(&self) -> &[Celebrity] {
        &self.celebrities
    }

    /// Favorited ids in the order they were added.
    pub fn favorite_ids(&self) -> &[CelebrityId] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: CelebrityId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn state(&self, id: CelebrityId) -> FavoriteState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Favorited celebrities resolved against the current snapshot.
    pub fn favorites(&self) -> Vec<&Celebrity> {
        resolve_favorites(&self.favorites, &self.celebrities)
    }

    /// Replace the snapshot with a fresh listing from the store.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.celebrities = self.store.list_celebrities().await?;
        Ok(())
    }

    /// Apply a toggle locally and return the request that must follow it.
    pub fn begin_toggle(&mut self, id: CelebrityId) -> PendingToggle {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest.insert(id, generation);

        match self.favorites.iter().position(|f| *f == id) {
            Some(position) => {
                self.favorites.remove(position);
                self.states.insert(id, FavoriteState::PendingUnfavorite);
                PendingToggle {
                    id,
                    intent: ToggleIntent::Unlike,
                    generation,
                    position: Some(position),
                }
            }
            None => {
                self.favorites.push(id);
                self.states.insert(id, FavoriteState::PendingFavorite);
                PendingToggle {
                    id,
                    intent: ToggleIntent::Like,
                    generation,
                    position: None,
                }
            }
        }
    }

    /// Settle a toggle once its request resolved.
    pub fn complete_toggle(&mut self, toggle: &PendingToggle, succeeded: bool) -> Completion {
        if self.latest.get(&toggle.id) != Some(&toggle.generation) {
            return Completion::Superseded;
        }
        self.latest.remove(&toggle.id);

        match (toggle.intent, succeeded) {
            (ToggleIntent::Like, true) => {
                self.states.insert(toggle.id, FavoriteState::Favorited);
                Completion::Confirmed
            }
            (ToggleIntent::Unlike, true) => {
                self.states.remove(&toggle.id);
                Completion::Confirmed
            }
            (ToggleIntent::Like, false) => {
                self.favorites.retain(|f| *f != toggle.id);
                self.states.remove(&toggle.id);
                Completion::RolledBack
            }
            (ToggleIntent::Unlike, false) => {
                if !self.favorites.contains(&toggle.id) {
                    let position = toggle
                        .position
                        .unwrap_or(self.favorites.len())
                        .min(self.favorites.len());
                    self.favorites.insert(position, toggle.id);
                }
                self.states.insert(toggle.id, FavoriteState::Favorited);
                Completion::RolledBack
            }
        }
    }

    /// Toggle `id`, wait for the store and reconcile.
    ///
    /// On success the celebrity list is refetched; a failed refetch keeps the
    /// previous snapshot. On failure the local change is rolled back and the
    /// store error is returned.
    pub async fn toggle_favorite(&mut self, id: CelebrityId) -> Result<Completion, StoreError> {
        let toggle = self.begin_toggle(id);
        let result = toggle.dispatch(&self.store).await;
        let completion = self.complete_toggle(&toggle, result.is_ok());

        if let Err(e) = result {
            log::error!("Failed to update likes for celebrity {}: {e}", id.get());
            return Err(e);
        }

        if let Err(e) = self.refresh().await {
            log::warn!("Failed to refresh celebrities after toggling {}: {e}", id.get());
        }
        Ok(completion)
    }

    /// Message for the current favorites, or `None` when there are none.
    pub fn combined_enquiry_message(&self) -> Option<String> {
        if self.favorites().is_empty() {
            return None;
        }
        Some(compose_combined_enquiry_message(
            &self.favorites,
            &self.celebrities,
        ))
    }

    /// Prefilled link to [`CONTACT_PHONE`] for the current favorites.
    pub fn combined_enquiry_link(&self) -> Option<String> {
        self.combined_enquiry_message()
            .map(|message| combined_enquiry_link(CONTACT_PHONE, &message))
    }
}

fn resolve_favorites<'a>(favorite_ids: &[CelebrityId], all: &'a [Celebrity]) -> Vec<&'a Celebrity> {
    favorite_ids
        .iter()
        .filter_map(|id| all.iter().find(|c| c.id == *id))
        .collect()
}

/// Builds one message naming every favorited celebrity, in favorites order.
///
/// Ids missing from `all` are skipped.
pub fn compose_combined_enquiry_message(favorite_ids: &[CelebrityId], all: &[Celebrity]) -> String {
    let names = resolve_favorites(favorite_ids, all)
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{MESSAGE_INTRO}\n\n{names}\n\n{MESSAGE_OUTRO}")
}

/// Prefilled messaging link for `phone` (digits only, with country code).
pub fn combined_enquiry_link(phone: &str, message: &str) -> String {
    let digits = phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}
