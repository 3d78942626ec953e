//! Global Grid State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ProfileRow;
use crate::state::{self, MergeMode, SortSpec};

/// Everything the grid view needs, mutated only on the UI thread
#[derive(Clone, Debug, Default, Store)]
pub struct GridState {
    /// Accumulated rows, unique by id
    pub rows: Vec<ProfileRow>,
    /// Zero-based page cursor, advances on scroll-to-bottom
    pub page: u32,
    /// Sort specs; acted upon only when exactly one is present
    pub sort: Vec<SortSpec>,
    /// Coarse backpressure against duplicate scroll-triggered fetches
    pub loading: bool,
    /// Banner text for the last failed fetch, cleared on success or dismiss
    pub error: Option<String>,
    /// Monotonic fetch sequence; only the latest-issued fetch applies
    pub fetch_seq: u64,
}

/// Type alias for the store
pub type GridStore = Store<GridState>;

/// Get the grid store from context
pub fn use_grid_store() -> GridStore {
    expect_context::<GridStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Merge a fetched page into the accumulated rows
pub fn store_merge_rows(store: &GridStore, incoming: Vec<ProfileRow>, mode: MergeMode) {
    state::merge_rows(&mut store.rows().write(), incoming, mode);
}

/// Apply a mutation to the row with the given id, if present
pub fn store_with_row(store: &GridStore, id: &str, apply: impl FnOnce(&mut ProfileRow)) {
    if let Some(row) = store.rows().write().iter_mut().find(|row| row.id == id) {
        apply(row);
    }
}

/// Issue a new fetch sequence number
pub fn store_next_fetch_seq(store: &GridStore) -> u64 {
    let binding = store.fetch_seq();
    let mut seq = binding.write();
    *seq += 1;
    *seq
}
