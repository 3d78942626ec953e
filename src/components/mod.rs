//! UI Components
//!
//! Leptos components for the profile grid view.

mod profile_grid;
mod profile_row;
mod status_badge;

pub use profile_grid::ProfileGrid;
pub use profile_row::ProfileRowView;
pub use status_badge::{DownloadStatusBadge, QrStatusBadge};
