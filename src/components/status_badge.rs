//! Status Badges
//!
//! Read-only display for the QR status and download status cells.

use leptos::prelude::*;

use crate::models::{DownloadStatus, QrStatus};

/// QR generation status with optional timestamp; the note, when present,
/// is exposed as a tooltip.
#[component]
pub fn QrStatusBadge(status: QrStatus) -> impl IntoView {
    let note = status.note.unwrap_or_default();
    view! {
        <span class="status-badge" title=note>
            <span class="status-text">{status.status}</span>
            {status.time.map(|time| view! { <span class="status-time">{time}</span> })}
        </span>
    }
}

/// Download status with optional timestamp.
#[component]
pub fn DownloadStatusBadge(status: DownloadStatus) -> impl IntoView {
    view! {
        <span class="status-badge">
            <span class="status-text">{status.status}</span>
            {status.time.map(|time| view! { <span class="status-time">{time}</span> })}
        </span>
    }
}
