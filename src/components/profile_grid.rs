//! Profile Grid
//!
//! Scrollable grid of QR profiles: sortable headers, infinite-scroll
//! pagination, unified fetch error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::columns::{sort_symbol, COLUMNS};
use crate::components::ProfileRowView;
use crate::logging;
use crate::models::ProfileRow;
use crate::state::{cycle_sort, is_at_bottom, plan_fetch, response_is_current, FetchPlan};
use crate::store::{
    store_merge_rows, store_next_fetch_seq, use_grid_store, GridStateStoreFields,
};

#[component]
pub fn ProfileGrid() -> impl IntoView {
    let store = use_grid_store();

    // One fetch effect for both paths, keyed on the page cursor and sort
    // state. Two or more sort specs produce no plan and no request.
    Effect::new(move |_| {
        let page = store.page().get();
        let sort = store.sort().get();
        let Some((plan, mode)) = plan_fetch(page, &sort) else {
            return;
        };

        let seq = store_next_fetch_seq(&store);
        store.loading().set(true);

        spawn_local(async move {
            let result = match &plan {
                FetchPlan::Unsorted { page } => api::fetch_profiles(*page).await,
                FetchPlan::Sorted { page, spec } => {
                    api::fetch_sorted_profiles(*page, spec).await
                }
            };

            // A newer fetch was issued while this one was in flight
            if !response_is_current(seq, store.fetch_seq().get_untracked()) {
                logging::debug(&format!("[Grid] dropping stale response for page {}", page));
                return;
            }

            match result {
                Ok(rows) => {
                    logging::debug(&format!("[Grid] page {} loaded {} rows", page, rows.len()));
                    store_merge_rows(&store, rows, mode);
                    store.error().set(None);
                }
                Err(err) => {
                    logging::debug(&format!("[Grid] fetch failed: {}", err));
                    store.error().set(Some(err));
                }
            }
            store.loading().set(false);
        });
    });

    let on_scroll = move |ev: web_sys::Event| {
        if store.loading().get_untracked() {
            return;
        }
        let target = ev.target().unwrap();
        let viewport = target.dyn_ref::<web_sys::Element>().unwrap();
        if !is_at_bottom(
            viewport.scroll_top(),
            viewport.client_height(),
            viewport.scroll_height(),
        ) {
            return;
        }
        store.page().update(|page| *page += 1);
    };

    view! {
        <div class="grid-panel">
            <Show when=move || store.error().get().is_some()>
                <div class="error-banner">
                    <span>{move || store.error().get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| store.error().set(None)>
                        "Dismiss"
                    </button>
                </div>
            </Show>

            <div class="grid-viewport" on:scroll=on_scroll>
                <table class="profile-grid">
                    <thead>
                        <tr>
                            {COLUMNS.iter().map(|col| {
                                let key = col.key;
                                if col.sortable {
                                    view! {
                                        <th
                                            class="sortable"
                                            on:click=move |_| {
                                                store.sort().update(|sort| cycle_sort(sort, key));
                                            }
                                        >
                                            {col.name}
                                            <span class="sort-indicator">
                                                {move || sort_symbol(&store.sort().get(), key)}
                                            </span>
                                        </th>
                                    }
                                    .into_any()
                                } else {
                                    view! { <th>{col.name}</th> }.into_any()
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.rows().get()
                            key=|row| row.id.clone()
                            children=move |row: ProfileRow| {
                                view! { <ProfileRowView id=row.id/> }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading more rows..."</div>
            </Show>
        </div>
    }
}
