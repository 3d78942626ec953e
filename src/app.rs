//! QR Grid App
//!
//! Root component wiring the grid store into context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ProfileGrid;
use crate::store::GridState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(GridState::default()));

    view! {
        <div class="app-layout">
            <h1>"QR Profiles"</h1>
            <ProfileGrid/>
        </div>
    }
}
