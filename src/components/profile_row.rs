//! Profile Row
//!
//! One grid row. Editable cells branch on the row's edit flag; edits
//! mutate the row in the store immediately on input.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{DownloadStatusBadge, QrStatusBadge};
use crate::logging;
use crate::store::{store_with_row, use_grid_store, GridStateStoreFields};

/// Location options offered while editing
const LOCATION_OPTIONS: &[&str] = &["At Stand", "At Entrance Foyer", "Product Feature Zone"];

/// Download status options offered while editing
const DOWNLOAD_STATUS_OPTIONS: &[&str] = &["Downloaded", "Not Downloaded"];

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}

fn select_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
    select.value()
}

/// One row of the profile grid, looked up in the store by id so in-place
/// edits re-render the affected cells without remounting the row.
#[component]
pub fn ProfileRowView(id: String) -> impl IntoView {
    let store = use_grid_store();

    let row = {
        let id = id.clone();
        Memo::new(move |_| {
            store
                .rows()
                .get()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .unwrap_or_default()
        })
    };
    let editing = Memo::new(move |_| row.get().is_edit_mode);

    let location_cell = {
        let id = id.clone();
        move || {
            if editing.get() {
                let change_id = id.clone();
                view! {
                    <select
                        class="cell-select"
                        on:change=move |ev| {
                            let value = select_value(&ev);
                            store_with_row(&store, &change_id, |row| row.location = value);
                        }
                    >
                        {LOCATION_OPTIONS.iter().map(|&option| view! {
                            <option value=option selected=move || row.get().location == option>
                                {option}
                            </option>
                        }).collect_view()}
                    </select>
                }
                .into_any()
            } else {
                view! { <span>{move || row.get().location}</span> }.into_any()
            }
        }
    };

    let linked_cell = {
        let id = id.clone();
        move || {
            if editing.get() {
                let text_id = id.clone();
                let url_id = id.clone();
                view! {
                    <div class="linked-edit">
                        <input
                            type="text"
                            placeholder="Content Text"
                            prop:value=move || row.get().linked_content.text
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                store_with_row(&store, &text_id, |row| row.linked_content.text = value);
                            }
                        />
                        <input
                            type="text"
                            placeholder="Content URL"
                            prop:value=move || row.get().linked_content.url
                            on:input=move |ev| {
                                let value = input_value(&ev);
                                store_with_row(&store, &url_id, |row| row.linked_content.url = value);
                            }
                        />
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <a
                        href=move || row.get().linked_content.url
                        target="_blank"
                        rel="noopener"
                    >
                        {move || row.get().linked_content.text}
                    </a>
                }
                .into_any()
            }
        }
    };

    let qr_cell = move || view! { <QrStatusBadge status=row.get().qr_status/> };

    let download_cell = {
        let id = id.clone();
        move || {
            if editing.get() {
                let change_id = id.clone();
                view! {
                    <select
                        class="cell-select"
                        on:change=move |ev| {
                            let value = select_value(&ev);
                            store_with_row(&store, &change_id, |row| {
                                row.download_status.status = value;
                            });
                        }
                    >
                        {DOWNLOAD_STATUS_OPTIONS.iter().map(|&option| view! {
                            <option
                                value=option
                                selected=move || row.get().download_status.status == option
                            >
                                {option}
                            </option>
                        }).collect_view()}
                    </select>
                }
                .into_any()
            } else {
                view! {
                    <span>
                        {move || view! { <DownloadStatusBadge status=row.get().download_status/> }}
                    </span>
                }
                .into_any()
            }
        }
    };

    let actions_cell = {
        let id = id.clone();
        move || {
            let id = id.clone();
            if editing.get() {
                let save_id = id.clone();
                let cancel_id = id;
                view! {
                    <div class="row-actions">
                        <button
                            class="icon-btn"
                            title="Save"
                            on:click=move |_| {
                                store_with_row(&store, &save_id, |row| row.save_edit());
                                logging::debug(&format!(
                                    "[Row] saved {} locally, write-back not implemented",
                                    save_id
                                ));
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="icon-btn"
                            title="Cancel"
                            on:click=move |_| {
                                store_with_row(&store, &cancel_id, |row| row.cancel_edit());
                            }
                        >
                            "✕"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                let edit_id = id.clone();
                let duplicate_id = id.clone();
                let download_id = id;
                view! {
                    <div class="row-actions">
                        <button
                            class="icon-btn"
                            title="Edit"
                            on:click=move |_| {
                                store_with_row(&store, &edit_id, |row| row.begin_edit());
                            }
                        >
                            "✎"
                        </button>
                        <button
                            class="icon-btn"
                            title="Duplicate"
                            on:click=move |_| {
                                // Duplicate logic
                                logging::debug(&format!(
                                    "[Row] duplicate {} not implemented",
                                    duplicate_id
                                ));
                            }
                        >
                            "⧉"
                        </button>
                        <button
                            class="icon-btn"
                            title="Download"
                            on:click=move |_| {
                                // Download logic
                                logging::debug(&format!(
                                    "[Row] download {} not implemented",
                                    download_id
                                ));
                            }
                        >
                            "⬇"
                        </button>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <tr class="profile-row" class:editing=move || editing.get()>
            <td>{move || row.get().qr_display_name}</td>
            <td>{move || row.get().short_code}</td>
            <td>{move || row.get().stand_no}</td>
            <td>{location_cell}</td>
            <td>{linked_cell}</td>
            <td>{qr_cell}</td>
            <td>{download_cell}</td>
            <td>{move || row.get().format}</td>
            <td>{actions_cell}</td>
        </tr>
    }
}
