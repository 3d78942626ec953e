#![allow(warnings)]
//! QR Grid Frontend Entry Point

mod models;
mod state;
mod columns;
mod config;
mod logging;
mod api;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
