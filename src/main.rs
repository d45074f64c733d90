//! Recipe Browser Frontend Entry Point

mod animation;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod sequence;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    animation::init();
    mount_to_body(App);
}
