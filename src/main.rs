//! El Tangerino Frontend Entry Point

mod models;
mod locale;
mod route;
mod expansion;
mod content;
mod error;
mod config;
mod context;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
