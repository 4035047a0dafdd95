//! Gündem page interactions, compiled to WebAssembly and loaded by the
//! static news pages.

mod behaviors;
mod config;
mod coordinator;
mod dom;
mod i18n;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    if let Err(err) = coordinator::start() {
        log::error!("page interactions not installed: {err:#}");
    }
}
