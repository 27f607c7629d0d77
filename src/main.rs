//! PolyUI - a cross-platform UI toolkit simulation
//!
//! Demonstrates the Abstract Factory pattern: three platform widget
//! families built through a shared factory interface, rendered as plain
//! text on stdout.

#[macro_use]
mod log;

mod config;
mod demo;
mod errors;
mod platform;
mod widget;

use std::io;

use config::DemoConfig;

fn main() {
    log::init();
    log!("main() starting");

    let config = DemoConfig::load_or_default();
    log!("Demo platforms: {:?}", config.platforms);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = demo::run(&config, &mut out) {
        log!("FATAL: demo run aborted: {}", e);
        eprintln!("polyui: {}", e);
        std::process::exit(1);
    }

    log!("PolyUI exited normally.");
}
