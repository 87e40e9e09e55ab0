//! Binary entry point for `cargo-setver`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = cargo_setver::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
