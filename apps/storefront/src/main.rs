//! # Grocer Storefront Entry Point
//!
//! Thin binary entry: the startup sequence and the REPL live in
//! `grocer_storefront::run` so tests can drive the same code paths.

fn main() {
    if let Err(err) = grocer_storefront::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
