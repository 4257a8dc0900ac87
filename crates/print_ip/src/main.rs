//! Dotted value printer
//!
//! Prints a fixed set of example values in dotted notation, one per line.
//! Takes no arguments and always exits with status 0.

mod demo;
mod tracing_setup;

use std::io;

fn main() {
    tracing_setup::init_tracing();

    let stdout = io::stdout().lock();
    if let Err(err) = demo::run(stdout) {
        tracing::error!(%err, "failed to print examples");
    }
}
