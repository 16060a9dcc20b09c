// Command-line front end
//
// Subcommand flows driving the service client and rendering results.

mod commands;

pub use commands::{run_decompile, run_transpile};
