// inavcli - command-line client for the INAV transpiler service
// Library exports

pub mod cli;
pub mod client; // HTTP client for the transpiler service
pub mod errors;
