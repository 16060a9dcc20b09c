// HTTP client for the INAV transpiler service
//
// Provides TranspilerClient for the CLI to talk to the remote transform
// service: health probe, transpile, decompile.

mod api_client;
mod types;

pub use api_client::{ClientConfig, TranspilerClient};
pub use types::{DecompileRequest, TransformResponse, TranspileRequest};
