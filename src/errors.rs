// Operator-facing errors
//
// The front end funnels every failure through this type; main prints
// its Display and exits 1. The unreachable-service variant carries the
// fixed message telling the operator how to get the service running.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The health probe failed; the service is not reachable.
    #[error("错误: 无法连接到API服务器\n请先启动服务器: npm start")]
    ServerUnreachable,

    /// A transform call or result formatting failed.
    #[error("错误: {0:#}")]
    Transform(anyhow::Error),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Transform(err)
    }
}
