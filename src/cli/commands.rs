// Subcommand flows
//
// Each flow echoes the operator's input, gates on the health probe,
// issues the transform request and renders the response: the full body
// as indented JSON under a titled banner, then the primary payload when
// the service reported success and produced one.

use crate::client::{TransformResponse, TranspilerClient};
use crate::errors::CliError;

const BANNER_WIDTH: usize = 50;

/// Transpile flow: tokens are joined with spaces into one snippet.
pub async fn run_transpile(client: &TranspilerClient, tokens: &[String]) -> Result<(), CliError> {
    let code = tokens.join(" ");
    println!("输入JavaScript代码:");
    println!("{}", code);

    if !client.health_check().await {
        return Err(CliError::ServerUnreachable);
    }

    let result = client.transpile(&code).await?;
    print_result(&result, "转译结果 (JS → INAV)")?;

    if let Some(commands) = result.generated_commands() {
        println!("\n生成的INAV命令:");
        println!("{}", render_command_list(commands));
    }

    Ok(())
}

/// Decompile flow: each token is one opaque command string.
pub async fn run_decompile(client: &TranspilerClient, commands: &[String]) -> Result<(), CliError> {
    println!("输入INAV命令:");
    println!("{}", render_command_list(commands));

    if !client.health_check().await {
        return Err(CliError::ServerUnreachable);
    }

    let result = client.decompile(commands).await?;
    print_result(&result, "反编译结果 (INAV → JS)")?;

    if let Some(code) = result.generated_code() {
        println!("\n生成的JavaScript:");
        println!("{}", code);
    }

    Ok(())
}

/// Print the full response as indented JSON under a titled banner.
fn print_result(result: &TransformResponse, title: &str) -> Result<(), CliError> {
    let body =
        serde_json::to_string_pretty(result).map_err(|e| CliError::Transform(e.into()))?;

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{}", body);

    Ok(())
}

/// Render commands as 1-based enumerated lines.
fn render_command_list(commands: &[String]) -> String {
    commands
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("  {}. {}", i + 1, cmd))
        .collect::<Vec<_>>()
        .join("\n")
}
