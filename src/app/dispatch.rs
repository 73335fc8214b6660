use crate::agent::{AgentRunner, RunRequest, RunResult, write_envelope};
use crate::cli::{Cli, Commands};
use crate::config::{Config, IpcConfig};
use crate::ipc::{DirectoryQueue, DropQueue};
use crate::runtime::RunOrchestrator;
use crate::tools::{ToolResult, request_registry};
use anyhow::Result;
use serde_json::{Value, json};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

/// Route a parsed command line. `run` reports its own failures in the result
/// block and `tool` in its reply; the other commands surface errors to `main`.
pub async fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Run => Ok(run_from_stdin().await),
        Commands::Tool { name, args } => {
            println!("{}", tool_reply(&name, &args).await);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tools => {
            let config = Config::load()?;
            let specs = request_registry(&config.ipc).specs();
            println!("{}", serde_json::to_string_pretty(&specs)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Drain { ack } => {
            let config = Config::load()?;
            let mut stdout = std::io::stdout().lock();
            let count = drain_queues(&config.ipc, ack, &mut stdout)?;
            tracing::info!(count, ack, "drained queues");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// The text the agent sees for one tool call. Bad arguments and an unusable
/// config are reported here too, so the caller always gets a reply.
pub async fn tool_reply(name: &str, raw_args: &str) -> String {
    let args: Value = match serde_json::from_str(raw_args) {
        Ok(args) => args,
        Err(error) => {
            tracing::warn!(tool = name, "unparseable tool arguments: {error}");
            return ToolResult::rejected(format!(
                "Tool arguments for '{name}' are not valid JSON: {error}"
            ))
            .into_agent_text();
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(tool = name, "config: {error:#}");
            return ToolResult::rejected(format!("{error:#}")).into_agent_text();
        }
    };

    request_registry(&config.ipc).invoke(name, args).await
}

async fn run_from_stdin() -> ExitCode {
    let mut raw = String::new();
    let result = match tokio::io::stdin().read_to_string(&mut raw).await {
        Ok(_) => run_request(&raw).await,
        Err(error) => RunResult::failure(crate::error::InputError::Read(error).to_string()),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = write_envelope(&mut stdout, &result) {
        tracing::error!("failed to write result block: {error}");
        return ExitCode::FAILURE;
    }
    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Parse, configure and execute one run. Never fails; every problem becomes
/// an error result.
pub async fn run_request(raw: &str) -> RunResult {
    let request = match RunRequest::parse(raw) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!("{error}");
            return RunResult::failure(error.to_string());
        }
    };
    tracing::info!(group = %request.group_folder, "received run request");

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("config: {error:#}");
            return RunResult::failure(format!("{error:#}"));
        }
    };

    RunOrchestrator::new(AgentRunner::from_config(&config))
        .run(&request)
        .await
}

/// Print every queued entry as one JSON line; with `ack`, remove what decoded.
pub fn drain_queues<W: Write>(ipc: &IpcConfig, ack: bool, out: &mut W) -> Result<usize> {
    let mut count = 0;
    for (queue_name, dir) in [("messages", ipc.messages_dir()), ("tasks", ipc.tasks_dir())] {
        let queue = DirectoryQueue::new(dir);
        for drained in queue.drain()? {
            let line = match &drained.entry {
                Ok(entry) => json!({"queue": queue_name, "name": drained.name, "entry": entry}),
                Err(error) => {
                    tracing::warn!(queue = queue_name, "undecodable entry {}: {error}", drained.name);
                    json!({"queue": queue_name, "name": drained.name, "error": error.to_string()})
                }
            };
            writeln!(out, "{line}")?;
            count += 1;

            if ack && drained.entry.is_ok() {
                queue.ack(&drained.name)?;
            }
        }
    }
    Ok(count)
}
