use super::support::{RECORDING_AGENT, Sandbox};
use burrow::agent::{RunStatus, scan_envelope};
use burrow::ipc::{DirectoryQueue, DropQueue};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn burrow(sandbox: &Sandbox, args: &[&str], stdin: &str) -> Output {
    burrow_with_config(sandbox, args, stdin, None)
}

fn burrow_with_config(
    sandbox: &Sandbox,
    args: &[&str],
    stdin: &str,
    config_path: Option<&std::path::Path>,
) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_burrow"));
    match config_path {
        Some(path) => command.env("BURROW_CONFIG", path),
        None => command.env_remove("BURROW_CONFIG"),
    };
    let mut child = command
        .args(args)
        .env("BURROW_IPC_ROOT", sandbox.ipc_root())
        .env("BURROW_AGENT_BINARY", "/bin/sh")
        .env("BURROW_AGENT_WORKSPACE", sandbox.workspace())
        .env("BURROW_AGENT_HOME", sandbox.home())
        .env("BURROW_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn run_prints_only_the_result_block_on_stdout() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let output = burrow(
        &sandbox,
        &["run"],
        r#"{"prompt":"hi","groupFolder":"main","chatJid":"main@g.us","isMain":true}"#,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    let result = scan_envelope(&stdout).unwrap();
    assert_eq!(result.status, RunStatus::Success);
    assert_eq!(result.result.as_deref(), Some("Helloplain line world"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("agent booting"));
}

#[test]
fn run_with_garbage_input_exits_nonzero_after_block() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let output = burrow(&sandbox, &["run"], "this is not json");

    assert_eq!(output.status.code(), Some(1));
    let result = scan_envelope(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(result.status, RunStatus::Error);
    assert!(result.result.is_none());
    assert!(result.error.unwrap().starts_with("Failed to parse input: "));
    assert!(!sandbox.workspace().join("args.txt").exists());
}

#[test]
fn tool_command_queues_through_the_ipc_root() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    std::fs::write(
        sandbox.ipc_root().join("context.json"),
        r#"{"chatJid":"family@g.us","groupFolder":"family","isMain":false}"#,
    )
    .unwrap();

    let output = burrow(
        &sandbox,
        &["tool", "send_message", r#"{"text":"on my way"}"#],
        "",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Message queued for delivery ("));

    let drained = DirectoryQueue::new(sandbox.ipc_root().join("messages"))
        .drain()
        .unwrap();
    assert_eq!(drained.len(), 1);
}

#[test]
fn tool_command_with_invalid_json_still_replies() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let output = burrow(&sandbox, &["tool", "send_message", "{\"text\": "], "");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("Tool arguments for 'send_message' are not valid JSON: "),
        "{stdout}"
    );
    assert!(
        DirectoryQueue::new(sandbox.ipc_root().join("messages"))
            .drain()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn tool_command_with_broken_config_still_replies() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let missing = sandbox.tmp.path().join("no-such-config.toml");
    let output = burrow_with_config(
        &sandbox,
        &["tool", "list_tasks"],
        "",
        Some(missing.as_path()),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Failed to read config file: "), "{stdout}");
}

#[test]
fn tools_command_lists_specs() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let output = burrow(&sandbox, &["tools"], "");

    assert!(output.status.success());
    let specs: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(specs.len(), 7);
    assert_eq!(specs[0]["name"], "cancel_task");
}
