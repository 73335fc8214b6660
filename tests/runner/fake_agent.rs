use super::support::{FAILING_AGENT, RECORDING_AGENT, SESSIONLESS_AGENT, Sandbox};
use burrow::agent::{AgentDriver, AgentRunner, RunRequest, RunStatus};
use burrow::error::AgentError;
use burrow::ipc::{FileContextStore, RunContext};

fn request(json: &str) -> RunRequest {
    RunRequest::parse(json).unwrap()
}

#[tokio::test]
async fn driver_passes_args_cwd_and_home() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let driver = AgentDriver::new(&sandbox.config().agent);

    let output = driver.run("say hi", Some("ses_1")).await.unwrap();

    assert_eq!(output.text, "Helloplain line world");
    assert_eq!(output.session_id.as_deref(), Some("ses_42"));
    assert_eq!(
        sandbox.read("args.txt"),
        "run\n--session\nses_1\n--format\njson\nsay hi\n"
    );
    let cwd = std::fs::canonicalize(sandbox.read("cwd.txt").trim()).unwrap();
    assert_eq!(cwd, std::fs::canonicalize(sandbox.workspace()).unwrap());
    assert_eq!(sandbox.read("home.txt"), sandbox.home().display().to_string());
}

#[tokio::test]
async fn failure_carries_exit_code_and_bounded_tail() {
    let sandbox = Sandbox::new(FAILING_AGENT);
    let driver = AgentDriver::new(&sandbox.config().agent);

    let err = driver.run("p", None).await.unwrap_err();

    let AgentError::Subprocess {
        code, stderr_tail, ..
    } = err
    else {
        panic!("expected subprocess error");
    };
    assert_eq!(code, Some(3));
    assert_eq!(stderr_tail.chars().count(), 500);
    assert!(stderr_tail.ends_with("xxxEND"));
}

#[tokio::test]
async fn runner_publishes_context_and_reports_success() {
    let sandbox = Sandbox::new(RECORDING_AGENT);
    let runner = AgentRunner::from_config(&sandbox.config());
    let request = request(
        r#"{"prompt":"check plants","groupFolder":"garden","chatJid":"garden@g.us",
            "isMain":false,"isScheduledTask":true}"#,
    );

    let result = runner.run(&request).await;

    assert_eq!(result.status, RunStatus::Success);
    assert_eq!(result.result.as_deref(), Some("Helloplain line world"));
    assert_eq!(result.new_session_id.as_deref(), Some("ses_42"));

    let args = sandbox.read("args.txt");
    assert!(!args.contains("--session"));
    assert!(args.contains("[SCHEDULED TASK"));
    assert!(args.trim_end().ends_with("check plants"));

    let context = FileContextStore::new(sandbox.config().ipc.context_file())
        .read()
        .unwrap();
    assert_eq!(
        context,
        RunContext {
            chat_jid: "garden@g.us".into(),
            group_folder: "garden".into(),
            is_main: false,
        }
    );
}

#[tokio::test]
async fn session_falls_back_to_incoming_id() {
    let sandbox = Sandbox::new(SESSIONLESS_AGENT);
    let runner = AgentRunner::from_config(&sandbox.config());

    let result = runner
        .run(&request(
            r#"{"prompt":"p","sessionId":"ses_old","groupFolder":"g","chatJid":"g@g.us","isMain":true}"#,
        ))
        .await;

    assert_eq!(result.result.as_deref(), Some("ok"));
    assert_eq!(result.new_session_id.as_deref(), Some("ses_old"));
}

#[tokio::test]
async fn failed_run_becomes_error_result() {
    let sandbox = Sandbox::new(FAILING_AGENT);
    let runner = AgentRunner::from_config(&sandbox.config());

    let result = runner
        .run(&request(
            r#"{"prompt":"p","sessionId":"ses_old","groupFolder":"g","chatJid":"g@g.us","isMain":true}"#,
        ))
        .await;

    assert_eq!(result.status, RunStatus::Error);
    assert!(result.result.is_none());
    assert!(result.new_session_id.is_none());
    let error = result.error.unwrap();
    assert!(error.starts_with("/bin/sh exited with code 3: "), "{error}");
    assert!(error.ends_with("END"));
}
