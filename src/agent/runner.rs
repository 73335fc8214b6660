use super::driver::AgentDriver;
use super::envelope::RunResult;
use super::request::RunRequest;
use crate::config::Config;
use crate::error::BurrowError;
use crate::ipc::FileContextStore;

/// One request in, one [`RunResult`] out.
#[derive(Debug, Clone)]
pub struct AgentRunner {
    context: FileContextStore,
    driver: AgentDriver,
}

impl AgentRunner {
    pub fn new(context: FileContextStore, driver: AgentDriver) -> Self {
        Self { context, driver }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            FileContextStore::new(config.ipc.context_file()),
            AgentDriver::new(&config.agent),
        )
    }

    /// Publish the request's identity, drive the agent, and map the outcome.
    ///
    /// Errors are folded into the result; callers only need `is_success`.
    pub async fn run(&self, request: &RunRequest) -> RunResult {
        match self.try_run(request).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(group = %request.group_folder, "agent run failed: {error}");
                RunResult::failure(run_error_text(&error))
            }
        }
    }

    async fn try_run(&self, request: &RunRequest) -> Result<RunResult, BurrowError> {
        self.context.write(&request.context())?;
        tracing::info!(
            group = %request.group_folder,
            is_main = request.is_main,
            scheduled = request.is_scheduled_task,
            "run started"
        );

        let output = self
            .driver
            .run(&request.effective_prompt(), request.resume_session())
            .await?;

        let session_id = output
            .session_id
            .or_else(|| request.resume_session().map(str::to_string));
        Ok(RunResult::success(output.text, session_id))
    }
}

/// Envelope text for a failed run, without the subsystem prefix.
fn run_error_text(error: &BurrowError) -> String {
    match error {
        BurrowError::Input(inner) => inner.to_string(),
        BurrowError::Agent(inner) => inner.to_string(),
        BurrowError::Queue(inner) => inner.to_string(),
        BurrowError::Context(inner) => inner.to_string(),
        BurrowError::Config(inner) => inner.to_string(),
        BurrowError::Other(inner) => format!("{inner:#}"),
    }
}
