mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;

pub use loader::CONFIG_PATH_ENV;
pub use types::{AgentConfig, Config, IpcConfig};
