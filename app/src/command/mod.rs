//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type,
//! dispatched from `main` without trait objects.

use std::path::{Path, PathBuf};

use lessons_config::Config;
use tracing::info;

mod add;
mod init;
mod interactive;
mod show;
mod version;

pub use add::{AddInput, AddStrategy};
pub use init::InitStrategy;
pub use interactive::{InteractiveInput, InteractiveStrategy};
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the config from an explicit path, or from the default location
/// falling back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load_or_default, Config::load_from)
}

/// The lesson file to use: `--file` if given, else the configured path.
#[must_use]
pub fn lesson_file(config: &Config, file: Option<PathBuf>) -> PathBuf {
    let path = file.unwrap_or_else(|| config.schedule.path.clone());
    info!("Lesson file: {}", path.display());
    path
}
