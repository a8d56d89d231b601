// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Tracing setup shared by the whitelist binaries and tests.
//!
//! Logs go to stderr, stdout or a rotating file in a directory, as plain lines or JSON.
//! The default targets can be overridden through the [`WHITELIST_LOG`] env var.

mod error;
mod file;
mod filter;
mod format;

use crate::error::Result;
use crate::filter::{targets_from_env, WORKSPACE_CRATES};
use crate::format::LineFormat;
use std::path::PathBuf;
use tracing::info;
use tracing_core::dispatcher::DefaultGuard;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

pub use error::Error;
pub use filter::WHITELIST_LOG;
pub use tracing_appender::non_blocking::WorkerGuard;
pub use tracing_core::Level;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone)]
pub enum LogOutputDest {
    Stderr,
    Stdout,
    /// A directory, created if missing.
    Path(PathBuf),
}

impl LogOutputDest {
    /// `stderr`, `stdout`, `data-dir` for a fresh directory under the user's data dir, or a path.
    pub fn parse_from_str(val: &str) -> Result<Self> {
        match val {
            "stderr" => Ok(LogOutputDest::Stderr),
            "stdout" => Ok(LogOutputDest::Stdout),
            "data-dir" => Ok(LogOutputDest::Path(timestamped_log_dir()?)),
            path => Ok(LogOutputDest::Path(PathBuf::from(path))),
        }
    }
}

impl std::fmt::Display for LogOutputDest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LogOutputDest::Stderr => write!(f, "stderr"),
            LogOutputDest::Stdout => write!(f, "stdout"),
            LogOutputDest::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Default,
    Json,
}

impl LogFormat {
    pub fn parse_from_str(val: &str) -> Result<Self> {
        match val {
            "default" => Ok(LogFormat::Default),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::InvalidArgument(format!(
                "unknown log format {other:?}, expected \"default\" or \"json\""
            ))),
        }
    }
}

pub struct LogBuilder {
    default_logging_targets: Vec<(String, Level)>,
    output_dest: LogOutputDest,
    format: LogFormat,
}

impl LogBuilder {
    /// `default_logging_targets` apply unless `WHITELIST_LOG` is set. Logs go to stderr in
    /// the default format until told otherwise, leaving stdout to the command output.
    pub fn new(default_logging_targets: Vec<(String, Level)>) -> Self {
        Self {
            default_logging_targets,
            output_dest: LogOutputDest::Stderr,
            format: LogFormat::Default,
        }
    }

    pub fn output_dest(&mut self, output_dest: LogOutputDest) {
        self.output_dest = output_dest;
    }

    pub fn format(&mut self, format: LogFormat) {
        self.format = format;
    }

    /// Installs the global subscriber. Keep the returned guard alive until exit, dropping it
    /// flushes the log file.
    pub fn initialize(self) -> Result<Option<WorkerGuard>> {
        let targets = targets_from_env(&self.default_logging_targets)?;
        let (layer, worker_guard) = self.layer()?;

        if tracing_subscriber::registry()
            .with(layer.with_filter(targets))
            .try_init()
            .is_err()
        {
            eprintln!("A global tracing subscriber was already installed");
        }
        self.report_destination();

        Ok(worker_guard)
    }

    /// Logs everything from the workspace crates and `test_file_name` into a fresh directory
    /// under the data dir, falling back to stderr.
    ///
    /// The subscriber only applies to the current thread, until the returned guard is dropped.
    pub fn init_single_threaded_tokio_test(
        test_file_name: &str,
    ) -> (Option<WorkerGuard>, DefaultGuard) {
        let targets = Targets::new()
            .with_targets(WORKSPACE_CRATES.map(|name| (name, Level::TRACE)))
            .with_target(test_file_name, Level::TRACE);

        let (layer, worker_guard) =
            match timestamped_log_dir().and_then(|dir| file::rotating_writer(&dir)) {
                Ok((writer, guard)) => (fmt_layer(LogFormat::Default, writer), Some(guard)),
                Err(_) => (fmt_layer(LogFormat::Default, std::io::stderr), None),
            };
        let subscriber_guard = tracing_subscriber::registry()
            .with(layer.with_filter(targets))
            .set_default();

        if let Some(test_name) = std::thread::current().name() {
            info!("Running test: {test_name}");
        }
        (worker_guard, subscriber_guard)
    }

    fn layer(&self) -> Result<(BoxedLayer, Option<WorkerGuard>)> {
        match &self.output_dest {
            LogOutputDest::Stderr => Ok((fmt_layer(self.format, std::io::stderr), None)),
            LogOutputDest::Stdout => Ok((fmt_layer(self.format, std::io::stdout), None)),
            LogOutputDest::Path(dir) => {
                let (writer, guard) = file::rotating_writer(dir)?;
                Ok((fmt_layer(self.format, writer), Some(guard)))
            }
        }
    }

    fn report_destination(&self) {
        if let LogOutputDest::Path(dir) = &self.output_dest {
            info!("Logging to directory {}", dir.display());
        }
    }
}

fn fmt_layer<W>(format: LogFormat, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer);
    match format {
        LogFormat::Default => layer.event_format(LineFormat).boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    }
}

/// `<data_dir>/whitelist-dapp/logs/log_<timestamp>`
fn timestamped_log_dir() -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let data_dir = dirs_next::data_dir().ok_or_else(|| {
        Error::InvalidArgument("could not find the user's data directory".to_string())
    })?;
    Ok(data_dir
        .join("whitelist-dapp")
        .join("logs")
        .join(format!("log_{timestamp}")))
}
