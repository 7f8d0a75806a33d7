use crate::models::FixerConfig;
use crate::services::command::{self, ToolMode};
use crate::services::diff;
use crate::services::process::{self, ProcessOutput};
use camino::Utf8PathBuf;
use thiserror::Error;

/// The fixed text must be at least this fraction of the original length;
/// anything shorter is treated as truncated tool output. Not configurable.
const PLAUSIBLE_LENGTH_RATIO: f64 = 1.2;

/// One buffer to run the pipeline on.
///
/// Built fresh per invocation and discarded at run end; no request state is
/// shared between runs.
#[derive(Debug, Clone)]
pub struct FixRequest {
    /// Current buffer content
    pub content: String,

    /// On-disk path of the buffer, if it has one. Lets phpcbf apply
    /// path-specific rule overrides even though the source arrives on stdin.
    pub file_path: Option<Utf8PathBuf>,

    /// Open project folders, in window order; used for standard resolution
    pub working_folders: Vec<Utf8PathBuf>,
}

/// Terminal value of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum FixOutcome {
    /// The fixer exited 0: nothing to fix, buffer untouched
    NoChangesNeeded,

    /// The fixer produced output but it matches the original, or trims to
    /// empty; buffer untouched, status cleared
    Identical,

    /// The fixer changed the buffer; `fixed` replaces it wholesale
    Fixed {
        original: String,
        fixed: String,
        diff: String,
    },
}

/// Everything that can stop a pipeline run.
///
/// Display strings double as the transient status messages the host shows;
/// none of these crash the host and none are retried.
#[derive(Error, Debug)]
pub enum FixError {
    /// The tool executable could not be started at all
    #[error("Unable to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// `php -l` rejected the buffer; fixing is not attempted
    #[error("Invalid PHP")]
    InvalidSource,

    /// The fixer exited above 2; its stdout is the message
    #[error("Error {0}")]
    Tool(String),

    /// Fixed text implausibly shorter than the original, reported
    /// generically so garbled tool output never reaches the buffer
    #[error("Error")]
    CorruptedOutput,

    /// Tool output was not valid UTF-8, so it cannot be diffed or applied
    #[error("Diff only works with UTF-8 files")]
    Encoding,

    /// I/O failure while talking to an already-launched tool
    #[error("Process error: {0}")]
    Process(#[from] std::io::Error),
}

/// Orchestrates one lint → fix → diff pass over a buffer.
///
/// Stages are strictly ordered with no branching back: lint must pass before
/// the fixer runs, the fixer's output is sanity-checked before it is diffed,
/// and only a non-empty diff reaches the host. The pipeline itself never
/// touches the buffer; it hands a [`FixOutcome`] to the caller.
///
/// Concurrent runs on the same buffer are neither queued nor deduplicated;
/// if the host allows them to race, the last apply wins.
#[derive(Debug, Default)]
pub struct FixPipeline;

impl FixPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline on one buffer.
    ///
    /// # Exit code conventions
    /// - lint: 0 = clean source, anything else = syntax error
    /// - fix: 0 = nothing to fix, 1 or 2 = fixed content on stdout,
    ///   above 2 (or signal death) = tool error with the message on stdout
    pub async fn run(
        &self,
        config: &FixerConfig,
        request: &FixRequest,
    ) -> Result<FixOutcome, FixError> {
        let lint_args = command::build_args(ToolMode::Lint, config, &request.working_folders);
        tracing::debug!(args = ?lint_args, "linting buffer");

        let lint = process::run(&lint_args, request.content.as_bytes()).await?;
        if lint.exit_code != 0 {
            tracing::info!(exit_code = lint.exit_code, "lint rejected the buffer");
            return Err(FixError::InvalidSource);
        }

        let fix_args = command::build_args(ToolMode::Fix, config, &request.working_folders);
        let fixer_input = match &request.file_path {
            Some(path) => format!("phpcs_input_file: {path}\n{}", request.content),
            None => request.content.clone(),
        };
        tracing::debug!(args = ?fix_args, "running fixer");

        let fix = process::run(&fix_args, fixer_input.as_bytes()).await?;
        match fix.exit_code {
            0 => {
                tracing::debug!("fixer reports nothing to fix");
                Ok(FixOutcome::NoChangesNeeded)
            }
            1 | 2 => self.finish(&request.content, &fix),
            _ => {
                tracing::warn!(exit_code = fix.exit_code, "fixer failed");
                Err(FixError::Tool(fix.stdout_lossy()))
            }
        }
    }

    /// Validate the fixer's output and turn it into an outcome.
    fn finish(&self, original: &str, output: &ProcessOutput) -> Result<FixOutcome, FixError> {
        let fixed = output.stdout_text()?;

        // A result far shorter than the input means the tool died partway
        // through writing; never let that reach the buffer.
        if (fixed.len() as f64) * PLAUSIBLE_LENGTH_RATIO < original.len() as f64 {
            tracing::warn!(
                original_len = original.len(),
                fixed_len = fixed.len(),
                "fixer output implausibly short"
            );
            return Err(FixError::CorruptedOutput);
        }

        match diff::unified_diff(original, &fixed) {
            Some(diff) => Ok(FixOutcome::Fixed {
                original: original.to_string(),
                fixed,
                diff,
            }),
            None => Ok(FixOutcome::Identical),
        }
    }
}
