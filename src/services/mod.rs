//! Services module - Pure business logic for the fix pipeline.
//!
//! Everything here is host-agnostic: no editor types, no UI, only the logic
//! that turns a buffer plus a configuration snapshot into a fix outcome.
//!
//! # Components
//!
//! - [`command`]: builds argument vectors for the two external tools
//!   (`php -l` for linting, phpcbf for fixing) from a [`crate::models::FixerConfig`]
//!   snapshot. Pure, infallible, no shell interpretation.
//!
//! - [`process`]: runs one external tool per call under tokio, feeding the
//!   buffer on stdin and capturing both output streams; a dropped run kills
//!   the child process.
//!
//! - [`pipeline`]: the orchestrator. Sequences lint before fix, interprets
//!   the tools' exit-code conventions, sanity-checks the fixer's output
//!   length, and computes the diff. Produces exactly one [`FixOutcome`] or
//!   [`FixError`] per run and never mutates the buffer itself.
//!
//! - [`diff`]: line-based unified diff between original and fixed content,
//!   labeled "Original" / "Fixed", absent when nothing changed.
//!
//! # Exit code conventions
//!
//! `php -l` exits 0 for syntactically valid source. phpcbf exits 0 when
//! there is nothing to fix, 1 or 2 when it wrote fixed content to stdout,
//! and higher when it failed with a message on stdout.

pub mod command;
pub mod diff;
pub mod pipeline;
pub mod process;

pub use command::{ToolMode, build_args};
pub use pipeline::{FixError, FixOutcome, FixPipeline, FixRequest};
pub use process::ProcessOutput;
