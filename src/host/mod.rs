// Host integration module
//
// The editor host (buffer, status line, save hook) is an external
// collaborator reached through the EditorHost trait; this module owns the
// apply/report step and the save-hook predicate.

use crate::models::FixerConfig;
use crate::services::{FixError, FixOutcome};

/// Surface the editor host exposes to the pipeline.
///
/// `replace_content` must swap the entire buffer in one atomic edit (a
/// single undoable unit); `status_message` shows a transient, non-blocking
/// message and mutates nothing.
pub trait EditorHost {
    fn replace_content(&mut self, text: &str);
    fn status_message(&mut self, message: &str);
}

/// Apply a finished pipeline run to the host.
///
/// Exactly one effect per run: a fixed buffer is replaced, an error is
/// reported on the status line, an identical result clears the status line,
/// and a clean no-op stays silent. Never both replaces and reports.
pub fn deliver(host: &mut dyn EditorHost, result: Result<FixOutcome, FixError>) {
    match result {
        Ok(FixOutcome::Fixed { fixed, .. }) => host.replace_content(&fixed),
        Ok(FixOutcome::Identical) => host.status_message(""),
        Ok(FixOutcome::NoChangesNeeded) => {
            tracing::info!("All good, nothing to fix");
        }
        Err(err) => {
            tracing::warn!("Pipeline stopped: {err}");
            host.status_message(&err.to_string());
        }
    }
}

/// Whether the before-save hook should run the pipeline for this file.
///
/// The extension check is case-sensitive and dotfiles never qualify.
pub fn wants_fix_on_save(file_name: &str, config: &FixerConfig) -> bool {
    config.fix_on_save && file_name.ends_with(".php") && !file_name.starts_with('.')
}
