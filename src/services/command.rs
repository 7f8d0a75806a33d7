use crate::models::{FixerConfig, Platform};
use camino::Utf8PathBuf;

/// Which of the two external tools the argument vector targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// `php -l`: report syntax errors, never modify
    Lint,

    /// phpcbf: rewrite the buffer to match the standard
    Fix,
}

/// Build the argument vector for one tool invocation.
///
/// Pure function of the configuration snapshot and the open project folders;
/// it never fails and falls back to defaults where configuration is absent.
/// The vector is passed to the process runner verbatim, with no shell
/// interpretation, so file content can never inject arguments.
///
/// Layout:
/// - interpreter first (default `php` on Windows, where the script cannot
///   be executed directly)
/// - the phpcbf path in fix mode
/// - `--standard=<resolved>` whenever a standard is configured, even if
///   per-folder resolution came up empty; the `${folder}/phpcs.xml`
///   placeholder otherwise (expanded by the tool, not here)
/// - `-` (read from stdin) in fix mode, `-l` in lint mode
/// - any additional arguments, in configured order
pub fn build_args(
    mode: ToolMode,
    config: &FixerConfig,
    working_folders: &[Utf8PathBuf],
) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(interpreter) = &config.interpreter_path {
        args.push(interpreter.clone());
    } else if config.platform == Platform::Windows {
        args.push("php".to_string());
    }

    if mode == ToolMode::Fix {
        args.push(config.fixer_path.clone());
    }

    match mode {
        ToolMode::Fix => {
            match &config.standard {
                Some(standard) => {
                    args.push(format!("--standard={}", standard.resolve(working_folders)));
                }
                None => args.push("--standard=${folder}/phpcs.xml".to_string()),
            }
            args.push("-".to_string());
        }
        ToolMode::Lint => args.push("-l".to_string()),
    }

    args.extend(config.additional_args.iter().cloned());

    args
}
