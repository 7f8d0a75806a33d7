//! phpfix - CLI host for the fix pipeline.
//!
//! Runs the same lint → fix → diff pass an editor host would trigger on
//! save, against a file on disk: the file content becomes the buffer, the
//! unified diff goes to stdout, and the fixed content is written back in
//! place (or only reported with `--check`).

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use phpfix::{APP_NAME, ConfigManager, EditorHost, FixOutcome, FixPipeline, FixRequest, VERSION};
use std::fs;

#[derive(Parser)]
#[command(name = "phpfix", version, about = "Fix a PHP file with phpcbf and show the diff")]
struct Cli {
    /// PHP file to fix
    file: Utf8PathBuf,

    /// Global configuration file
    #[arg(long, default_value = "phpfix.yaml")]
    config: Utf8PathBuf,

    /// Print the diff but leave the file untouched; exits 1 if fixes exist
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Host backed by the file itself: the "buffer" is the file content and the
/// status line is stderr.
struct CliHost {
    path: Utf8PathBuf,
    check: bool,
    replaced: bool,
}

impl EditorHost for CliHost {
    fn replace_content(&mut self, text: &str) {
        self.replaced = true;
        if self.check {
            return;
        }
        if let Err(err) = fs::write(&self.path, text) {
            tracing::error!("Failed to write {}: {err}", self.path);
            eprintln!("Failed to write {}: {err}", self.path);
        } else {
            tracing::info!("Fixed {}", self.path);
        }
    }

    fn status_message(&mut self, message: &str) {
        if !message.is_empty() {
            eprintln!("{message}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    phpfix::logging::setup_console_logging(cli.debug)?;
    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let working_folders: Vec<Utf8PathBuf> = cli
        .file
        .parent()
        .map(|parent| vec![parent.to_path_buf()])
        .unwrap_or_default();

    let config = ConfigManager::new(&cli.config)
        .load_for_project(&working_folders)
        .context("Failed to load configuration")?;

    let content = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file))?;

    let request = FixRequest {
        content,
        file_path: Some(cli.file.clone()),
        working_folders,
    };

    // The pipeline is async so an editor host never blocks its UI thread;
    // the CLI just waits on it.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let pipeline = FixPipeline::new();
    let result = runtime.block_on(pipeline.run(&config, &request));

    if let Ok(FixOutcome::Fixed { diff, .. }) = &result {
        println!("{diff}");
    }

    let failed = result.is_err();
    let mut host = CliHost {
        path: cli.file,
        check: cli.check,
        replaced: false,
    };
    phpfix::deliver(&mut host, result);

    if failed || (cli.check && host.replaced) {
        std::process::exit(1);
    }

    Ok(())
}
