use crate::services::pipeline::FixError;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Captured result of one external tool invocation.
///
/// Produced once per run and immutable afterwards. Streams are kept as raw
/// bytes; decoding is the consumer's decision because only the fixed-content
/// path requires strict UTF-8.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, or -1 when the process was killed by a signal
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Strict UTF-8 view of stdout, for content that will be diffed or
    /// written back into the buffer.
    pub fn stdout_text(&self) -> Result<String, FixError> {
        String::from_utf8(self.stdout.clone()).map_err(|_| FixError::Encoding)
    }

    /// Best-effort view of stdout, for error messages.
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Run one external tool, feeding it `input` on stdin.
///
/// The argument vector is executed directly, with no shell involved. Stdin
/// is written from its own task and then closed, so a tool that fills its
/// output pipe while we are still writing cannot deadlock the run. The
/// child is killed if the returned future is dropped, which is how a
/// host-initiated cancel terminates an in-flight run.
pub async fn run(args: &[String], input: &[u8]) -> Result<ProcessOutput, FixError> {
    let (program, rest) = args.split_first().ok_or_else(|| FixError::Launch {
        tool: "(empty command)".to_string(),
        source: std::io::Error::new(ErrorKind::NotFound, "no executable in argument vector"),
    })?;

    tracing::debug!(program, args = ?rest, "spawning tool");

    let mut child = Command::new(program)
        .args(rest)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| FixError::Launch {
            tool: program.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        let buffer = input.to_vec();
        tokio::spawn(async move {
            // A tool that exits without reading closes the pipe under us;
            // its exit code is the interesting part, not the EPIPE.
            if let Err(err) = stdin.write_all(&buffer).await {
                if err.kind() != ErrorKind::BrokenPipe {
                    tracing::warn!("Failed to write tool stdin: {err}");
                }
            }
        });
    }

    let output = child.wait_with_output().await?;
    let exit_code = output.status.code().unwrap_or(-1);

    tracing::debug!(
        exit_code,
        stdout_len = output.stdout.len(),
        stderr_len = output.stderr.len(),
        "tool finished"
    );

    Ok(ProcessOutput {
        exit_code,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
