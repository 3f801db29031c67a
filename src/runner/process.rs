// Sandboxed process execution

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::config::RunnerConfig;
use super::error::{Result, RunnerError};
use super::types::{Language, RunOutcome, RunRequest};

/// Executes snippets in a subprocess with a hard wall-clock timeout
#[derive(Debug, Clone)]
pub struct SandboxRunner {
    config: RunnerConfig,
}

impl SandboxRunner {
    pub fn new(config: RunnerConfig) -> Self {
        debug!(
            min_timeout_ms = config.min_timeout_ms,
            max_output_bytes = config.max_output_bytes,
            "initializing runner"
        );
        Self { config }
    }

    /// Run one snippet to completion.
    ///
    /// A non-zero exit code is reported in the outcome, not as an error.
    /// On timeout the child is killed and reaped before returning.
    pub async fn run(&self, req: RunRequest) -> Result<RunOutcome> {
        let language = Language::parse(&req.language)?;
        let timeout_ms = req.timeout_ms.max(self.config.min_timeout_ms);
        let start = Instant::now();

        let (program, args) = language.command_template();
        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(&req.code)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(language = language.tag(), timeout_ms, "spawning interpreter");

        let mut child = cmd
            .spawn()
            .map_err(|e| RunnerError::SpawnFailed(language.tag(), e.to_string()))?;

        // Start draining both pipes before touching stdin, so a chatty
        // child cannot deadlock against a full pipe buffer.
        let stdout_task = drain_pipe(child.stdout.take(), self.config.max_output_bytes)?;
        let stderr_task = drain_pipe(child.stderr.take(), self.config.max_output_bytes)?;

        if let Some(mut sink) = child.stdin.take() {
            // A child that exits without reading stdin closes the pipe;
            // that is not a failure of the run.
            let _ = sink.write_all(req.stdin.as_bytes()).await;
            let _ = sink.shutdown().await;
        }

        let status = match timeout(Duration::from_millis(timeout_ms), child.wait()).await {
            Ok(status) => status?,
            Err(_) => {
                reap(&mut child).await;
                warn!(
                    language = language.tag(),
                    timeout_ms, "snippet killed after timeout"
                );
                return Err(RunnerError::Timeout(timeout_ms));
            }
        };

        let stdout = collect(stdout_task).await;
        let stderr = collect(stderr_task).await;
        let exit_code = status.code().unwrap_or(-1);

        info!(
            language = language.tag(),
            exit_code,
            duration_ms = start.elapsed().as_millis() as u64,
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "snippet executed"
        );

        Ok(RunOutcome {
            stdout,
            stderr,
            exit_code,
        })
    }
}

/// Spawn a reader task that drains a child pipe up to `cap` bytes.
fn drain_pipe<R>(pipe: Option<R>, cap: usize) -> Result<JoinHandle<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let pipe =
        pipe.ok_or_else(|| RunnerError::OutputCaptureFailed("pipe not captured".to_string()))?;
    Ok(tokio::spawn(async move {
        let mut buf = Vec::new();
        let mut limited = pipe.take(cap as u64);
        let _ = limited.read_to_end(&mut buf).await;
        buf
    }))
}

/// Await a reader task and decode its bytes leniently.
async fn collect(task: JoinHandle<Vec<u8>>) -> String {
    let bytes = task.await.unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Kill and reap a timed-out child so no zombie remains.
async fn reap(child: &mut Child) {
    if let Err(e) = child.kill().await {
        warn!(error = %e, "failed to kill timed-out child");
    }
    let _ = child.wait().await;
}
