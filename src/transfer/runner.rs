//! Process runner for the external migration tool.
//!
//! Spawns the tool as a child process (no shell), streams its stdout and
//! stderr line-by-line into the host's `RunConsole`, and registers the run
//! with a `RunRegistry` so the host can observe or terminate it. The launch
//! call returns as soon as the process is started; exit codes are never
//! inspected here - the tool's own output is the user's report.

use crate::error::{TransferError, TransferResult};
use crate::host::RunConsole;
use std::process::{ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// True when the tool binary can be found (on PATH, or as a direct path).
pub fn tool_available(tool: &str) -> bool {
    which::which(tool).is_ok()
}

/// Abstraction over process launching so flows can be tested with a spy.
pub trait ToolRunner {
    /// Launch `argv` (tool binary first) under `title`. Returns once the
    /// process is started and its output is being consumed.
    fn launch(&self, argv: &[String], title: &str) -> TransferResult<()>;
}

/// Handle to a launched tool process.
pub struct ProcessHandle {
    child: Child,
    forwarders: Vec<JoinHandle<()>>,
}

impl ProcessHandle {
    /// OS process id, if the process is still running.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Wait for the process to exit and for its output to drain.
    pub async fn wait(&mut self) -> std::io::Result<ExitStatus> {
        let status = self.child.wait().await?;
        for task in self.forwarders.drain(..) {
            let _ = task.await;
        }
        Ok(status)
    }

    /// Kill the process. Termination is the host's run-management job; the
    /// core never calls this on its own.
    pub async fn kill(&mut self) -> std::io::Result<()> {
        self.child.kill().await
    }
}

struct ActiveRun {
    title: String,
    handle: ProcessHandle,
}

/// Run-management facility: owns the handles of every launched run.
#[derive(Default)]
pub struct RunRegistry {
    runs: Mutex<Vec<ActiveRun>>,
}

impl RunRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, title: &str, handle: ProcessHandle) {
        let mut runs = self.runs.lock().expect("run registry poisoned");
        runs.push(ActiveRun {
            title: title.to_string(),
            handle,
        });
    }

    /// Number of runs currently registered.
    pub fn len(&self) -> usize {
        self.runs.lock().expect("run registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait for every registered run to finish, draining the registry.
    /// Used by hosts that want to block until all tools are done (the CLI);
    /// an IDE-style host would instead keep the handles alive in its UI.
    pub async fn wait_all(&self) {
        let runs = {
            let mut guard = self.runs.lock().expect("run registry poisoned");
            std::mem::take(&mut *guard)
        };
        for mut run in runs {
            match run.handle.wait().await {
                Ok(status) => info!(title = %run.title, %status, "run finished"),
                Err(e) => debug!(title = %run.title, error = %e, "run wait failed"),
            }
        }
    }

    /// Kill every registered run, draining the registry.
    pub async fn terminate_all(&self) {
        let runs = {
            let mut guard = self.runs.lock().expect("run registry poisoned");
            std::mem::take(&mut *guard)
        };
        for mut run in runs {
            let _ = run.handle.kill().await;
        }
    }
}

/// Runner that spawns the real external tool.
pub struct SqlPackageRunner {
    console: Arc<dyn RunConsole>,
    registry: Arc<RunRegistry>,
}

impl SqlPackageRunner {
    pub fn new(console: Arc<dyn RunConsole>, registry: Arc<RunRegistry>) -> Self {
        Self { console, registry }
    }
}

fn forward_lines<R>(reader: R, console: Arc<dyn RunConsole>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            console.append(&line);
            console.append("\n");
        }
    })
}

impl ToolRunner for SqlPackageRunner {
    fn launch(&self, argv: &[String], title: &str) -> TransferResult<()> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| TransferError::invalid_input("empty command line"))?;

        debug!(tool = %program, args = args.len(), title, "spawning external tool");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TransferError::launch_failure(program, e.to_string()))?;

        self.console.register(title);
        self.console.focus();

        let mut forwarders = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            forwarders.push(forward_lines(BufReader::new(stdout), self.console.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            forwarders.push(forward_lines(BufReader::new(stderr), self.console.clone()));
        }

        self.registry.register(title, ProcessHandle { child, forwarders });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CapturingConsole {
        output: Mutex<String>,
        registered: Mutex<Vec<String>>,
    }

    impl RunConsole for CapturingConsole {
        fn register(&self, title: &str) {
            self.registered.lock().unwrap().push(title.to_string());
        }

        fn append(&self, chunk: &str) {
            self.output.lock().unwrap().push_str(chunk);
        }

        fn focus(&self) {}
    }

    #[tokio::test]
    async fn test_launch_streams_output_to_console() {
        let console = Arc::new(CapturingConsole::default());
        let registry = Arc::new(RunRegistry::new());
        let runner = SqlPackageRunner::new(console.clone(), registry.clone());

        let argv = vec!["echo".to_string(), "exported 3 tables".to_string()];
        runner.launch(&argv, "Export BACPAC").unwrap();
        assert_eq!(registry.len(), 1);

        registry.wait_all().await;
        assert!(registry.is_empty());
        assert_eq!(*console.output.lock().unwrap(), "exported 3 tables\n");
        assert_eq!(
            *console.registered.lock().unwrap(),
            vec!["Export BACPAC".to_string()]
        );
    }

    #[tokio::test]
    async fn test_launch_merges_stderr_into_console() {
        let console = Arc::new(CapturingConsole::default());
        let registry = Arc::new(RunRegistry::new());
        let runner = SqlPackageRunner::new(console.clone(), registry.clone());

        let argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            "echo out; echo err >&2".to_string(),
        ];
        runner.launch(&argv, "Import BACPAC").unwrap();
        registry.wait_all().await;

        let output = console.output.lock().unwrap();
        assert!(output.contains("out\n"));
        assert!(output.contains("err\n"));
    }

    #[tokio::test]
    async fn test_launch_missing_binary_is_launch_failure() {
        let console = Arc::new(CapturingConsole::default());
        let registry = Arc::new(RunRegistry::new());
        let runner = SqlPackageRunner::new(console.clone(), registry.clone());

        let argv = vec!["definitely-not-a-real-binary-12345".to_string()];
        let result = runner.launch(&argv, "Export BACPAC");
        assert!(matches!(result, Err(TransferError::LaunchFailure { .. })));
        // Nothing half-started.
        assert!(registry.is_empty());
        assert!(console.registered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_launch_empty_argv_is_invalid_input() {
        let runner = SqlPackageRunner::new(
            Arc::new(CapturingConsole::default()),
            Arc::new(RunRegistry::new()),
        );
        let result = runner.launch(&[], "Export BACPAC");
        assert!(matches!(result, Err(TransferError::InvalidInput { .. })));
    }

    #[test]
    fn test_tool_available_for_shell() {
        assert!(tool_available("sh"));
        assert!(!tool_available("definitely-not-a-real-binary-12345"));
    }
}
