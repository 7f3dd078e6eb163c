//! 进程执行器 - 基础设施层
//!
//! 持有超时设置，只暴露"用某种语言跑一段源码"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::LanguageSpec;
use async_trait::async_trait;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// 用例执行能力
///
/// 返回去掉首尾空白后的 stdout
#[async_trait]
pub trait CaseExecutor: Send + Sync {
    async fn execute(
        &self,
        language: &LanguageSpec,
        source: &str,
        input_path: &Path,
    ) -> AppResult<String>;
}

/// 通过系统 shell 编译、运行解答
///
/// 每次执行都在独立的临时目录中进行，目录在执行结束后（无论成败）删除，
/// 因此多次执行之间不会共享任何临时文件。
pub struct ProcessExecutor {
    compile_timeout: Duration,
    run_timeout: Duration,
}

impl ProcessExecutor {
    pub fn new(config: &Config) -> Self {
        Self::with_timeouts(config.compile_timeout(), config.run_timeout())
    }

    pub fn with_timeouts(compile_timeout: Duration, run_timeout: Duration) -> Self {
        Self {
            compile_timeout,
            run_timeout,
        }
    }
}

#[async_trait]
impl CaseExecutor for ProcessExecutor {
    async fn execute(
        &self,
        language: &LanguageSpec,
        source: &str,
        input_path: &Path,
    ) -> AppResult<String> {
        let workdir = tempfile::Builder::new()
            .prefix("cph-")
            .tempdir()
            .map_err(|e| AppError::io(std::env::temp_dir(), e))?;
        let dir = workdir.path();

        let source_path = dir.join(&language.source_file);
        tokio::fs::write(&source_path, source)
            .await
            .map_err(|e| AppError::io(&source_path, e))?;
        let exe_path = dir.join(format!("solution{}", std::env::consts::EXE_SUFFIX));

        let render =
            |template: &str| render_command(template, &source_path, &exe_path, dir);

        if let Some(build) = &language.build {
            let command_line = render(build);
            debug!("编译: {}", command_line);
            let output =
                run_shell(&command_line, dir, Stdio::null(), self.compile_timeout).await?;
            if !output.status.success() {
                return Err(AppError::execution_failed(format!(
                    "Compilation failed: {}",
                    failure_message(&output)
                )));
            }
        }

        let input = tokio::fs::File::open(input_path)
            .await
            .map_err(|e| AppError::io(input_path, e))?
            .into_std()
            .await;

        let command_line = render(&language.run);
        debug!("运行: {} < {}", command_line, input_path.display());
        let output = run_shell(&command_line, dir, Stdio::from(input), self.run_timeout).await?;
        if !output.status.success() {
            return Err(AppError::execution_failed(failure_message(&output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if let Err(e) = workdir.close() {
            warn!("清理临时目录失败: {}", e);
        }
        Ok(stdout)
    }
}

/// 启动一条 shell 命令并等待结束，超时后杀掉子进程
async fn run_shell(
    command_line: &str,
    cwd: &Path,
    stdin: Stdio,
    limit: Duration,
) -> AppResult<Output> {
    let mut cmd = shell_command(command_line);
    cmd.current_dir(cwd)
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    // 解答自己拉起的进程与 shell 同组，超时时整组清理
    #[cfg(unix)]
    cmd.process_group(0);

    let child = cmd.spawn().map_err(|e| {
        AppError::execution_failed(format!("无法启动命令 `{}`: {}", command_line, e))
    })?;
    let pid = child.id();

    match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(AppError::execution_failed(e.to_string())),
        Err(_) => {
            kill_process_group(pid);
            Err(AppError::ExecutionTimeout { timeout: limit })
        }
    }
}

/// 向整个进程组发送 SIGKILL
#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    use nix::errno::Errno;
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Some(pid) = pid else {
        return;
    };
    match killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
        Ok(()) => debug!("🔪 已终止进程组 {}", pid),
        Err(Errno::ESRCH) => {}
        Err(e) => warn!("终止进程组 {} 失败: {}", pid, e),
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command_line);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

/// 替换模板中的占位符
pub fn render_command(template: &str, source: &Path, exe: &Path, dir: &Path) -> String {
    template
        .replace("{source}", &shell_quote(source))
        .replace("{exe}", &shell_quote(exe))
        .replace("{dir}", &shell_quote(dir))
}

#[cfg(windows)]
fn shell_quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

#[cfg(not(windows))]
fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
