use anyhow::Result;
use clap::{Parser, Subcommand};
use cph::utils::logging;
use cph::{App, Config, ConsoleSink, StdinPrompt};
use std::path::PathBuf;

/// 抓取 LeetCode 样例并在本地检验解答
#[derive(Debug, Parser)]
#[command(name = "cph", version, about)]
struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 题目目录所在的工作区
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 抓取题面和样例（不给 URL 时从标准输入读取）
    Fetch { url: Option<String> },

    /// 用已保存的样例运行解答
    Run {
        solution: PathBuf,

        /// 指定语言，默认按扩展名判断
        #[arg(long)]
        lang: Option<String>,

        /// 单个用例的超时（毫秒）
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(workspace) = cli.workspace {
        config.workspace_dir = workspace;
    }
    if let Command::Run {
        timeout_ms: Some(timeout_ms),
        ..
    } = cli.command
    {
        config.run_timeout_ms = timeout_ms;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let app = App::new(config);
    let sink = ConsoleSink;

    let status = match &cli.command {
        Command::Fetch { url } => app.fetch_test_cases(url.clone(), &StdinPrompt, &sink).await,
        Command::Run { solution, lang, .. } => {
            app.run_test_cases(solution, lang.as_deref(), &sink).await
        }
    };

    std::process::exit(status.exit_code());
}
