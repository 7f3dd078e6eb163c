/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::models::RunSummary;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志输出到 stderr，stdout 只留给测试结果。
/// 设置了 `RUST_LOG` 时以它为准。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cph={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录运行开始信息
///
/// # 参数
/// - `solution`: 解答文件
/// - `language`: 语言名称
/// - `total`: 用例数量
pub fn log_run_start(solution: &str, language: &str, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始运行: {} ({})", solution, language);
    info!("📋 共 {} 个用例", total);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_run_stats(summary: &RunSummary) {
    info!("{}", "─".repeat(60));
    info!(
        "完成时间: {} (耗时 {:.2}s)",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        summary.elapsed.as_secs_f64()
    );
    info!("✅ 通过: {}/{}", summary.passed, summary.total);
    info!("❌ 失败: {}", summary.failed());
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("两数之和", 2), "两数...");
    }
}
