use async_trait::async_trait;
use cph::clients::ProblemProvider;
use cph::{App, AppResult, CommandStatus, Config, MemorySink, UserPrompt};
use std::path::Path;
use tokio_test::assert_ok;

const TWO_SUM: &str = "<p>Given an array of integers <code>nums</code>...</p>\
<strong>Input:</strong> nums = [2,7,11,15], target = 9<br><strong>Output:</strong> [0,1]<br>\
<strong>Input:</strong> nums = [3,2,4], target = 6<br><strong>Output:</strong> [1,2]<br>\
<strong>Input:</strong> nums = [3,3], target = 6<br><strong>Output:</strong> [0,1]<br>";

struct FixtureProvider;

#[async_trait]
impl ProblemProvider for FixtureProvider {
    async fn fetch_statement(&self, _slug: &str) -> AppResult<String> {
        Ok(TWO_SUM.to_string())
    }
}

struct Answer(&'static str);

impl UserPrompt for Answer {
    fn prompt(&self, _message: &str) -> AppResult<Option<String>> {
        Ok(Some(self.0.to_string()))
    }
}

fn app_in(workspace: &Path) -> App {
    App::new(Config {
        workspace_dir: workspace.to_path_buf(),
        run_timeout_ms: 5_000,
        ..Config::default()
    })
}

#[tokio::test]
async fn test_fetch_via_prompt_writes_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app_in(tmp.path());
    let sink = MemorySink::new();

    let status = app
        .fetch_with(
            FixtureProvider,
            None,
            &Answer("https://leetcode.com/problems/two-sum/"),
            &sink,
        )
        .await;
    assert_eq!(status, CommandStatus::Succeeded);
    assert!(sink.contents().contains("fetched successfully"));

    let problem_dir = tmp.path().join("two-sum");
    assert_ok!(std::fs::metadata(problem_dir.join("problem_statement.txt")));
    let case_dir = problem_dir.join("test_cases");
    assert_eq!(
        std::fs::read_to_string(case_dir.join("input_2.txt")).unwrap(),
        "nums = [3,2,4], target = 6"
    );
    assert_eq!(
        std::fs::read_to_string(case_dir.join("output_3.txt")).unwrap(),
        "[0,1]"
    );
}

#[tokio::test]
async fn test_invalid_url_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app_in(tmp.path());
    let sink = MemorySink::new();

    let status = app
        .fetch_with(
            FixtureProvider,
            Some("https://leetcode.com/contest/".to_string()),
            &Answer("unused"),
            &sink,
        )
        .await;
    assert_eq!(status, CommandStatus::Failed);
    assert!(sink.contents().starts_with("Invalid LeetCode problem URL"));
}

/// 真实进程：shell 解答只回显输入，第二组的期望输出故意写错
#[cfg(unix)]
#[tokio::test]
async fn test_run_shell_solution_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app_in(tmp.path());
    let problem_dir = tmp.path().join("echo");
    let case_dir = problem_dir.join("test_cases");
    std::fs::create_dir_all(&case_dir).unwrap();
    for (i, (input, expected)) in [("alpha", "alpha"), ("beta", "gamma"), ("delta", "delta")]
        .iter()
        .enumerate()
    {
        std::fs::write(case_dir.join(format!("input_{}.txt", i + 1)), input).unwrap();
        std::fs::write(case_dir.join(format!("output_{}.txt", i + 1)), expected).unwrap();
    }
    let solution = problem_dir.join("solution.sh");
    std::fs::write(&solution, "cat\n").unwrap();

    let sink = MemorySink::new();
    let status = app.run_test_cases(&solution, None, &sink).await;
    assert_eq!(status, CommandStatus::Failed);

    let results: Vec<_> = sink
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("Result: "))
        .collect();
    assert_eq!(
        results,
        vec!["Result: Passed", "Result: Failed", "Result: Passed"]
    );
    assert_eq!(sink.lines().last().unwrap(), "Passed 2/3");
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_times_out_hanging_solution() {
    let tmp = tempfile::tempdir().unwrap();
    let app = App::new(Config {
        workspace_dir: tmp.path().to_path_buf(),
        run_timeout_ms: 300,
        ..Config::default()
    });
    let case_dir = tmp.path().join("test_cases");
    std::fs::create_dir_all(&case_dir).unwrap();
    std::fs::write(case_dir.join("input_1.txt"), "1").unwrap();
    std::fs::write(case_dir.join("output_1.txt"), "1").unwrap();
    let solution = tmp.path().join("loop.sh");
    std::fs::write(&solution, "exec sleep 30\n").unwrap();

    let sink = MemorySink::new();
    let status = app.run_test_cases(&solution, None, &sink).await;
    assert_eq!(status, CommandStatus::Failed);
    assert!(sink
        .lines()
        .contains(&"Result: Timed out after 300ms".to_string()));
}
