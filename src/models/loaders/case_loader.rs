use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 测试用例目录名
pub const TEST_CASE_DIR: &str = "test_cases";

/// 一对用例文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFiles {
    pub index: usize,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

pub fn input_file_name(index: usize) -> String {
    format!("input_{}.txt", index)
}

pub fn output_file_name(index: usize) -> String {
    format!("output_{}.txt", index)
}

/// 从 `input_<n>.txt` / `output_<n>.txt` 中解析出 n
pub fn parse_case_index(file_name: &str, prefix: &str) -> Option<usize> {
    file_name
        .strip_prefix(prefix)?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}

/// 扫描目录中所有 `input_<n>.txt`，按编号升序返回
///
/// 目录不存在或没有任何输入文件时返回 `NoTestCases`
pub async fn load_case_files(dir: &Path) -> AppResult<Vec<CaseFiles>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Err(AppError::NoTestCases {
            dir: dir.to_path_buf(),
        });
    }

    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| AppError::io(dir, e))?;

    let mut cases = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::io(dir, e))?
    {
        let name = entry.file_name();
        let Some(index) = name.to_str().and_then(|n| parse_case_index(n, "input_")) else {
            continue;
        };
        cases.push(CaseFiles {
            index,
            input_path: entry.path(),
            output_path: dir.join(output_file_name(index)),
        });
    }

    if cases.is_empty() {
        tracing::warn!("目录 {} 中没有找到 input_<n>.txt", dir.display());
        return Err(AppError::NoTestCases {
            dir: dir.to_path_buf(),
        });
    }

    cases.sort_by_key(|c| c.index);
    Ok(cases)
}

/// 读取用例文件，去掉末尾换行
pub async fn read_case_text(path: &Path) -> AppResult<String> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(path, e))?;
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_index() {
        assert_eq!(parse_case_index("input_1.txt", "input_"), Some(1));
        assert_eq!(parse_case_index("input_12.txt", "input_"), Some(12));
        assert_eq!(parse_case_index("output_3.txt", "input_"), None);
        assert_eq!(parse_case_index("input_x.txt", "input_"), None);
        assert_eq!(parse_case_index("input_2.txt.bak", "input_"), None);
    }

    #[tokio::test]
    async fn test_missing_dir_is_no_test_cases() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_case_files(&tmp.path().join(TEST_CASE_DIR))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoTestCases { .. }));
    }

    #[tokio::test]
    async fn test_cases_sorted_numerically() {
        let tmp = tempfile::tempdir().unwrap();
        for i in [10, 2, 1] {
            std::fs::write(tmp.path().join(input_file_name(i)), "in").unwrap();
        }
        std::fs::write(tmp.path().join("notes.md"), "ignored").unwrap();

        let cases = load_case_files(tmp.path()).await.unwrap();
        let indices: Vec<_> = cases.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 10]);
        assert_eq!(cases[2].output_path, tmp.path().join("output_10.txt"));
    }

    #[tokio::test]
    async fn test_read_case_text_trims_trailing_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("input_1.txt");
        std::fs::write(&path, "nums = [2,7,11,15], target = 9\r\n").unwrap();
        assert_eq!(
            read_case_text(&path).await.unwrap(),
            "nums = [2,7,11,15], target = 9"
        );
    }
}
