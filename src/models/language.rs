//! 语言表
//!
//! 每种语言对应一组 {编译命令, 运行命令} 模板，按 `--lang` 或文件扩展名选择。
//! 模板中的占位符：`{source}` 源文件、`{exe}` 可执行文件、`{dir}` 临时目录。

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `--lang` 可接受的别名
static LANGUAGE_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "py" => "python",
    "python3" => "python",
    "c++" => "cpp",
    "cxx" => "cpp",
    "rs" => "rust",
    "js" => "javascript",
    "node" => "javascript",
    "sh" => "shell",
    "bash" => "shell",
};

/// 单个语言的执行方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub name: String,
    /// 不带点的扩展名
    #[serde(default)]
    pub extensions: Vec<String>,
    /// 写入临时目录时使用的文件名
    pub source_file: String,
    /// 为空表示解释执行
    #[serde(default)]
    pub build: Option<String>,
    pub run: String,
}

impl LanguageSpec {
    fn builtin(
        name: &str,
        extensions: &[&str],
        source_file: &str,
        build: Option<&str>,
        run: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            source_file: source_file.to_string(),
            build: build.map(str::to_string),
            run: run.to_string(),
        }
    }
}

/// 语言注册表
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageSpec>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    /// 内置语言
    pub fn builtin() -> Self {
        let python = if cfg!(windows) { "python" } else { "python3" };
        Self {
            languages: vec![
                LanguageSpec::builtin(
                    "python",
                    &["py"],
                    "solution.py",
                    None,
                    &format!("{} {{source}}", python),
                ),
                LanguageSpec::builtin(
                    "cpp",
                    &["cpp", "cc", "cxx"],
                    "solution.cpp",
                    Some("g++ -O2 -std=c++17 {source} -o {exe}"),
                    "{exe}",
                ),
                LanguageSpec::builtin(
                    "c",
                    &["c"],
                    "solution.c",
                    Some("gcc -O2 {source} -o {exe}"),
                    "{exe}",
                ),
                LanguageSpec::builtin(
                    "rust",
                    &["rs"],
                    "solution.rs",
                    Some("rustc -O {source} -o {exe}"),
                    "{exe}",
                ),
                LanguageSpec::builtin(
                    "java",
                    &["java"],
                    "Main.java",
                    Some("javac {source}"),
                    "java -cp {dir} Main",
                ),
                LanguageSpec::builtin(
                    "javascript",
                    &["js"],
                    "solution.js",
                    None,
                    "node {source}",
                ),
                LanguageSpec::builtin("shell", &["sh"], "solution.sh", None, "sh {source}"),
            ],
        }
    }

    /// 合并配置中的语言：同名覆盖，新名追加
    pub fn with_overrides(mut self, overrides: &[LanguageSpec]) -> Self {
        for spec in overrides {
            match self.languages.iter_mut().find(|l| l.name == spec.name) {
                Some(existing) => *existing = spec.clone(),
                None => self.languages.push(spec.clone()),
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&LanguageSpec> {
        let lowered = name.to_ascii_lowercase();
        let canonical = LANGUAGE_ALIASES
            .get(lowered.as_str())
            .copied()
            .unwrap_or(lowered.as_str());
        self.languages.iter().find(|l| l.name == canonical)
    }

    pub fn by_extension(&self, ext: &str) -> Option<&LanguageSpec> {
        let ext = ext.to_ascii_lowercase();
        self.languages
            .iter()
            .find(|l| l.extensions.iter().any(|e| *e == ext))
    }

    /// 确定解答文件的语言，显式指定优先，其次按扩展名
    pub fn resolve(&self, path: &Path, lang: Option<&str>) -> AppResult<&LanguageSpec> {
        if let Some(name) = lang {
            return self.get(name).ok_or_else(|| AppError::UnsupportedLanguage {
                path: path.to_path_buf(),
                hint: format!("unknown language '{}' (known: {})", name, self.names()),
            });
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        self.by_extension(ext)
            .ok_or_else(|| AppError::UnsupportedLanguage {
                path: path.to_path_buf(),
                hint: format!(
                    "unrecognised extension '{}', pass --lang (known: {})",
                    ext,
                    self.names()
                ),
            })
    }

    pub fn names(&self) -> String {
        self.languages
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
