//! 从题目 URL 中提取 slug

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?leetcode\.com/problems/([^/?#\s]+)")
            .expect("slug regex is valid")
    })
}

/// 提取 `/problems/` 后面的路径段
///
/// `https://leetcode.com/problems/two-sum/description/` → `two-sum`
pub fn extract_slug(url: &str) -> AppResult<String> {
    let trimmed = url.trim();
    slug_regex()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::invalid_url(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slug() {
        assert_eq!(
            extract_slug("https://leetcode.com/problems/two-sum/").unwrap(),
            "two-sum"
        );
        assert_eq!(
            extract_slug("  https://leetcode.com/problems/two-sum\n").unwrap(),
            "two-sum"
        );
        assert_eq!(
            extract_slug("https://leetcode.com/problems/add-two-numbers/description/").unwrap(),
            "add-two-numbers"
        );
        assert_eq!(
            extract_slug("https://www.leetcode.com/problems/lru-cache?envType=study").unwrap(),
            "lru-cache"
        );
    }

    #[test]
    fn test_extract_slug_rejects_other_urls() {
        for url in [
            "",
            "two-sum",
            "https://leetcode.com/problemset/",
            "https://leetcode.com/problems/",
            "https://codeforces.com/problems/two-sum",
        ] {
            assert!(
                matches!(extract_slug(url), Err(AppError::InvalidUrl { .. })),
                "{url}"
            );
        }
    }
}
