//! 样例提取服务 - 业务能力层
//!
//! 只负责"从题面 HTML 中取出 Input/Output 样例"，不关心网络与落盘

use crate::models::TestCase;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// 旧版题面：`<strong>Input:</strong> ...<br><strong>Output:</strong> ...<br>`，
/// 分隔符也可能是换行（`<pre>` 块）
const CLASSIC_PATTERN: &str = r"(?s)<strong>\s*Input:?\s*</strong>\s*(.*?)\s*(?:<br\s*/?>|\n)\s*<strong>\s*Output:?\s*</strong>\s*(.*?)\s*(?:<br\s*/?>|\n|</pre>|$)";

/// 新版题面：值包在 `<span class="example-io">` 里
const EXAMPLE_IO_PATTERN: &str = r#"(?s)<strong>\s*Input:?\s*</strong>\s*<span class="example-io">(.*?)</span>.*?<strong>\s*Output:?\s*</strong>\s*<span class="example-io">(.*?)</span>"#;

struct Patterns {
    classic: Regex,
    example_io: Regex,
    tag: Regex,
    whitespace: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        classic: Regex::new(CLASSIC_PATTERN).expect("classic pattern is valid"),
        example_io: Regex::new(EXAMPLE_IO_PATTERN).expect("example-io pattern is valid"),
        tag: Regex::new(r"<[^>]+>").expect("tag pattern is valid"),
        whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
    })
}

/// 提取题面中的所有样例，编号从 1 开始，保持出现顺序
///
/// 先尝试旧版格式，没有结果时再尝试新版格式；都没有时返回空列表
pub fn extract_test_cases(statement: &str) -> Vec<TestCase> {
    let p = patterns();

    let mut cases = collect(&p.classic, statement);
    if cases.is_empty() {
        cases = collect(&p.example_io, statement);
    }

    debug!("从题面中提取到 {} 组样例", cases.len());
    cases
}

/// 每个匹配都保留，编号与题面中的样例一一对应
fn collect(re: &Regex, statement: &str) -> Vec<TestCase> {
    re.captures_iter(statement)
        .filter_map(|caps| {
            let input = clean_fragment(caps.get(1)?.as_str());
            let expected = clean_fragment(caps.get(2)?.as_str());
            Some((input, expected))
        })
        .enumerate()
        .map(|(i, (input, expected))| {
            if input.is_empty() || expected.is_empty() {
                debug!("样例 #{} 的输入或输出为空", i + 1);
            }
            TestCase {
                index: i + 1,
                input,
                expected,
            }
        })
        .collect()
}

/// 去掉残留标签、解码实体、把连续空白压成一个空格
pub fn clean_fragment(raw: &str) -> String {
    let p = patterns();
    let without_tags = p.tag.replace_all(raw, "");
    let decoded = decode_entities(&without_tags);
    p.whitespace.replace_all(&decoded, " ").trim().to_string()
}

/// 解码题面里常见的 HTML 实体，`&amp;` 最后处理以免二次解码
pub fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum_br_format() {
        let statement = "<p>Given an array...</p><strong>Input:</strong> nums = [2,7,11,15], target = 9<br><strong>Output:</strong> [0,1]<br><strong>Explanation:</strong> ...";
        let cases = extract_test_cases(statement);
        assert_eq!(
            cases,
            vec![TestCase {
                index: 1,
                input: "nums = [2,7,11,15], target = 9".to_string(),
                expected: "[0,1]".to_string(),
            }]
        );
    }

    #[test]
    fn test_pre_blocks_in_order() {
        let statement = r#"<p><strong class="example">Example 1:</strong></p>
<pre>
<strong>Input:</strong> s = &quot;()&quot;
<strong>Output:</strong> true
</pre>
<p><strong class="example">Example 2:</strong></p>
<pre>
<strong>Input:</strong> s = &quot;(]&quot;
<strong>Output:</strong> false
<strong>Explanation:</strong> mismatched.
</pre>
<pre>
<strong>Input:</strong>   s =   &quot;{[]}&quot;
<strong>Output:</strong> true</pre>"#;

        let cases = extract_test_cases(statement);
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].input, r#"s = "()""#);
        assert_eq!(cases[0].expected, "true");
        assert_eq!(cases[1].index, 2);
        assert_eq!(cases[1].expected, "false");
        assert_eq!(cases[2].index, 3);
        assert_eq!(cases[2].input, r#"s = "{[]}""#);
    }

    #[test]
    fn test_example_io_fallback() {
        let statement = r#"<div class="example-block">
<p><strong>Input:</strong> <span class="example-io">nums = [3,2,4], target = 6</span></p>
<p><strong>Output:</strong> <span class="example-io">[1,2]</span></p>
</div>"#;
        let cases = extract_test_cases(statement);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].input, "nums = [3,2,4], target = 6");
        assert_eq!(cases[0].expected, "[1,2]");
    }

    #[test]
    fn test_empty_example_keeps_numbering() {
        let statement = "<strong>Input:</strong> <br><strong>Output:</strong> 42<br>\
<strong>Input:</strong> n = 3<br><strong>Output:</strong> 6<br>";
        let cases = extract_test_cases(statement);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].index, 1);
        assert_eq!(cases[0].input, "");
        assert_eq!(cases[0].expected, "42");
        assert_eq!(cases[1].index, 2);
        assert_eq!(cases[1].input, "n = 3");
    }

    #[test]
    fn test_no_markers_yields_nothing() {
        assert!(extract_test_cases("<p>Design a data structure.</p>").is_empty());
    }

    #[test]
    fn test_clean_fragment() {
        assert_eq!(
            clean_fragment("  words = [&quot;a&quot;,\n   &quot;b&quot;]  "),
            r#"words = ["a", "b"]"#
        );
        assert_eq!(clean_fragment("<code>1 &lt; 2</code>"), "1 < 2");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
