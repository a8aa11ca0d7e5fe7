// keyword-core/src/normalize.rs
//! 文本规范化：去除空白和逗号，只保留中文字符

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());
static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(",").unwrap());
static NON_CHINESE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x{4E00}-\x{9FD5}]+").unwrap());

/// 判断字符是否落在保留的中文区间 U+4E00..=U+9FD5
pub fn is_chinese(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FD5}').contains(&ch)
}

/// 去除单行中的空白字符和英文逗号
pub fn strip_line(line: &str) -> String {
    let line = WHITESPACE.replace_all(line, "");
    COMMA.replace_all(&line, "").into_owned()
}

/// 只保留中文字符
pub fn retain_chinese(text: &str) -> String {
    NON_CHINESE.replace_all(text, "").into_owned()
}

/// 规范化文档
///
/// 逐行去除空白和逗号后按顺序拼接，再过滤掉非中文字符。
/// 空输入得到空字符串。
pub fn normalize_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let content: String = lines
        .into_iter()
        .map(|line| strip_line(line.as_ref()))
        .collect();
    retain_chinese(&content)
}
