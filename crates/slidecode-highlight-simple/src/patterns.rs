//! Pattern fragments shared by several languages.

use crate::rule::RegexRule;
use regex::escape;
use slidecode_core::{CommentConfig, StyleCategory};

/// Double-quoted string on one line; an unterminated string runs to the end of the line.
pub(crate) const DOUBLE_QUOTED: &str = r#""(?:\\.|[^"\\\n])*"?"#;

/// Triple-quoted raw string; an unterminated one runs to the end of the text.
pub(crate) const TRIPLE_DOUBLE_QUOTED: &str = r#""""(?s:.*?)(?:"""|\z)"#;

/// `$name` and `${expr}` interpolation. Group 1 is the expression, group 2 the name.
pub(crate) const INTERPOLATION: &str = r"\$\{([^}\n]*)\}?|\$([A-Za-z_][A-Za-z0-9_]*)";

/// An identifier.
pub(crate) const IDENTIFIER: &str = r"\b[A-Za-z_][A-Za-z0-9_]*\b";

/// Alternation matching any comment described by `config`.
pub(crate) fn comment_pattern(config: CommentConfig) -> String {
    let mut alternatives = Vec::new();

    if config.has_block()
        && let Some((start, end)) = config.block
    {
        alternatives.push(format!(r"{}(?s:.*?)(?:{}|\z)", escape(start), escape(end)));
    }

    let line_tokens: Vec<String> = config
        .line
        .iter()
        .filter(|token| !token.is_empty())
        .map(|token| escape(token))
        .collect();
    if !line_tokens.is_empty() {
        let prefix = if config.line_start_only {
            r"(?m:^)[ \t]*"
        } else {
            ""
        };
        alternatives.push(format!(r"{prefix}(?:{})[^\n]*", line_tokens.join("|")));
    }

    if alternatives.is_empty() {
        // Matches nothing.
        return r"\b\B".to_string();
    }
    format!("(?:{})", alternatives.join("|"))
}

/// `\b(?:a|b|c)\b`
pub(crate) fn words(words: &[&str]) -> String {
    let alternatives: Vec<String> = words.iter().map(|w| escape(w)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

/// String pass: claims strings, stepping over comments so quotes inside comments are ignored.
pub(crate) fn strings_rule(strings: &str, comments: &str) -> Result<RegexRule, regex::Error> {
    Ok(
        RegexRule::new(&format!("{comments}|({strings})"), StyleCategory::String)?
            .with_capture_group(1),
    )
}

/// Comment pass: claims comments, stepping over strings so comment tokens inside strings are
/// ignored.
pub(crate) fn comments_rule(strings: &str, comments: &str) -> Result<RegexRule, regex::Error> {
    Ok(
        RegexRule::new(&format!("(?:{strings})|({comments})"), StyleCategory::Comment)?
            .with_capture_group(1)
            .evicting(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_comment_pattern_line_and_block() {
        let re = Regex::new(&comment_pattern(CommentConfig::line_and_block(&["//"], "/*", "*/")))
            .unwrap();
        let found: Vec<&str> = re.find_iter("a // b\n/* c\nd */ e /* open").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["// b", "/* c\nd */", "/* open"]);
    }

    #[test]
    fn test_comment_pattern_line_start_only() {
        let re = Regex::new(&comment_pattern(CommentConfig::line(&["#", "!"]).at_line_start()))
            .unwrap();
        let found: Vec<&str> = re.find_iter("a=b#c\n  ! note\n#x").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["  ! note", "#x"]);
    }

    #[test]
    fn test_comment_pattern_without_comments_matches_nothing() {
        let re = Regex::new(&comment_pattern(CommentConfig::NONE)).unwrap();
        assert!(re.find("# // /* */").is_none());
    }

    #[test]
    fn test_words() {
        let re = Regex::new(&words(&["val", "var"])).unwrap();
        assert!(re.is_match("val x"));
        assert!(!re.is_match("value"));
    }
}
