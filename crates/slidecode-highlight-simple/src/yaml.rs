use crate::rule::{RegexHighlighter, RegexRule, standalone_scalar};
use slidecode_core::{Language, StyleCategory};

/// Scalars only start at the beginning of a value, so value patterns consume one preceding
/// delimiter.
const VALUE_START: &str = r"(?:^|[ \t\[{,:])";

/// Quoted scalar. `'it''s'` escapes a single quote by doubling it.
const QUOTED: &str = r#""(?:\\.|[^"\\\n])*"?|'(?:''|[^'\n])*'?"#;

/// A `#` only starts a comment at the start of a line or after whitespace.
const COMMENT: &str = r"(?:^|[ \t])(#[^\n]*)";

impl RegexHighlighter {
    /// YAML.
    ///
    /// Passes, in order: quoted scalars → comments → keys → anchors/aliases → document
    /// markers → booleans/null → numbers.
    pub fn yaml() -> Result<Self, regex::Error> {
        Ok(Self::new(
            Language::Yaml,
            vec![
                RegexRule::new(
                    &format!("(?m){COMMENT}|{VALUE_START}({QUOTED})"),
                    StyleCategory::String,
                )?
                .with_capture_group(2),
                RegexRule::new(
                    &format!("(?m){VALUE_START}(?:{QUOTED})|{COMMENT}"),
                    StyleCategory::Comment,
                )?
                .with_capture_group(1)
                .evicting(),
                // key: value, - key: value
                RegexRule::new(
                    r#"(?m)^[ \t]*(?:-[ \t]+)*([^\s#'"\-?:,\[\]{}&*!|>%@`][^\n:#]*?)[ \t]*:(?:[ \t]|$)"#,
                    StyleCategory::Keyword,
                )?
                .with_capture_group(1),
                RegexRule::new(r"(?m)(?:^|[ \t])([&*][A-Za-z0-9_\-]+)", StyleCategory::Property)?
                    .with_capture_group(1),
                RegexRule::new(r"(?m)^(---|\.\.\.)(?:[ \t]|$)", StyleCategory::Punctuation)?
                    .with_capture_group(1),
                RegexRule::new(
                    r"(?m)(?:^|[ \t\[{,:])(true|false|True|False|TRUE|FALSE|null|Null|NULL|~)",
                    StyleCategory::Keyword,
                )?
                .with_capture_group(1)
                .with_guard(standalone_scalar),
                RegexRule::new(
                    r"(?m)(?:^|[ \t\[{,:])([-+]?(?:0x[0-9A-Fa-f]+|0o[0-7]+|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?|\.inf|\.Inf|\.nan|\.NaN))",
                    StyleCategory::Number,
                )?
                .with_capture_group(1)
                .with_guard(standalone_scalar),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidecode_core::{MatchOptions, Matcher};

    fn styled(text: &str) -> Vec<(String, StyleCategory)> {
        RegexHighlighter::yaml()
            .unwrap()
            .highlight(text, &MatchOptions::default())
            .into_iter()
            .map(|r| (text[r.start..r.end].to_string(), r.category))
            .collect()
    }

    #[test]
    fn test_key_and_comment_line() {
        assert_eq!(
            styled("key: value\n# comment\n"),
            vec![
                ("key".to_string(), StyleCategory::Keyword),
                ("# comment".to_string(), StyleCategory::Comment),
            ]
        );
    }

    #[test]
    fn test_hash_inside_quoted_value_is_not_comment() {
        assert_eq!(
            styled("url: \"http://x/#top\" # link"),
            vec![
                ("url".to_string(), StyleCategory::Keyword),
                ("\"http://x/#top\"".to_string(), StyleCategory::String),
                ("# link".to_string(), StyleCategory::Comment),
            ]
        );
    }

    #[test]
    fn test_apostrophe_in_plain_scalar() {
        assert_eq!(
            styled("title: Don't panic"),
            vec![("title".to_string(), StyleCategory::Keyword)]
        );
    }

    #[test]
    fn test_scalars_lists_and_anchors() {
        assert_eq!(
            styled("---\nbase: &base\n  retries: 3\n  flags: [true, 1.5]\nprod:\n  <<: *base\n  version: 1.2.3\n"),
            vec![
                ("---".to_string(), StyleCategory::Punctuation),
                ("base".to_string(), StyleCategory::Keyword),
                ("&base".to_string(), StyleCategory::Property),
                ("retries".to_string(), StyleCategory::Keyword),
                ("3".to_string(), StyleCategory::Number),
                ("flags".to_string(), StyleCategory::Keyword),
                ("true".to_string(), StyleCategory::Keyword),
                ("1.5".to_string(), StyleCategory::Number),
                ("prod".to_string(), StyleCategory::Keyword),
                ("<<".to_string(), StyleCategory::Keyword),
                ("*base".to_string(), StyleCategory::Property),
                ("version".to_string(), StyleCategory::Keyword),
            ]
        );
    }

    #[test]
    fn test_list_item_keys() {
        assert_eq!(
            styled("steps:\n  - name: build\n    run: make"),
            vec![
                ("steps".to_string(), StyleCategory::Keyword),
                ("name".to_string(), StyleCategory::Keyword),
                ("run".to_string(), StyleCategory::Keyword),
            ]
        );
    }
}
