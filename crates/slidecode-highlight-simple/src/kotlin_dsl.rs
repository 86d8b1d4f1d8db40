use crate::gradle::{DSL_BLOCKS, DSL_CALLS};
use crate::patterns::{
    DOUBLE_QUOTED, IDENTIFIER, INTERPOLATION, TRIPLE_DOUBLE_QUOTED, comment_pattern,
    comments_rule, strings_rule, words,
};
use crate::rule::{RegexHighlighter, RegexRule, RuleMode, not_escaped};
use slidecode_core::{Language, StyleCategory};

const KEYWORDS: &[&str] = &[
    "as", "break", "by", "catch", "class", "companion", "const", "continue", "data", "do",
    "else", "enum", "false", "finally", "for", "fun", "if", "import", "in", "interface",
    "internal", "is", "lateinit", "null", "object", "override", "package", "private",
    "public", "return", "sealed", "super", "this", "throw", "true", "try", "typealias", "val",
    "var", "when", "while",
];

/// Kotlin character literal.
const CHAR_LITERAL: &str = r"'(?:\\.|[^'\\\n])'";

/// A function declaration head up to its name: `fun <T> Receiver.name`.
const FUN_HEAD: &str = r"\bfun\s+(?:<[^>\n]*>\s*)?(?:[A-Za-z_][A-Za-z0-9_]*\.)*";

impl RegexHighlighter {
    /// Gradle Kotlin DSL.
    ///
    /// Passes, in order: strings → interpolation inside strings → comments → backtick-quoted
    /// plugin ids → version-catalog accessors → DSL blocks → keywords → DSL calls → function
    /// calls, then annotations, declared function names, numbers and caller-styled
    /// identifiers.
    pub fn kotlin_dsl() -> Result<Self, regex::Error> {
        let strings = format!("{TRIPLE_DOUBLE_QUOTED}|{DOUBLE_QUOTED}|{CHAR_LITERAL}");
        let comments = comment_pattern(Language::KotlinDsl.comments());

        Ok(Self::new(
            Language::KotlinDsl,
            vec![
                strings_rule(&strings, &comments)?,
                RegexRule::new(INTERPOLATION, StyleCategory::Keyword)?
                    .with_group_styles(&[
                        (0, StyleCategory::Keyword),
                        (1, StyleCategory::Plain),
                        (2, StyleCategory::Property),
                    ])
                    .with_mode(RuleMode::Overlay { opener: "\"" })
                    .with_guard(not_escaped),
                comments_rule(&strings, &comments)?,
                // `java-library`
                RegexRule::new(r"`[^`\n]+`", StyleCategory::DslConstruct)?,
                // libs.kotlinx.coroutines.core
                RegexRule::new(
                    r"\blibs(?:\.[A-Za-z_][A-Za-z0-9_]*)+",
                    StyleCategory::Property,
                )?,
                RegexRule::new(&words(DSL_BLOCKS), StyleCategory::DslConstruct)?,
                RegexRule::new(&words(KEYWORDS), StyleCategory::Keyword)?,
                RegexRule::new(
                    &format!(r"({})\s*\(", words(DSL_CALLS)),
                    StyleCategory::DslConstruct,
                )?
                .with_capture_group(1),
                // Function calls; declaration heads are consumed but not styled here.
                RegexRule::new(
                    &format!(r"{FUN_HEAD}[A-Za-z_][A-Za-z0-9_]*|\b([a-z_][A-Za-z0-9_]*)\s*[({{]"),
                    StyleCategory::FunctionCall,
                )?
                .with_capture_group(1),
                RegexRule::new(
                    r"@(?:[a-z]+:)?[A-Za-z_][A-Za-z0-9_.]*",
                    StyleCategory::Annotation,
                )?,
                RegexRule::new(
                    &format!(r"{FUN_HEAD}([A-Za-z_][A-Za-z0-9_]*)"),
                    StyleCategory::FunctionDeclaration,
                )?
                .with_capture_group(1),
                RegexRule::new(
                    r"\b(?:0[xX][0-9A-Fa-f_]+|0[bB][01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)(?:[uU]?[lL]|[fFuU])?\b",
                    StyleCategory::Number,
                )?,
                RegexRule::new(IDENTIFIER, StyleCategory::Plain)?.with_mode(RuleMode::Identifier),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidecode_core::{MatchOptions, Matcher, StyledRange};

    fn styled(text: &str) -> Vec<(String, StyleCategory)> {
        let highlighter = RegexHighlighter::kotlin_dsl().unwrap();
        highlighter
            .highlight(text, &MatchOptions::default())
            .into_iter()
            .map(|r| (slice(text, r), r.category))
            .collect()
    }

    fn slice(text: &str, range: StyledRange) -> String {
        text.chars().skip(range.start).take(range.len()).collect()
    }

    #[test]
    fn test_interpolation_inside_string() {
        assert_eq!(
            styled(r#"val x = "$name""#),
            vec![
                ("val".to_string(), StyleCategory::Keyword),
                ("\"".to_string(), StyleCategory::String),
                ("$".to_string(), StyleCategory::Keyword),
                ("name".to_string(), StyleCategory::Property),
                ("\"".to_string(), StyleCategory::String),
            ]
        );
    }

    #[test]
    fn test_braced_interpolation_leaves_expression_plain() {
        assert_eq!(
            styled(r#""v${a.b}!""#),
            vec![
                ("\"v".to_string(), StyleCategory::String),
                ("${".to_string(), StyleCategory::Keyword),
                ("}".to_string(), StyleCategory::Keyword),
                ("!\"".to_string(), StyleCategory::String),
            ]
        );
    }

    #[test]
    fn test_escaped_dollar_is_not_interpolation() {
        assert_eq!(
            styled(r#""\$HOME""#),
            vec![(r#""\$HOME""#.to_string(), StyleCategory::String)]
        );
    }

    #[test]
    fn test_comment_markers_inside_strings() {
        assert_eq!(
            styled(r#"url("https://example.com") // repo"#),
            vec![
                ("url".to_string(), StyleCategory::FunctionCall),
                ("\"https://example.com\"".to_string(), StyleCategory::String),
                ("// repo".to_string(), StyleCategory::Comment),
            ]
        );
    }

    #[test]
    fn test_strings_inside_comments_are_comment() {
        assert_eq!(
            styled("/* \"$x\" */ val"),
            vec![
                ("/* \"$x\" */".to_string(), StyleCategory::Comment),
                ("val".to_string(), StyleCategory::Keyword),
            ]
        );
    }

    #[test]
    fn test_function_declaration_is_not_a_call() {
        assert_eq!(
            styled("fun String.shout() = uppercase()"),
            vec![
                ("fun".to_string(), StyleCategory::Keyword),
                ("shout".to_string(), StyleCategory::FunctionDeclaration),
                ("uppercase".to_string(), StyleCategory::FunctionCall),
            ]
        );
    }
}
