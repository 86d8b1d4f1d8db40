use crate::gradle::{DSL_BLOCKS, DSL_CALLS};
use crate::patterns::{
    DOUBLE_QUOTED, IDENTIFIER, INTERPOLATION, TRIPLE_DOUBLE_QUOTED, comment_pattern,
    comments_rule, strings_rule, words,
};
use crate::rule::{RegexHighlighter, RegexRule, RuleMode, not_escaped};
use slidecode_core::{Language, StyleCategory};

const KEYWORDS: &[&str] = &[
    "as", "assert", "break", "case", "catch", "class", "continue", "def", "default", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "implements", "import", "in",
    "instanceof", "interface", "it", "new", "null", "package", "private", "protected", "public",
    "return", "static", "super", "switch", "this", "throw", "true", "try", "void", "while",
];

const TRIPLE_SINGLE_QUOTED: &str = r"'''(?s:.*?)(?:'''|\z)";
const SINGLE_QUOTED: &str = r"'(?:\\.|[^'\\\n])*'?";

impl RegexHighlighter {
    /// Groovy and the Gradle Groovy DSL.
    ///
    /// Only double-quoted strings (GStrings) interpolate. DSL calls may use command syntax
    /// (`implementation 'group:name:1.0'`).
    pub fn groovy() -> Result<Self, regex::Error> {
        let strings = format!(
            "{TRIPLE_SINGLE_QUOTED}|{TRIPLE_DOUBLE_QUOTED}|{DOUBLE_QUOTED}|{SINGLE_QUOTED}"
        );
        let comments = comment_pattern(Language::Groovy.comments());

        Ok(Self::new(
            Language::Groovy,
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
                RegexRule::new(&words(DSL_BLOCKS), StyleCategory::DslConstruct)?,
                RegexRule::new(&words(KEYWORDS), StyleCategory::Keyword)?,
                RegexRule::new(
                    &format!(r#"({})(?:\s*\(|[ \t]+['"A-Za-z_])"#, words(DSL_CALLS)),
                    StyleCategory::DslConstruct,
                )?
                .with_capture_group(1),
                RegexRule::new(
                    r"\bdef\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(",
                    StyleCategory::FunctionDeclaration,
                )?
                .with_capture_group(1),
                RegexRule::new(
                    r"\b([a-z_][A-Za-z0-9_]*)\s*[({]",
                    StyleCategory::FunctionCall,
                )?
                .with_capture_group(1),
                RegexRule::new(r"@[A-Za-z_][A-Za-z0-9_.]*", StyleCategory::Annotation)?,
                RegexRule::new(
                    r"\b(?:0[xX][0-9A-Fa-f_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)[GgLlDdFfIi]?\b",
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
    use slidecode_core::{MatchOptions, Matcher};

    fn styled(text: &str) -> Vec<(String, StyleCategory)> {
        RegexHighlighter::groovy()
            .unwrap()
            .highlight(text, &MatchOptions::default())
            .into_iter()
            .map(|r| (text[r.start..r.end].to_string(), r.category))
            .collect()
    }

    #[test]
    fn test_command_syntax_dsl_call() {
        assert_eq!(
            styled("dependencies {\n    implementation 'org:lib:1.0'\n}"),
            vec![
                ("dependencies".to_string(), StyleCategory::DslConstruct),
                ("implementation".to_string(), StyleCategory::DslConstruct),
                ("'org:lib:1.0'".to_string(), StyleCategory::String),
            ]
        );
    }

    #[test]
    fn test_single_quoted_strings_do_not_interpolate() {
        assert_eq!(
            styled(r#"def a = '$x' + "$y""#),
            vec![
                ("def".to_string(), StyleCategory::Keyword),
                ("'$x'".to_string(), StyleCategory::String),
                ("\"".to_string(), StyleCategory::String),
                ("$".to_string(), StyleCategory::Keyword),
                ("y".to_string(), StyleCategory::Property),
                ("\"".to_string(), StyleCategory::String),
            ]
        );
    }

    #[test]
    fn test_method_declaration_and_call() {
        assert_eq!(
            styled("def greet(name) { println(name) }\ngreet 42"),
            vec![
                ("def".to_string(), StyleCategory::Keyword),
                ("greet".to_string(), StyleCategory::FunctionDeclaration),
                ("println".to_string(), StyleCategory::FunctionCall),
                ("42".to_string(), StyleCategory::Number),
            ]
        );
    }

    #[test]
    fn test_apostrophe_in_comment_does_not_open_string() {
        assert_eq!(
            styled("// don't\nversion = '1.0'"),
            vec![
                ("// don't".to_string(), StyleCategory::Comment),
                ("'1.0'".to_string(), StyleCategory::String),
            ]
        );
    }
}
