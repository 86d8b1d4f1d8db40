use crate::patterns::{DOUBLE_QUOTED, TRIPLE_DOUBLE_QUOTED, comment_pattern, comments_rule, strings_rule};
use crate::rule::{RegexHighlighter, RegexRule};
use slidecode_core::{Language, StyleCategory};

const TRIPLE_SINGLE_QUOTED: &str = r"'''(?s:.*?)(?:'''|\z)";
const LITERAL: &str = r"'[^'\n]*'?";

/// Bare or dotted key, e.g. `version.ref`.
const KEY: &str = r"[A-Za-z0-9_\-]+(?:[ \t]*\.[ \t]*[A-Za-z0-9_\-]+)*";

impl RegexHighlighter {
    /// TOML, including Gradle version catalogs.
    ///
    /// Passes, in order: strings → comments → table headers → keys → booleans → date-times →
    /// numbers.
    pub fn toml() -> Result<Self, regex::Error> {
        let strings =
            format!("{TRIPLE_DOUBLE_QUOTED}|{TRIPLE_SINGLE_QUOTED}|{DOUBLE_QUOTED}|{LITERAL}");
        let comments = comment_pattern(Language::Toml.comments());

        Ok(Self::new(
            Language::Toml,
            vec![
                strings_rule(&strings, &comments)?,
                comments_rule(&strings, &comments)?,
                // [table], [[array.of.tables]]
                RegexRule::new(r"(?m)^[ \t]*(\[\[?[^\[\]\n]*\]\]?)", StyleCategory::DslConstruct)?
                    .with_capture_group(1),
                // key = ..., also inside inline tables
                RegexRule::new(
                    &format!(r"(?m)(?:^[ \t]*|[{{,][ \t]*)({KEY})[ \t]*="),
                    StyleCategory::Keyword,
                )?
                .with_capture_group(1),
                RegexRule::new(r"\b(?:true|false)\b", StyleCategory::Keyword)?,
                RegexRule::new(
                    r"\b\d{4}-\d{2}-\d{2}(?:[Tt ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[Zz]|[+-]\d{2}:\d{2})?)?|\b\d{2}:\d{2}:\d{2}(?:\.\d+)?",
                    StyleCategory::Number,
                )?,
                RegexRule::new(
                    r"[+-]?\b(?:0x[0-9A-Fa-f_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d[\d_]*)?)\b|[+-]?\b(?:inf|nan)\b",
                    StyleCategory::Number,
                )?,
            ],
        ))
    }
}
