use crate::patterns::{DOUBLE_QUOTED, TRIPLE_DOUBLE_QUOTED, comment_pattern, comments_rule, strings_rule};
use crate::rule::{RegexHighlighter, RegexRule, standalone_scalar};
use slidecode_core::{Language, StyleCategory};

impl RegexHighlighter {
    /// HOCON (`application.conf`).
    ///
    /// Passes, in order: strings → comments → substitutions → `include` → keys →
    /// booleans/null → numbers (durations and sizes keep their unit).
    pub fn hocon() -> Result<Self, regex::Error> {
        let strings = format!("{TRIPLE_DOUBLE_QUOTED}|{DOUBLE_QUOTED}");
        let comments = comment_pattern(Language::Hocon.comments());

        Ok(Self::new(
            Language::Hocon,
            vec![
                strings_rule(&strings, &comments)?,
                comments_rule(&strings, &comments)?,
                // ${path}, ${?optional.path}
                RegexRule::new(r"\$\{\??[^}\n]*\}?", StyleCategory::Property)?,
                RegexRule::new(r"(?m)^[ \t]*(include)\b", StyleCategory::Keyword)?
                    .with_capture_group(1),
                // key = ..., key: ..., key { ..., key += ...
                RegexRule::new(
                    r"(?m)(?:^[ \t]*|[{,][ \t]*)([A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)*)[ \t]*(?:[:=]|\+=|\{)",
                    StyleCategory::Keyword,
                )?
                .with_capture_group(1),
                RegexRule::new(r"\b(?:true|false|yes|no|on|off|null)\b", StyleCategory::Keyword)?
                    .with_guard(standalone_scalar),
                RegexRule::new(
                    r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?(?:[a-zA-Z]+)?\b",
                    StyleCategory::Number,
                )?,
            ],
        ))
    }
}
