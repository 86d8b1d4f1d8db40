use crate::patterns::comment_pattern;
use crate::rule::{RegexHighlighter, RegexRule};
use slidecode_core::{Language, StyleCategory};

/// Rest of a logical line: escapes, and `\` + newline joining the next physical line.
const LOGICAL_LINE_REST: &str = r"(?:\\(?:\r?\n|[^\n])|[^\\\n])*";

impl RegexHighlighter {
    /// Java `.properties`.
    ///
    /// Passes, in order: logical lines (comment or key) → escape sequences.
    ///
    /// A logical line runs through every `\`-continued physical line, so a continuation line
    /// starting with `#` or a key-like word is part of the value.
    pub fn properties() -> Result<Self, regex::Error> {
        let comments = comment_pattern(Language::Properties.comments());
        let logical_line =
            format!(r"(?m)({comments})|^[ \t]*((?:\\[^\n]|[^\s=:\\])+)?{LOGICAL_LINE_REST}");

        Ok(Self::new(
            Language::Properties,
            vec![
                // key=value, key: value, key value
                RegexRule::new(&logical_line, StyleCategory::Keyword)?.with_group_styles(&[
                    (1, StyleCategory::Comment),
                    (2, StyleCategory::Keyword),
                ]),
                RegexRule::new(
                    r"\\(?:u[0-9A-Fa-f]{4}|[tnrf\\=:#! ])",
                    StyleCategory::String,
                )?,
            ],
        ))
    }
}
