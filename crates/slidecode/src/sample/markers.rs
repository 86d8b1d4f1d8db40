use super::SampleError;
use regex::{Regex, escape};
use std::collections::BTreeMap;
use std::ops::Range;

/// Delimiters of the tag markers in a sample.
///
/// With the default `{{` / `}}`, `{{name}}` opens tag `name` and `{{/name}}` closes it. Spaces
/// inside the delimiters are allowed (`{{ name }}`). Tag names use ASCII letters, digits, `_`,
/// `-` and `.`; anything else between the delimiters is left as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSyntax {
    open: String,
    close: String,
}

impl Default for TagSyntax {
    fn default() -> Self {
        Self::new("{{", "}}")
    }
}

impl TagSyntax {
    /// Markers written as `{open}name{close}` and `{open}/name{close}`.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The opening delimiter.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing delimiter.
    pub fn close(&self) -> &str {
        &self.close
    }

    fn regex(&self) -> Result<Regex, SampleError> {
        if self.open.is_empty() || self.close.is_empty() {
            return Err(SampleError::InvalidSyntax("delimiters must not be empty"));
        }
        Regex::new(&format!(
            r"{}[ \t]*(/)?[ \t]*([A-Za-z0-9_.\-]*)[ \t]*{}",
            escape(&self.open),
            escape(&self.close)
        ))
        .map_err(|_| SampleError::InvalidSyntax("delimiters do not form a valid pattern"))
    }
}

/// Sample text with markers stripped, and the byte ranges each tag covers in it.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) text: String,
    pub(crate) tags: BTreeMap<String, Vec<Range<usize>>>,
}

struct Marker<'s> {
    range: Range<usize>,
    closing: bool,
    name: &'s str,
}

/// Strip markers from `source`.
///
/// A line holding nothing but markers and whitespace is dropped entirely, so tags placed on
/// their own lines cover whole lines.
pub(crate) fn parse(source: &str, syntax: &TagSyntax) -> Result<Parsed, SampleError> {
    let pattern = syntax.regex()?;
    let mut text = String::with_capacity(source.len());
    let mut tags: BTreeMap<String, Vec<Range<usize>>> = BTreeMap::new();
    // (tag, start offset in `text`, line)
    let mut open: Vec<(String, usize, usize)> = Vec::new();

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let line_no = index + 1;
        let markers: Vec<Marker<'_>> = pattern
            .captures_iter(line)
            .filter_map(|caps| {
                Some(Marker {
                    range: caps.get(0)?.range(),
                    closing: caps.get(1).is_some(),
                    name: caps.get(2).map_or("", |m| m.as_str()),
                })
            })
            .collect();
        if markers.is_empty() {
            text.push_str(line);
            continue;
        }

        let marker_only = is_marker_only(line, &markers);
        let mut copied = 0;
        for marker in &markers {
            if !marker_only {
                text.push_str(&line[copied..marker.range.start]);
            }
            copied = marker.range.end;

            if marker.name.is_empty() {
                return Err(SampleError::EmptyTagName { line: line_no });
            }
            let pos = text.len();
            if !marker.closing {
                open.push((marker.name.to_string(), pos, line_no));
                continue;
            }
            match open.pop() {
                Some((tag, start, _)) if tag == marker.name => {
                    tags.entry(tag).or_default().push(start..pos);
                }
                Some((tag, _, _)) => {
                    return Err(SampleError::Mismatched {
                        expected: tag,
                        found: marker.name.to_string(),
                        line: line_no,
                    });
                }
                None => {
                    return Err(SampleError::UnexpectedClose {
                        tag: marker.name.to_string(),
                        line: line_no,
                    });
                }
            }
        }
        if !marker_only {
            text.push_str(&line[copied..]);
        }
    }

    if let Some((tag, _, line)) = open.pop() {
        return Err(SampleError::Unclosed { tag, line });
    }
    Ok(Parsed { text, tags })
}

fn is_marker_only(line: &str, markers: &[Marker<'_>]) -> bool {
    let mut pos = 0;
    for marker in markers {
        if !line[pos..marker.range.start].trim().is_empty() {
            return false;
        }
        pos = marker.range.end;
    }
    line[pos..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_default(source: &str) -> Result<Parsed, SampleError> {
        parse(source, &TagSyntax::default())
    }

    #[test]
    fn test_inline_markers_are_stripped() {
        let parsed = parse_default("val x = {{v}}42{{/v}}").unwrap();
        assert_eq!(parsed.text, "val x = 42");
        assert_eq!(parsed.tags["v"], vec![8..10]);
    }

    #[test]
    fn test_marker_lines_are_dropped() {
        let source = "plugins {\n    {{ p1 }}\n    java\n    {{/p1}}\n}\n";
        let parsed = parse_default(source).unwrap();
        assert_eq!(parsed.text, "plugins {\n    java\n}\n");
        assert_eq!(&parsed.text[parsed.tags["p1"][0].clone()], "    java\n");
    }

    #[test]
    fn test_nested_and_reopened_tags() {
        let parsed = parse_default("{{a}}x{{b}}y{{/b}}{{/a}} z {{a}}w{{/a}}").unwrap();
        assert_eq!(parsed.text, "xy z w");
        assert_eq!(parsed.tags["a"], vec![0..2, 5..6]);
        assert_eq!(parsed.tags["b"], vec![1..2]);
    }

    #[test]
    fn test_marker_errors() {
        assert_eq!(
            parse_default("{{a}}\nx").unwrap_err(),
            SampleError::Unclosed { tag: "a".into(), line: 1 }
        );
        assert_eq!(
            parse_default("x\n{{/a}}").unwrap_err(),
            SampleError::UnexpectedClose { tag: "a".into(), line: 2 }
        );
        assert_eq!(
            parse_default("{{a}}{{b}}{{/a}}{{/b}}").unwrap_err(),
            SampleError::Mismatched {
                expected: "b".into(),
                found: "a".into(),
                line: 1
            }
        );
        assert_eq!(
            parse_default("x {{ }} y").unwrap_err(),
            SampleError::EmptyTagName { line: 1 }
        );
    }

    #[test]
    fn test_non_marker_braces_are_text() {
        let parsed = parse_default("mapOf({{ it + 1 }})").unwrap();
        assert_eq!(parsed.text, "mapOf({{ it + 1 }})");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = TagSyntax::new("/*<", ">*/");
        let parsed = parse("a /*<t>*/b/*</t>*/", &syntax).unwrap();
        assert_eq!(parsed.text, "a b");
        assert_eq!(parsed.tags["t"], vec![2..3]);
        assert_eq!(
            parse("x", &TagSyntax::new("", "]")).unwrap_err(),
            SampleError::InvalidSyntax("delimiters must not be empty")
        );
    }
}
