use slidecode_core::{
    CodeScope, Language, MatchOptions, Matcher, StyleApplier, StyleCategory,
};
use std::ops::Range;
use tree_sitter::{Node, Parser};

/// Synthetic root wrapped around [`CodeScope::Body`] fragments.
const BODY_OPEN: &str = "<body>";
const BODY_CLOSE: &str = "</body>";

/// Errors produced when setting up an [`XmlMatcher`].
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The bundled grammar is incompatible with the linked Tree-sitter runtime.
    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// Where a node sits, for tokens whose style depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Markup,
    /// Inside `<?xml ... ?>`.
    Declaration,
    /// Inside a processing instruction `<?target ... ?>`.
    Instruction,
}

/// Grammar-based XML highlighter.
///
/// A parser is created per call. Documents that don't parse cleanly are left unstyled rather
/// than half-highlighted.
///
/// With [`CodeScope::Body`] the text is parsed inside a synthetic root element, so fragments
/// with several top-level elements highlight. A leading prolog (`<?xml ...?>`, comments,
/// processing instructions, `<!DOCTYPE ...>`) is kept in front of that root.
#[derive(Debug, Clone)]
pub struct XmlMatcher {
    language: tree_sitter::Language,
}

impl XmlMatcher {
    /// Create a matcher using the bundled Tree-sitter XML grammar.
    pub fn new() -> Result<Self, XmlError> {
        let language: tree_sitter::Language = tree_sitter_xml::LANGUAGE_XML.into();
        // Fail here rather than on every call if the grammar's ABI doesn't match.
        Parser::new().set_language(&language)?;
        Ok(Self { language })
    }

    fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = Parser::new();
        if let Err(err) = parser.set_language(&self.language) {
            tracing::debug!(error = %err, "xml grammar rejected by parser");
            return None;
        }
        parser.parse(source, None)
    }
}

impl Matcher for XmlMatcher {
    fn language(&self) -> Language {
        Language::Xml
    }

    fn apply(&self, applier: &mut StyleApplier<'_>, options: &MatchOptions<'_>) {
        let text = applier.text();
        if text.trim().is_empty() {
            return;
        }

        let wrapped;
        let (source, layout) = match options.scope {
            CodeScope::File => (text, Layout::file(text)),
            CodeScope::Body => {
                // The prolog must stay outside the synthetic root to remain valid.
                let prolog = prolog_len(text);
                wrapped = format!(
                    "{}{BODY_OPEN}{}{BODY_CLOSE}",
                    &text[..prolog],
                    &text[prolog..]
                );
                (wrapped.as_str(), Layout::body(text, prolog))
            }
        };

        let Some(tree) = self.parse(source) else {
            tracing::debug!(scope = ?options.scope, "xml parse failed; leaving text unstyled");
            return;
        };
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!(
                scope = ?options.scope,
                "xml document has syntax errors; leaving text unstyled"
            );
            return;
        }

        let mut styled = 0usize;
        let mut stack = vec![(root, Context::Markup)];
        let mut children = Vec::new();
        while let Some((node, context)) = stack.pop() {
            if let Some(category) = classify(node, context) {
                if let Some(range) = layout.map_range(node.byte_range())
                    && applier.claim(range, category)
                {
                    styled += 1;
                    if node.kind() == "AttValue" {
                        overlay_references(applier, node, &layout);
                    }
                }
                continue;
            }

            let context = match node.kind() {
                "XMLDecl" => Context::Declaration,
                "PI" => Context::Instruction,
                _ => context,
            };
            let mut cursor = node.walk();
            children.extend(node.children(&mut cursor));
            stack.extend(children.drain(..).rev().map(|child| (child, context)));
        }

        tracing::trace!(scope = ?options.scope, ranges = styled, "xml highlight");
    }
}

/// Where the caller's text sits inside the parsed source.
///
/// The source is `text[..prolog]`, then `shift` bytes of synthetic markup, then the rest of the
/// text.
#[derive(Debug, Clone, Copy)]
struct Layout {
    prolog: usize,
    shift: usize,
    len: usize,
}

impl Layout {
    fn file(text: &str) -> Self {
        Self {
            prolog: text.len(),
            shift: 0,
            len: text.len(),
        }
    }

    fn body(text: &str, prolog: usize) -> Self {
        Self {
            prolog,
            shift: BODY_OPEN.len(),
            len: text.len(),
        }
    }

    /// Map a source range back to the text, or `None` if it touches synthetic markup.
    fn map_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.end <= self.prolog {
            return Some(range);
        }
        let body = self.prolog + self.shift..self.len + self.shift;
        (range.start >= body.start && range.end <= body.end)
            .then(|| range.start - self.shift..range.end - self.shift)
    }
}

/// Style entity and character references inside an already claimed attribute value.
fn overlay_references(applier: &mut StyleApplier<'_>, value: Node<'_>, layout: &Layout) {
    let mut cursor = value.walk();
    for child in value.children(&mut cursor) {
        if matches!(child.kind(), "EntityRef" | "CharRef")
            && let Some(range) = layout.map_range(child.byte_range())
        {
            applier.overlay(range, StyleCategory::Entity);
        }
    }
}

/// Byte length of the leading XML declaration, processing instructions, comments and doctype.
fn prolog_len(text: &str) -> usize {
    let mut pos = 0;
    loop {
        let rest = &text[pos..];
        let item = rest.trim_start();
        let len = if item.starts_with("<?") {
            item.find("?>").map(|i| i + 2)
        } else if item.starts_with("<!--") {
            item.find("-->").map(|i| i + 3)
        } else if item.starts_with("<!DOCTYPE") {
            doctype_len(item)
        } else {
            None
        };
        match len {
            Some(len) => pos += rest.len() - item.len() + len,
            None => return pos,
        }
    }
}

fn doctype_len(decl: &str) -> Option<usize> {
    let close = decl.find(['[', '>'])?;
    if decl.as_bytes()[close] == b'>' {
        return Some(close + 1);
    }
    // Internal subset: `[ ... ]>`
    let subset_end = close + decl[close..].find(']')?;
    Some(subset_end + decl[subset_end..].find('>')? + 1)
}

/// Category for `node`, or `None` to descend into its children.
///
/// A classified node is styled as a whole.
fn classify(node: Node<'_>, context: Context) -> Option<StyleCategory> {
    let category = match node.kind() {
        "Comment" => StyleCategory::Comment,
        "AttValue" | "CData" => StyleCategory::String,
        "EntityRef" | "CharRef" | "PEReference" => StyleCategory::Entity,
        "doctypedecl" => StyleCategory::Keyword,
        "Name" => match node.parent()?.kind() {
            "STag" | "ETag" | "EmptyElemTag" => StyleCategory::Tag,
            "Attribute" => StyleCategory::Attribute,
            _ => return None,
        },
        "<" | "</" | ">" | "/>" | "=" | "CDStart" | "]]>" => StyleCategory::Punctuation,
        "<?" | "?>" | "<?xml" | "xml" | "PITarget" => StyleCategory::Keyword,
        "version" | "encoding" | "standalone" if context == Context::Declaration => {
            StyleCategory::Attribute
        }
        "VersionNum" | "EncName" | "\"" | "'" | "yes" | "no"
            if context == Context::Declaration =>
        {
            StyleCategory::String
        }
        _ => return None,
    };
    Some(category)
}
