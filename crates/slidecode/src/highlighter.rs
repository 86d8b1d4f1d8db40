use once_cell::sync::Lazy;
use slidecode_core::{
    CodeScope, CodeStyle, HighlightedText, IdentifierStyle, Language, MatchOptions, Matcher,
};
use slidecode_treesitter::XmlMatcher;

static XML: Lazy<Option<XmlMatcher>> = Lazy::new(|| match XmlMatcher::new() {
    Ok(matcher) => Some(matcher),
    Err(err) => {
        tracing::warn!(error = %err, "xml highlighting unavailable");
        None
    }
});

/// The matcher for `language`, or `None` if the language is never styled.
pub fn matcher(language: Language) -> Option<&'static dyn Matcher> {
    match language {
        Language::Xml => XML.as_ref().map(|m| m as &dyn Matcher),
        Language::Text => None,
        _ => slidecode_highlight_simple::matcher_for(language).map(|m| m as &dyn Matcher),
    }
}

/// Highlight `text` as `language`.
///
/// Never fails: malformed input is highlighted on a best-effort basis, and [`Language::Text`]
/// comes back unstyled. `identifier_style` is offered every identifier the Kotlin DSL and
/// Groovy highlighters leave unstyled.
///
/// ```rust
/// use slidecode::{CodeScope, CodeStyle, Language, StyleCategory, highlight};
///
/// let out = highlight("key: value\n", Language::Yaml, &CodeStyle::darcula(), CodeScope::File, None);
/// assert_eq!(out.texts_of(StyleCategory::Keyword), vec!["key"]);
/// ```
pub fn highlight(
    text: &str,
    language: Language,
    style: &CodeStyle,
    scope: CodeScope,
    identifier_style: Option<IdentifierStyle<'_>>,
) -> HighlightedText {
    let Some(matcher) = matcher(language) else {
        return HighlightedText::plain(text, style.clone());
    };

    let options = MatchOptions {
        scope,
        identifier_style,
    };
    let spans = matcher.highlight(text, &options);
    tracing::debug!(%language, ?scope, spans = spans.len(), "highlighted");
    HighlightedText::new(text, spans, style.clone())
}

/// Reusable highlighting options: palette, scope and identifier style.
///
/// ```rust
/// use slidecode::{CodeScope, CodeStyle, Highlighter, Language};
///
/// let highlighter = Highlighter::new(CodeStyle::light()).with_scope(CodeScope::Body);
/// let out = highlighter.highlight("<a/>\n<b/>", Language::Xml);
/// assert!(!out.spans().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Highlighter<'a> {
    style: CodeStyle,
    scope: CodeScope,
    identifier_style: Option<IdentifierStyle<'a>>,
}

impl<'a> Highlighter<'a> {
    /// A highlighter using `style` for whole files.
    pub fn new(style: CodeStyle) -> Self {
        Self {
            style,
            scope: CodeScope::File,
            identifier_style: None,
        }
    }

    /// Set the scope texts are highlighted in.
    pub fn with_scope(mut self, scope: CodeScope) -> Self {
        self.scope = scope;
        self
    }

    /// Style otherwise-unstyled identifiers with `identifier_style`.
    pub fn with_identifier_style(mut self, identifier_style: IdentifierStyle<'a>) -> Self {
        self.identifier_style = Some(identifier_style);
        self
    }

    /// The palette.
    pub fn style(&self) -> &CodeStyle {
        &self.style
    }

    /// The scope.
    pub fn scope(&self) -> CodeScope {
        self.scope
    }

    /// Highlight `text` as `language`. See [`highlight`].
    pub fn highlight(&self, text: &str, language: Language) -> HighlightedText {
        highlight(
            text,
            language,
            &self.style,
            self.scope,
            self.identifier_style,
        )
    }
}

impl std::fmt::Debug for Highlighter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("style", &self.style)
            .field("scope", &self.scope)
            .field("identifier_style", &self.identifier_style.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidecode_core::StyleCategory;

    #[test]
    fn test_every_language_dispatches_to_its_matcher() {
        for language in Language::ALL {
            match matcher(language) {
                Some(m) => assert_eq!(m.language(), language),
                None => assert_eq!(language, Language::Text),
            }
        }
    }

    #[test]
    fn test_text_is_never_styled() {
        let out = highlight(
            "val x = 1 // not kotlin",
            Language::Text,
            &CodeStyle::default(),
            CodeScope::File,
            None,
        );
        assert!(out.spans().is_empty());
        assert_eq!(out.text(), "val x = 1 // not kotlin");
    }

    #[test]
    fn test_yaml_key_and_comment() {
        let out = highlight(
            "key: value\n# comment\n",
            Language::Yaml,
            &CodeStyle::default(),
            CodeScope::File,
            None,
        );
        assert_eq!(out.texts_of(StyleCategory::Keyword), vec!["key"]);
        assert_eq!(out.texts_of(StyleCategory::Comment), vec!["# comment"]);
        assert_eq!(out.category_at(5), StyleCategory::Plain);
    }

    #[test]
    fn test_highlighter_passes_identifier_style() {
        let style = |ident: &str| (ident == "x").then_some(StyleCategory::Property);
        let highlighter = Highlighter::default().with_identifier_style(&style);
        let out = highlighter.highlight("val x = y", Language::KotlinDsl);
        assert_eq!(out.texts_of(StyleCategory::Property), vec!["x"]);
        assert_eq!(out.category_at(8), StyleCategory::Plain);
    }
}
