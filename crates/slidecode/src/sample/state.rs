use std::collections::BTreeSet;

/// The focused tag of a [`SampleState`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Focus {
    /// The focused tag.
    pub tag: String,
    /// Whether the view should scroll the focused range into view.
    pub scroll: bool,
}

/// One display state of a code sample: which tags are hidden, and which one is focused.
///
/// States are immutable; every operation returns a new state.
///
/// ```rust
/// use slidecode::sample::SampleState;
///
/// let first = SampleState::new().hide(["p1", "p2"]);
/// let second = first.reveal(["p1"]).focus("p1");
/// assert!(second.is_hidden("p2") && !second.is_hidden("p1"));
/// assert_eq!(second.unfocus().focused(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleState {
    hidden: BTreeSet<String>,
    focus: Option<Focus>,
}

impl SampleState {
    /// Everything visible, nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide `tags`.
    #[must_use]
    pub fn hide<I>(&self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut next = self.clone();
        next.hidden.extend(tags.into_iter().map(Into::into));
        next
    }

    /// Show `tags` again.
    #[must_use]
    pub fn reveal<I>(&self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut next = self.clone();
        for tag in tags {
            let tag: String = tag.into();
            next.hidden.remove(&tag);
        }
        next
    }

    /// Focus `tag`, scrolling it into view.
    #[must_use]
    pub fn focus(&self, tag: impl Into<String>) -> Self {
        self.focus_with_scroll(tag, true)
    }

    /// Focus `tag`; `scroll` controls whether the view follows it.
    #[must_use]
    pub fn focus_with_scroll(&self, tag: impl Into<String>, scroll: bool) -> Self {
        Self {
            hidden: self.hidden.clone(),
            focus: Some(Focus {
                tag: tag.into(),
                scroll,
            }),
        }
    }

    /// Drop the focus. Visibility is unchanged.
    #[must_use]
    pub fn unfocus(&self) -> Self {
        Self {
            hidden: self.hidden.clone(),
            focus: None,
        }
    }

    /// Whether `tag` is hidden.
    pub fn is_hidden(&self, tag: &str) -> bool {
        self.hidden.contains(tag)
    }

    /// Hidden tags, sorted.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }

    /// The focus, if any.
    pub fn focused(&self) -> Option<&Focus> {
        self.focus.as_ref()
    }

    /// Every tag the state refers to.
    pub(crate) fn referenced_tags(&self) -> impl Iterator<Item = &str> {
        self.hidden()
            .chain(self.focus.as_ref().map(|f| f.tag.as_str()))
    }
}
