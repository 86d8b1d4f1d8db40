//! Step scripts: one command per line, `---` between states.
//!
//! ```text
//! # hide everything but the skeleton
//! hide deps tests
//! ---
//! reveal deps
//! focus deps
//! ---
//! reveal tests
//! focus tests noscroll
//! ```

use crate::error::DemoError;
use slidecode::sample::{CodeSample, RenderedSample, SampleState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Hide(Vec<String>),
    Reveal(Vec<String>),
    Focus { tag: String, scroll: bool },
    Unfocus,
}

impl Step {
    fn apply(&self, state: &SampleState) -> SampleState {
        match self {
            Self::Hide(tags) => state.hide(tags.iter().cloned()),
            Self::Reveal(tags) => state.reveal(tags.iter().cloned()),
            Self::Focus { tag, scroll } => state.focus_with_scroll(tag.clone(), *scroll),
            Self::Unfocus => state.unfocus(),
        }
    }
}

/// Parse a script into the steps of each state.
pub fn parse_steps(script: &str) -> Result<Vec<Vec<Step>>, DemoError> {
    let mut states = vec![Vec::new()];

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "---" {
            states.push(Vec::new());
            continue;
        }

        let error = |message: &str| DemoError::Step {
            line: index + 1,
            message: message.to_string(),
        };
        let mut words = line.split_whitespace();
        let step = match (words.next(), words.collect::<Vec<_>>().as_slice()) {
            (Some("hide"), []) | (Some("reveal"), []) => return Err(error("expected tag names")),
            (Some("hide"), tags) => Step::Hide(tags.iter().map(|t| t.to_string()).collect()),
            (Some("reveal"), tags) => Step::Reveal(tags.iter().map(|t| t.to_string()).collect()),
            (Some("focus"), [tag]) => Step::Focus {
                tag: tag.to_string(),
                scroll: true,
            },
            (Some("focus"), [tag, "noscroll"]) => Step::Focus {
                tag: tag.to_string(),
                scroll: false,
            },
            (Some("focus"), _) => return Err(error("expected `focus <tag> [noscroll]`")),
            (Some("unfocus"), []) => Step::Unfocus,
            (Some("unfocus"), _) => return Err(error("`unfocus` takes no arguments")),
            (Some(other), _) => return Err(error(&format!("unknown command `{other}`"))),
            (None, _) => continue,
        };
        if let Some(current) = states.last_mut() {
            current.push(step);
        }
    }

    // A trailing separator doesn't add an empty state.
    if states.len() > 1 && states.last().is_some_and(Vec::is_empty) {
        states.pop();
    }
    Ok(states)
}

/// Render every state of `sample` described by `script`.
pub fn render_states(
    sample: &CodeSample,
    states: &[Vec<Step>],
) -> Result<Vec<RenderedSample>, DemoError> {
    let apply_all = |steps: &[Step], state: &SampleState| {
        steps
            .iter()
            .fold(state.clone(), |state, step| step.apply(&state))
    };

    let Some((first, rest)) = states.split_first() else {
        return Ok(vec![sample.render(&SampleState::new())]);
    };
    let mut sequence = sample.start_with(|s| apply_all(first, s));
    for steps in rest {
        sequence = sequence.then(|s| apply_all(steps, s));
    }
    Ok(sequence.render()?)
}
