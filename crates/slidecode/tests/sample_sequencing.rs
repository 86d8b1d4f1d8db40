use pretty_assertions::assert_eq;
use slidecode::sample::{CodeSample, SampleError, SampleState};
use slidecode::{Highlighter, Language, StyleCategory};

fn walkthrough() -> CodeSample {
    CodeSample::parse(include_str!("fixtures/walkthrough.gradle.kts")).unwrap()
}

#[test]
fn reveal_after_hide() {
    let sample = CodeSample::parse("a{{p1}} b{{/p1}}{{p2}} c{{/p2}}").unwrap();
    let states = sample
        .start_with(|s| s.hide(["p1", "p2"]))
        .then(|s| s.reveal(["p1"]))
        .build()
        .unwrap();

    assert_eq!(states.len(), 2);
    assert!(!states[1].is_hidden("p1"));
    assert!(states[1].is_hidden("p2"));
    assert_eq!(sample.render(&states[1]).text, "a b");
}

#[test]
fn unfocus_keeps_visibility() {
    let sample = CodeSample::parse("{{p1}}x{{/p1}}{{p2}}y{{/p2}}").unwrap();
    let states = sample
        .start_with(|s| s.hide(["p2"]))
        .then(|s| s.focus("p1"))
        .then(|s| s.unfocus())
        .build()
        .unwrap();

    assert_eq!(states[1].focused().map(|f| f.tag.as_str()), Some("p1"));
    assert_eq!(states[2].focused(), None);
    assert_eq!(
        states[2].hidden().collect::<Vec<_>>(),
        states[1].hidden().collect::<Vec<_>>()
    );
}

#[test]
fn unknown_tags_are_rejected_on_build() {
    let sample = CodeSample::parse("{{p1}}x{{/p1}}").unwrap();
    let err = sample
        .start_with(|s| s.hide(["p1"]))
        .then(|s| s.focus("nope"))
        .build()
        .unwrap_err();
    assert_eq!(err, SampleError::UnknownTag("nope".to_string()));
    assert_eq!(err.to_string(), "unknown tag `nope`");
}

#[test]
fn hiding_a_reopened_tag_removes_every_occurrence() {
    let sample = walkthrough();
    let rendered = sample.render(&SampleState::new().hide(["app"]));
    assert!(!rendered.text.contains("application"));
    assert!(!rendered.text.contains("mainClass"));
    assert!(rendered.text.ends_with("    testImplementation(kotlin(\"test\"))\n}\n"));
}

#[test]
fn focus_range_follows_hidden_text() {
    let sample = walkthrough();
    let rendered = sample.render(&SampleState::new().hide(["app", "core"]).focus("tests"));
    assert_eq!(
        rendered.focused_text(),
        Some("    testImplementation(kotlin(\"test\"))\n")
    );
    assert!(rendered.scroll);

    let quiet = sample.render(&SampleState::new().focus_with_scroll("tests", false));
    assert!(quiet.focus.is_some());
    assert!(!quiet.scroll);
}

#[test]
fn focus_on_hidden_tag_is_none() {
    let sample = walkthrough();
    let rendered = sample.render(&SampleState::new().hide(["tests"]).focus("tests"));
    assert_eq!(rendered.focus, None);
    assert!(!rendered.scroll);
}

#[test]
fn rendered_states_highlight() {
    let sample = walkthrough();
    let rendered = sample
        .start_with(|s| s.hide(["core", "tests", "app"]))
        .then(|s| s.reveal(["core"]).focus("core"))
        .render()
        .unwrap();

    let highlighter = Highlighter::default();
    let first = rendered[0].highlight(&highlighter, Language::KotlinDsl);
    assert!(first.texts_of(StyleCategory::Property).is_empty());

    let second = rendered[1].highlight(&highlighter, Language::KotlinDsl);
    assert_eq!(
        second.texts_of(StyleCategory::Property),
        vec!["libs.kotlinx.coroutines.core"]
    );
    assert_eq!(
        rendered[1].focused_text(),
        Some("    implementation(libs.kotlinx.coroutines.core)\n")
    );
}
