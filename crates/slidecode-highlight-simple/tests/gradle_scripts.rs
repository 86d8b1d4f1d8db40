use pretty_assertions::assert_eq;
use slidecode_core::{Language, MatchOptions, Matcher, StyleCategory, StyledRange};
use slidecode_highlight_simple::matcher_for;

const BUILD_GRADLE_KTS: &str = r#"plugins {
    `java-library`
    id("org.jetbrains.kotlin.jvm") version "2.0.0"
}

// Production dependencies
dependencies {
    implementation(libs.kotlinx.coroutines.core)
    testImplementation("org.junit:junit-bom:$junitVersion")
}

tasks.test {
    useJUnitPlatform()
    maxHeapSize = "1g" /* "not a string" */
}
"#;

fn styled(language: Language, text: &str) -> Vec<(String, StyleCategory)> {
    matcher_for(language)
        .unwrap()
        .highlight(text, &MatchOptions::default())
        .into_iter()
        .map(|r| (text.chars().skip(r.start).take(r.len()).collect(), r.category))
        .collect()
}

fn assert_well_formed(ranges: &[StyledRange], text: &str) {
    let len = text.chars().count();
    for pair in ranges.windows(2) {
        assert!(pair[0].end <= pair[1].start, "overlap: {pair:?}");
    }
    for range in ranges {
        assert!(range.start < range.end && range.end <= len, "bad range {range:?}");
        assert_ne!(range.category, StyleCategory::Plain);
    }
}

#[test]
fn kotlin_build_script() {
    let styled = styled(Language::KotlinDsl, BUILD_GRADLE_KTS);
    let expect = |text: &str, category| {
        assert!(
            styled.contains(&(text.to_string(), category)),
            "missing {text:?} as {category:?} in {styled:#?}"
        );
    };

    expect("plugins", StyleCategory::DslConstruct);
    expect("`java-library`", StyleCategory::DslConstruct);
    expect("id", StyleCategory::DslConstruct);
    expect("\"org.jetbrains.kotlin.jvm\"", StyleCategory::String);
    expect("// Production dependencies", StyleCategory::Comment);
    expect("implementation", StyleCategory::DslConstruct);
    expect("libs.kotlinx.coroutines.core", StyleCategory::Property);
    expect("$", StyleCategory::Keyword);
    expect("junitVersion", StyleCategory::Property);
    expect("tasks", StyleCategory::DslConstruct);
    expect("useJUnitPlatform", StyleCategory::DslConstruct);
    expect("\"1g\"", StyleCategory::String);
    expect("/* \"not a string\" */", StyleCategory::Comment);
}

#[test]
fn every_language_produces_well_formed_ranges() {
    let samples = [
        (Language::KotlinDsl, BUILD_GRADLE_KTS),
        (Language::Groovy, "plugins { id 'java' }\n// done\ndef v = \"${x}\""),
        (Language::Yaml, "a: 'b' # c\nlist:\n  - 1\n  - \"two\"\n"),
        (Language::Toml, "[a]\nb = { c = 1 } # d\n"),
        (Language::Hocon, "a.b = ${c}\nd { e: 1s } // f\n"),
        (Language::Properties, "# a\nb=c\\\n  d\ne : f\n"),
    ];
    for (language, text) in samples {
        let ranges = matcher_for(language)
            .unwrap()
            .highlight(text, &MatchOptions::default());
        assert!(!ranges.is_empty(), "{language} produced nothing");
        assert_well_formed(&ranges, text);
    }
}

#[test]
fn empty_text_is_unstyled() {
    for language in Language::ALL {
        if let Some(matcher) = matcher_for(language) {
            assert_eq!(matcher.highlight("", &MatchOptions::default()), vec![]);
        }
    }
}

#[test]
fn non_ascii_offsets_are_characters() {
    let text = "name: \"Ünïcødé\" # ✓";
    assert_eq!(
        matcher_for(Language::Yaml)
            .unwrap()
            .highlight(text, &MatchOptions::default()),
        vec![
            StyledRange::new(0, 4, StyleCategory::Keyword),
            StyledRange::new(6, 15, StyleCategory::String),
            StyledRange::new(16, 19, StyleCategory::Comment),
        ]
    );
}

#[test]
fn identifier_style_fills_unclaimed_identifiers() {
    let style = |ident: &str| ident.starts_with("my").then_some(StyleCategory::Property);
    let options = MatchOptions::default().with_identifier_style(&style);
    let text = "val myValue = other(myArg)";
    let ranges = matcher_for(Language::KotlinDsl)
        .unwrap()
        .highlight(text, &options);
    assert_eq!(
        ranges,
        vec![
            StyledRange::new(0, 3, StyleCategory::Keyword),
            StyledRange::new(4, 11, StyleCategory::Property),
            StyledRange::new(14, 19, StyleCategory::FunctionCall),
            StyledRange::new(20, 25, StyleCategory::Property),
        ]
    );
}

#[test]
fn gradle_properties_continued_jvm_args() {
    let text = "org.gradle.jvmargs=-Xmx2g \\\n  -Dfile.encoding=UTF-8 \\\n# not a comment\nkotlin.code.style=official\n";
    assert_eq!(
        styled(Language::Properties, text),
        vec![
            ("org.gradle.jvmargs".to_string(), StyleCategory::Keyword),
            ("kotlin.code.style".to_string(), StyleCategory::Keyword),
        ]
    );
}
