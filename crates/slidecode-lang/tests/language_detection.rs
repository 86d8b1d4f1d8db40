use slidecode_lang::{CodeScope, Language, UnknownLanguage};
use std::path::Path;

#[test]
fn test_detects_gradle_build_scripts() {
    assert_eq!(
        Language::from_path(Path::new("app/build.gradle.kts")),
        Ok(Language::KotlinDsl)
    );
    assert_eq!(
        Language::from_path(Path::new("settings.gradle")),
        Ok(Language::Groovy)
    );
    assert_eq!(
        Language::from_path(Path::new("gradle/libs.versions.toml")),
        Ok(Language::Toml)
    );
}

#[test]
fn test_detects_config_formats() {
    assert_eq!(Language::from_path(Path::new("pom.xml")), Ok(Language::Xml));
    assert_eq!(
        Language::from_path(Path::new("src/main/resources/application.conf")),
        Ok(Language::Hocon)
    );
    assert_eq!(
        Language::from_path(Path::new("gradle.properties")),
        Ok(Language::Properties)
    );
    assert_eq!(
        Language::from_path(Path::new(".github/workflows/ci.yml")),
        Ok(Language::Yaml)
    );
}

#[test]
fn test_unknown_files_are_reported_by_name() {
    assert_eq!(
        Language::from_path(Path::new("src/main.rs")),
        Err(UnknownLanguage("main.rs".to_string()))
    );
    assert_eq!(
        Language::from_path(Path::new("Makefile")),
        Err(UnknownLanguage("Makefile".to_string()))
    );
}

#[test]
fn test_from_str_and_display() {
    let language: Language = "groovy".parse().unwrap();
    assert_eq!(language, Language::Groovy);
    assert_eq!(language.to_string(), "Groovy");
    assert!("cobol".parse::<Language>().is_err());
}

#[test]
fn test_serde_uses_kebab_case_tags() {
    let language: Language = serde_yaml::from_str("kotlin-dsl").unwrap();
    assert_eq!(language, Language::KotlinDsl);
    let scope: CodeScope = serde_yaml::from_str("body").unwrap();
    assert_eq!(scope, CodeScope::Body);
    assert_eq!(CodeScope::default(), CodeScope::File);
}
