//! Gradle build-script vocabulary shared by the Kotlin and Groovy DSL highlighters.

/// Configuration blocks (`plugins { ... }`, `dependencies { ... }`).
pub(crate) const DSL_BLOCKS: &[&str] = &[
    "allprojects",
    "android",
    "application",
    "buildscript",
    "configurations",
    "dependencies",
    "dependencyResolutionManagement",
    "extensions",
    "java",
    "kotlin",
    "pluginManagement",
    "plugins",
    "project",
    "publications",
    "publishing",
    "repositories",
    "rootProject",
    "sourceSets",
    "subprojects",
    "tasks",
    "versionCatalogs",
];

/// Functions with DSL meaning (`implementation(...)`, `id(...)`, `mavenCentral()`).
pub(crate) const DSL_CALLS: &[&str] = &[
    "alias",
    "annotationProcessor",
    "api",
    "apply",
    "classpath",
    "compileOnly",
    "create",
    "enforcedPlatform",
    "fileTree",
    "files",
    "getByName",
    "google",
    "gradlePluginPortal",
    "id",
    "implementation",
    "include",
    "jvmToolchain",
    "kapt",
    "ksp",
    "maven",
    "mavenCentral",
    "mavenLocal",
    "named",
    "platform",
    "register",
    "runtimeOnly",
    "testCompileOnly",
    "testImplementation",
    "testRuntimeOnly",
    "useJUnitPlatform",
    "version",
];
