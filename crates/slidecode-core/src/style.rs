//! Semantic style categories and the palette that maps them to visual styles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Semantic category assigned to a slice of highlighted text.
///
/// Matchers only ever produce categories; the host decides what they look like through a
/// [`CodeStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    /// Unstyled text. Never appears in highlighting output.
    Plain,
    /// Language keywords (`val`, `def`, `true`) and keys of configuration formats.
    Keyword,
    /// String literals and attribute values.
    String,
    /// Numeric, date and time literals.
    Number,
    /// Line and block comments.
    Comment,
    /// Properties, interpolated variables and version-catalog accessors.
    Property,
    /// Name of a declared function.
    FunctionDeclaration,
    /// Name of a called function.
    FunctionCall,
    /// Build-DSL blocks and calls (`plugins`, `dependencies`, `implementation`).
    DslConstruct,
    /// Annotations (`@Suppress`).
    Annotation,
    /// XML element names.
    Tag,
    /// XML attribute names.
    Attribute,
    /// XML entity and character references.
    Entity,
    /// Structural delimiters (`<`, `/>`, `=`, `---`).
    Punctuation,
}

impl StyleCategory {
    /// Every category, in declaration order.
    pub const ALL: [StyleCategory; 14] = [
        Self::Plain,
        Self::Keyword,
        Self::String,
        Self::Number,
        Self::Comment,
        Self::Property,
        Self::FunctionDeclaration,
        Self::FunctionCall,
        Self::DslConstruct,
        Self::Annotation,
        Self::Tag,
        Self::Attribute,
        Self::Entity,
        Self::Punctuation,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self {
                a: (value >> 24) as u8,
                ..Self::from_hex(value & 0x00FF_FFFF)
            }),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// Visual style descriptor for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanStyle {
    /// Foreground color; `None` inherits the host's text color.
    pub color: Option<Color>,
    /// Bold weight.
    pub bold: bool,
    /// Italic.
    pub italic: bool,
    /// Underline.
    pub underline: bool,
}

impl SpanStyle {
    /// A style with just a color.
    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Make the style bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the style italic.
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Make the style underlined.
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Errors produced while loading a [`CodeStyle`] palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("invalid color '{0}', expected #RRGGBB or #AARRGGBB")]
    /// A color string was not a hex color.
    InvalidColor(String),
}

/// Built-in palette a palette file can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteBase {
    /// [`CodeStyle::darcula`]
    #[default]
    Darcula,
    /// [`CodeStyle::light`]
    Light,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    base: PaletteBase,
    #[serde(default)]
    styles: BTreeMap<StyleCategory, SpanStyle>,
}

/// A fixed palette mapping every [`StyleCategory`] to a [`SpanStyle`].
///
/// Palettes are immutable once built and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    styles: [SpanStyle; StyleCategory::ALL.len()],
}

impl CodeStyle {
    /// Dark palette modelled on IntelliJ Darcula.
    pub fn darcula() -> Self {
        Self::from_fn(|category| match category {
            StyleCategory::Plain => SpanStyle::color(Color::from_hex(0xA9B7C6)),
            StyleCategory::Keyword => SpanStyle::color(Color::from_hex(0xCC7832)).bold(),
            StyleCategory::String => SpanStyle::color(Color::from_hex(0x6A8759)),
            StyleCategory::Number => SpanStyle::color(Color::from_hex(0x6897BB)),
            StyleCategory::Comment => SpanStyle::color(Color::from_hex(0x808080)).italic(),
            StyleCategory::Property => SpanStyle::color(Color::from_hex(0x9876AA)),
            StyleCategory::FunctionDeclaration => SpanStyle::color(Color::from_hex(0xFFC66D)),
            StyleCategory::FunctionCall => SpanStyle::color(Color::from_hex(0xA9B7C6)).italic(),
            StyleCategory::DslConstruct => SpanStyle::color(Color::from_hex(0xFFC66D)).italic(),
            StyleCategory::Annotation => SpanStyle::color(Color::from_hex(0xBBB529)),
            StyleCategory::Tag => SpanStyle::color(Color::from_hex(0xE8BF6A)),
            StyleCategory::Attribute => SpanStyle::color(Color::from_hex(0xBABABA)),
            StyleCategory::Entity => SpanStyle::color(Color::from_hex(0x6D9CBE)),
            StyleCategory::Punctuation => SpanStyle::color(Color::from_hex(0xE8BF6A)),
        })
    }

    /// Light palette modelled on IntelliJ Light.
    pub fn light() -> Self {
        Self::from_fn(|category| match category {
            StyleCategory::Plain => SpanStyle::color(Color::from_hex(0x080808)),
            StyleCategory::Keyword => SpanStyle::color(Color::from_hex(0x0033B3)).bold(),
            StyleCategory::String => SpanStyle::color(Color::from_hex(0x067D17)),
            StyleCategory::Number => SpanStyle::color(Color::from_hex(0x1750EB)),
            StyleCategory::Comment => SpanStyle::color(Color::from_hex(0x8C8C8C)).italic(),
            StyleCategory::Property => SpanStyle::color(Color::from_hex(0x871094)),
            StyleCategory::FunctionDeclaration => SpanStyle::color(Color::from_hex(0x00627A)),
            StyleCategory::FunctionCall => SpanStyle::color(Color::from_hex(0x080808)).italic(),
            StyleCategory::DslConstruct => SpanStyle::color(Color::from_hex(0x00627A)).italic(),
            StyleCategory::Annotation => SpanStyle::color(Color::from_hex(0x9E880D)),
            StyleCategory::Tag => SpanStyle::color(Color::from_hex(0x0033B3)),
            StyleCategory::Attribute => SpanStyle::color(Color::from_hex(0x174AD4)),
            StyleCategory::Entity => SpanStyle::color(Color::from_hex(0x0037A6)),
            StyleCategory::Punctuation => SpanStyle::color(Color::from_hex(0x0033B3)),
        })
    }

    /// Build a palette from a function of the category.
    pub fn from_fn(f: impl FnMut(StyleCategory) -> SpanStyle) -> Self {
        Self {
            styles: StyleCategory::ALL.map(f),
        }
    }

    /// Built-in palette for `base`.
    pub fn base(base: PaletteBase) -> Self {
        match base {
            PaletteBase::Darcula => Self::darcula(),
            PaletteBase::Light => Self::light(),
        }
    }

    /// Style for a category.
    pub fn style(&self, category: StyleCategory) -> &SpanStyle {
        &self.styles[category.index()]
    }

    /// Return a copy of this palette with one category replaced.
    pub fn with(mut self, category: StyleCategory, style: SpanStyle) -> Self {
        self.styles[category.index()] = style;
        self
    }

    /// Parse a palette from YAML.
    ///
    /// ```yaml
    /// base: light            # optional, defaults to darcula
    /// styles:
    ///   keyword: { color: "#0033B3", bold: true }
    ///   comment: { color: "#8C8C8C", italic: true }
    /// ```
    ///
    /// Categories missing from `styles` keep the base palette's style.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = serde_yaml::from_str(yaml)?;
        Ok(file
            .styles
            .into_iter()
            .fold(Self::base(file.base), |palette, (category, style)| {
                palette.with(category, style)
            }))
    }

    /// Load a palette YAML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self::darcula()
    }
}
