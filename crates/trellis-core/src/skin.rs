//! Skins: typed configuration lookups for widgets.
//!
//! A skin is an INI document whose `[section] key = value` entries describe
//! how widgets should look. The widget tree only consumes the lookup
//! contract defined by [`SkinSource`]: a raw `(section, key)` lookup plus
//! typed getters that fall back to a caller-supplied default whenever the key
//! is missing or its value does not parse.
//!
//! # Example
//!
//! ```
//! use trellis_core::{Rect, Skin, SkinSource};
//!
//! let skin = Skin::parse(r#"
//! [button]
//! padding = 4
//! frame = 0, 0, 15, 15
//! flat = true
//! "#).unwrap();
//!
//! assert_eq!(skin.get_int("button", "padding", 0), 4);
//! assert_eq!(skin.get_rect("button", "frame", Rect::ZERO), Rect::new(0.0, 0.0, 15.0, 15.0));
//! assert!(skin.get_bool("button", "flat", false));
//! assert_eq!(skin.get_int("button", "missing", 9), 9);
//! ```

use std::collections::HashMap;
use std::path::Path;

use ini::Ini;
use thiserror::Error;

use crate::rect::Rect;

/// Characters that separate the parts of a compound value.
const SEPARATORS: &[char] = &[' ', '\t', '\n', '\r', ',', ':'];

/// Default font size when a font value omits it.
pub const DEFAULT_FONT_SIZE: i32 = 12;

/// Errors that can occur while loading a skin.
#[derive(Error, Debug)]
pub enum SkinError {
    /// The skin file could not be read.
    #[error("failed to read skin file: {0}")]
    Io(#[from] std::io::Error),
    /// The skin text is not valid INI.
    #[error("failed to parse skin: {0}")]
    Parse(String),
}

/// An opaque RGB color read from a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_packed(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Look up one of the basic CSS color names, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let packed = match name.to_ascii_lowercase().as_str() {
            "black" => 0x000000,
            "silver" => 0xc0c0c0,
            "gray" | "grey" => 0x808080,
            "white" => 0xffffff,
            "maroon" => 0x800000,
            "red" => 0xff0000,
            "purple" => 0x800080,
            "fuchsia" | "magenta" => 0xff00ff,
            "green" => 0x008000,
            "lime" => 0x00ff00,
            "olive" => 0x808000,
            "yellow" => 0xffff00,
            "navy" => 0x000080,
            "blue" => 0x0000ff,
            "teal" => 0x008080,
            "aqua" | "cyan" => 0x00ffff,
            "orange" => 0xffa500,
            _ => return None,
        };
        Some(Self::from_packed(packed))
    }
}

/// A font reference read from a skin: `file[, size[, flags]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// The font file name. Loading it is up to the rendering backend.
    pub file: String,
    /// Point size; [`DEFAULT_FONT_SIZE`] when omitted.
    pub size: i32,
    /// Backend-specific flags; zero when omitted.
    pub flags: i32,
}

/// The lookup contract widgets use to read their configuration.
///
/// Implementors only provide [`raw`](Self::raw); every typed getter is derived
/// from it and returns `default` when the value is missing or malformed.
pub trait SkinSource {
    /// Returns the raw string stored under `section`/`key`.
    fn raw(&self, section: &str, key: &str) -> Option<&str>;

    /// Reads a signed integer (decimal, `0x` hex or leading-`0` octal).
    fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        first_token(self.raw(section, key))
            .and_then(parse_int)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }

    /// Reads an unsigned integer.
    fn get_uint(&self, section: &str, key: &str, default: u32) -> u32 {
        first_token(self.raw(section, key))
            .and_then(parse_int)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }

    /// Reads a single-precision float.
    fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        first_token(self.raw(section, key))
            .and_then(|t| t.parse().ok())
            .unwrap_or(default)
    }

    /// Reads a double-precision float.
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        first_token(self.raw(section, key))
            .and_then(|t| t.parse().ok())
            .unwrap_or(default)
    }

    /// Reads a boolean. `t`, `true` and `1` (any case) are true; any other
    /// present value is false.
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.raw(section, key) {
            Some(value) => {
                let value = value.trim();
                value.eq_ignore_ascii_case("true")
                    || value.eq_ignore_ascii_case("t")
                    || value == "1"
            }
            None => default,
        }
    }

    /// Reads a rectangle as `left top right bottom`.
    fn get_rect(&self, section: &str, key: &str, default: Rect) -> Rect {
        let Some(value) = self.raw(section, key) else {
            return default;
        };
        let numbers: Option<Vec<f32>> = tokens(value).map(|t| t.parse().ok()).collect();
        match numbers.as_deref() {
            Some(&[left, top, right, bottom]) => Rect::new(left, top, right, bottom),
            _ => default,
        }
    }

    /// Reads a color: an `r, g, b` triplet, a packed integer, `#RRGGBB`, or a
    /// basic color name.
    fn get_color(&self, section: &str, key: &str, default: Color) -> Color {
        let Some(value) = self.raw(section, key) else {
            return default;
        };
        let parts: Vec<&str> = tokens(value).collect();

        if let [r, g, b] = parts.as_slice() {
            let channel = |t: &str| parse_int(t).and_then(|v| u8::try_from(v).ok());
            if let (Some(r), Some(g), Some(b)) = (channel(*r), channel(*g), channel(*b)) {
                return Color::rgb(r, g, b);
            }
        }

        let Some(&first) = parts.first() else {
            return default;
        };
        if let Some(packed) = parse_int(first).and_then(|v| u32::try_from(v).ok()) {
            return Color::from_packed(packed);
        }
        if let Some(hex) = first.strip_prefix('#') {
            if let Ok(packed) = u32::from_str_radix(hex, 16) {
                return Color::from_packed(packed);
            }
        }
        Color::from_name(first).unwrap_or(default)
    }

    /// Reads a font reference.
    fn get_font(&self, section: &str, key: &str, default: Option<FontSpec>) -> Option<FontSpec> {
        let Some(value) = self.raw(section, key) else {
            return default;
        };
        let mut parts = tokens(value);
        let Some(file) = parts.next() else {
            return default;
        };
        let mut number = |fallback: i32| match parts.next() {
            Some(t) => parse_int(t).and_then(|v| i32::try_from(v).ok()),
            None => Some(fallback),
        };
        match (number(DEFAULT_FONT_SIZE), number(0)) {
            (Some(size), Some(flags)) => Some(FontSpec {
                file: file.to_string(),
                size,
                flags,
            }),
            _ => default,
        }
    }

    /// Reads a bitmap file name. Loading it is up to the rendering backend.
    fn get_bitmap(&self, section: &str, key: &str, default: Option<String>) -> Option<String> {
        first_token(self.raw(section, key))
            .map(str::to_string)
            .or(default)
    }
}

/// A skin loaded from INI text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skin {
    sections: HashMap<String, HashMap<String, String>>,
    /// Values in the global (unnamed) section.
    global: HashMap<String, String>,
}

impl Skin {
    /// Creates an empty skin; every lookup returns its default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a skin from INI text.
    pub fn parse(text: &str) -> Result<Self, SkinError> {
        let ini = Ini::load_from_str(text).map_err(|e| SkinError::Parse(e.to_string()))?;
        Ok(Self::from_ini(&ini))
    }

    /// Loads a skin from an INI file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SkinError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let skin = Self::parse(&text)?;
        tracing::debug!(
            target: "trellis::skin",
            path = %path.display(),
            sections = skin.sections.len(),
            "loaded skin"
        );
        Ok(skin)
    }

    fn from_ini(ini: &Ini) -> Self {
        let mut sections = HashMap::new();
        let mut global = HashMap::new();

        for (section, props) in ini.iter() {
            let section_map: HashMap<String, String> = props
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();

            match section {
                Some(name) => {
                    sections
                        .entry(name.to_string())
                        .or_insert_with(HashMap::new)
                        .extend(section_map);
                }
                None => global.extend(section_map),
            }
        }

        Self { sections, global }
    }

    /// Returns true if the skin holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.sections.values().all(HashMap::is_empty)
    }

    /// Returns true if a section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Sets a raw value, creating the section if needed. An empty section
    /// name addresses the global section.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        let map = if section.is_empty() {
            &mut self.global
        } else {
            self.sections.entry(section.to_string()).or_default()
        };
        map.insert(key.into(), value.into());
    }
}

impl SkinSource for Skin {
    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        let map = if section.is_empty() {
            Some(&self.global)
        } else {
            self.sections.get(section)
        };
        map.and_then(|m| m.get(key)).map(String::as_str)
    }
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(SEPARATORS).filter(|t| !t.is_empty())
}

fn first_token(value: Option<&str>) -> Option<&str> {
    value.and_then(|v| tokens(v).next())
}

/// Parses an integer with C-style base detection: `0x` hex, leading `0`
/// octal, otherwise decimal. An optional sign is accepted.
fn parse_int(token: &str) -> Option<i64> {
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
