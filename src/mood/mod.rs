//! Mood variants and the fixed catalog the user picks from.
//!
//! A `MoodVariant` is embedded by value inside every stored entry, so entries keep
//! rendering the same way even if the catalog changes in a later release.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color token of a mood: one color, or several for a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoodColor {
    /// A single color value such as `#65A59A`.
    Solid(String),
    /// An ordered list of color values.
    Gradient(Vec<String>),
}

impl MoodColor {
    /// The first color of the token, used where only one color can be shown.
    pub fn primary(&self) -> Option<&str> {
        match self {
            MoodColor::Solid(color) => Some(color),
            MoodColor::Gradient(colors) => colors.first().map(String::as_str),
        }
    }
}

/// A selectable mood: glyph, display label and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodVariant {
    pub emoji: String,
    pub name: String,
    pub color: MoodColor,
}

impl fmt::Display for MoodVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

struct CatalogMood {
    emoji: &'static str,
    name: &'static str,
    color: &'static str,
}

const CATALOG: &[CatalogMood] = &[
    CatalogMood {
        emoji: "😊",
        name: "Heureux",
        color: "#65A59A",
    },
    CatalogMood {
        emoji: "😢",
        name: "triste",
        color: "#6D85A8",
    },
    CatalogMood {
        emoji: "😴",
        name: "Fatigue",
        color: "#9A9EB3",
    },
    CatalogMood {
        emoji: "😡",
        name: "Enerve",
        color: "#AB7C85",
    },
    CatalogMood {
        emoji: "🤔",
        name: "Pensif",
        color: "#8E9B9D",
    },
    CatalogMood {
        emoji: "🥳",
        name: "Excite",
        color: "#D0A97D",
    },
];

impl From<&CatalogMood> for MoodVariant {
    fn from(mood: &CatalogMood) -> Self {
        MoodVariant {
            emoji: mood.emoji.to_string(),
            name: mood.name.to_string(),
            color: MoodColor::Solid(mood.color.to_string()),
        }
    }
}

/// Returns the catalog in display order.
///
/// # Examples
///
/// ```
/// let moods = moodlog::mood::catalog();
/// assert_eq!(moods.len(), 6);
/// assert_eq!(moods[0].name, "Heureux");
/// ```
pub fn catalog() -> Vec<MoodVariant> {
    CATALOG.iter().map(MoodVariant::from).collect()
}

/// Resolves a user selection against the catalog.
///
/// The selection is either a mood name (case-insensitive, surrounding whitespace
/// ignored) or its 1-based position in the catalog.
///
/// # Errors
///
/// Returns `AppError::Mood` if nothing in the catalog matches.
pub fn lookup(selection: &str) -> AppResult<MoodVariant> {
    let wanted = selection.trim();

    if let Ok(position) = wanted.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| CATALOG.get(index))
            .map(MoodVariant::from)
            .ok_or_else(|| {
                AppError::Mood(format!(
                    "no mood at position {} (choose 1-{})",
                    position,
                    CATALOG.len()
                ))
            });
    }

    CATALOG
        .iter()
        .find(|mood| mood.name.eq_ignore_ascii_case(wanted))
        .map(MoodVariant::from)
        .ok_or_else(|| AppError::Mood(format!("no mood named '{}'", wanted)))
}
