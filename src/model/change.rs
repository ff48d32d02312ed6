//! Individual change records.

use serde::{Deserialize, Serialize};

/// Kind of change detected between two spec revisions.
///
/// Wire values are the engine's numeric codes (1 through 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChangeKind {
    Modified,
    PropertyAdded,
    ObjectAdded,
    ObjectRemoved,
    PropertyRemoved,
}

impl ChangeKind {
    /// Human-readable label for display surfaces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Modified => "modified",
            Self::PropertyAdded => "property added",
            Self::ObjectAdded => "added",
            Self::ObjectRemoved => "removed",
            Self::PropertyRemoved => "property removed",
        }
    }

    /// True for both object and property additions.
    #[must_use]
    pub const fn is_addition(self) -> bool {
        matches!(self, Self::PropertyAdded | Self::ObjectAdded)
    }

    /// True for both object and property removals.
    #[must_use]
    pub const fn is_removal(self) -> bool {
        matches!(self, Self::ObjectRemoved | Self::PropertyRemoved)
    }
}

impl From<ChangeKind> for u8 {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Modified => 1,
            ChangeKind::PropertyAdded => 2,
            ChangeKind::ObjectAdded => 3,
            ChangeKind::ObjectRemoved => 4,
            ChangeKind::PropertyRemoved => 5,
        }
    }
}

impl TryFrom<u8> for ChangeKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Modified),
            2 => Ok(Self::PropertyAdded),
            3 => Ok(Self::ObjectAdded),
            4 => Ok(Self::ObjectRemoved),
            5 => Ok(Self::PropertyRemoved),
            other => Err(format!("unknown change kind code: {other}")),
        }
    }
}

/// Source positions attached to a change.
///
/// A pure addition carries no original position and a pure removal no
/// new position; the engine omits (or zeroes) the fields accordingly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeContext {
    #[serde(
        rename = "originalLine",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_line: Option<u32>,
    #[serde(
        rename = "originalColumn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_column: Option<u32>,
    #[serde(rename = "newLine", default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u32>,
    #[serde(
        rename = "newColumn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub new_column: Option<u32>,
}

/// One detected difference between an original and a modified spec.
///
/// Created once by the engine and immutable thereafter. Both tree
/// nodes and graph nodes reference the same underlying change; the
/// correlation index joins those references via [`crate::correlate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub breaking: bool,
    #[serde(rename = "change")]
    pub kind: ChangeKind,
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
    #[serde(default)]
    pub context: ChangeContext,
}

impl Change {
    /// Best cursor position for this change: the new location when the
    /// change exists in the modified document, otherwise the original
    /// location. `None` when the engine supplied no usable position.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        let line_col = |line: Option<u32>, col: Option<u32>| {
            line.filter(|&l| l > 0).map(|l| (l, col.unwrap_or(1).max(1)))
        };
        line_col(self.context.new_line, self.context.new_column)
            .or_else(|| line_col(self.context.original_line, self.context.original_column))
    }
}
