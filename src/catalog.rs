use serde::{Deserialize, Serialize};
use std::fmt;

/// A marker that can sit on a ceiling tile.
///
/// The serde names double as the plain-text drag payload, so the palette and
/// the grid agree on identifiers without a separate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Light,
    AirSupply,
    AirReturn,
    SmokeDetector,
    Invalid,
    Delete,
}

impl ComponentKind {
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Light => "Light",
            ComponentKind::AirSupply => "AirSupply",
            ComponentKind::AirReturn => "AirReturn",
            ComponentKind::SmokeDetector => "SmokeDetector",
            ComponentKind::Invalid => "Invalid",
            ComponentKind::Delete => "Delete",
        }
    }

    /// Decodes a drag payload. Surrounding whitespace is ignored, anything
    /// else that is not an exact identifier yields `None`.
    pub fn from_payload(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        serde_json::from_value(serde_json::Value::String(text.to_string())).ok()
    }

    pub fn tool(self) -> &'static Tool {
        TOOLS
            .iter()
            .find(|t| t.kind == self)
            .unwrap_or(&TOOLS[0])
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Palette entry with its display metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tool {
    pub kind: ComponentKind,
    /// Letter shown on a placed tile.
    pub glyph: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// First letter of the label, used by the legend swatches.
    pub fn initial(&self) -> &'static str {
        &self.label()[..1]
    }
}

pub const TOOLS: [Tool; 6] = [
    Tool {
        kind: ComponentKind::Light,
        glyph: "L",
        background: "#fde047",
        foreground: "#0f172a",
    },
    Tool {
        kind: ComponentKind::AirSupply,
        glyph: "S",
        background: "#7dd3fc",
        foreground: "#0f172a",
    },
    Tool {
        kind: ComponentKind::AirReturn,
        glyph: "A",
        background: "#a7f3d0",
        foreground: "#0f172a",
    },
    Tool {
        kind: ComponentKind::SmokeDetector,
        glyph: "S",
        background: "#f9a8d4",
        foreground: "#0f172a",
    },
    Tool {
        kind: ComponentKind::Invalid,
        glyph: "X",
        background: "#d6d3d1",
        foreground: "#0f172a",
    },
    Tool {
        kind: ComponentKind::Delete,
        glyph: "D",
        background: "#b91c1c",
        foreground: "#ffffff",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_every_catalog_label() {
        for tool in TOOLS.iter() {
            assert_eq!(ComponentKind::from_payload(tool.label()), Some(tool.kind));
        }
    }

    #[test]
    fn payload_rejects_unknown_and_empty_text() {
        assert_eq!(ComponentKind::from_payload(""), None);
        assert_eq!(ComponentKind::from_payload("   "), None);
        assert_eq!(ComponentKind::from_payload("light"), None);
        assert_eq!(ComponentKind::from_payload("Fan"), None);
    }

    #[test]
    fn payload_trims_whitespace() {
        assert_eq!(
            ComponentKind::from_payload(" SmokeDetector\n"),
            Some(ComponentKind::SmokeDetector)
        );
    }

    #[test]
    fn serde_names_match_labels() {
        for tool in TOOLS.iter() {
            let json = serde_json::to_string(&tool.kind).unwrap();
            assert_eq!(json, format!("\"{}\"", tool.label()));
        }
    }

    #[test]
    fn catalog_order_is_stable() {
        let labels: Vec<_> = TOOLS.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["Light", "AirSupply", "AirReturn", "SmokeDetector", "Invalid", "Delete"]
        );
    }

    #[test]
    fn legend_initial_is_first_letter() {
        assert_eq!(ComponentKind::AirReturn.tool().initial(), "A");
        assert_eq!(ComponentKind::Delete.tool().initial(), "D");
    }
}
