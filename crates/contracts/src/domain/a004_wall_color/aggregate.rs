use serde::Serialize;

use crate::domain::common::CatalogOption;

/// Готовый цвет стен из палитры.
///
/// Идентификатором служит сам hex, поэтому `id()` и `color()` совпадают.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetColor {
    pub hex: &'static str,
    pub label: &'static str,
}

impl CatalogOption for PresetColor {
    fn id(&self) -> &str {
        self.hex
    }

    fn name(&self) -> &str {
        self.label
    }

    fn color(&self) -> &str {
        self.hex
    }

    fn detail(&self) -> &str {
        self.hex
    }

    /// Готовый цвет находится и по подписи, и по hex
    fn search_keys(&self) -> Vec<&str> {
        vec![self.label, self.hex]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_search_keys() {
        let beige = PRESET_COLORS[2];
        assert_eq!(beige.search_keys(), vec!["Beige", "#f5f5dc"]);
    }
}

pub const PRESET_COLORS: &[PresetColor] = &[
    PresetColor { hex: "#ffffff", label: "Pure White" },
    PresetColor { hex: "#f8f9fa", label: "Off White" },
    PresetColor { hex: "#f5f5dc", label: "Beige" },
    PresetColor { hex: "#e6f3ff", label: "Light Blue" },
    PresetColor { hex: "#f0f8e8", label: "Light Green" },
    PresetColor { hex: "#fff5f0", label: "Warm White" },
    PresetColor { hex: "#f5f0ff", label: "Light Purple" },
    PresetColor { hex: "#ffeaa7", label: "Light Yellow" },
];
