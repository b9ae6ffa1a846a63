use serde::{Deserialize, Serialize};

use crate::domain::a001_cabinet_style::CABINET_STYLES;
use crate::domain::a002_backsplash::BACKSPLASH_OPTIONS;
use crate::domain::a003_flooring::FLOORING_OPTIONS;
use crate::domain::a004_wall_color::PRESET_COLORS;
use crate::domain::common::{find_by_id, CatalogOption};
use crate::shared::selection::KitchenSelection;

pub const SUMMARY_TITLE: &str = "Timber Craft Design";

/// Single line of the design info card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Text shown next to the swatch (e.g., "Dark Stain Cabinets")
    pub label: String,
    /// Swatch color, None when the id is not in its catalog
    pub swatch: Option<String>,
}

/// Summary of the current selection for the design info card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl DesignSummary {
    pub fn from_selection(selection: &KitchenSelection) -> Self {
        let wall_label = match find_by_id(PRESET_COLORS, &selection.wall_color) {
            Some(preset) => format!("{} Walls", preset.name()),
            None => "Wall Color".to_string(),
        };

        let mut lines = vec![SummaryLine {
            label: wall_label,
            swatch: Some(selection.wall_color.clone()),
        }];
        lines.extend(catalog_line(CABINET_STYLES, &selection.cabinet, "Cabinets"));
        lines.extend(catalog_line(
            BACKSPLASH_OPTIONS,
            &selection.backsplash,
            "Backsplash",
        ));
        lines.extend(catalog_line(FLOORING_OPTIONS, &selection.flooring, "Flooring"));

        Self {
            title: SUMMARY_TITLE.to_string(),
            lines,
        }
    }
}

// Пустой выбор строку не даёт, неизвестный id показывается как есть без образца
fn catalog_line<T: CatalogOption>(catalog: &[T], id: &str, suffix: &str) -> Option<SummaryLine> {
    if id.is_empty() {
        return None;
    }
    let line = match find_by_id(catalog, id) {
        Some(item) => SummaryLine {
            label: format!("{} {}", item.name(), suffix),
            swatch: Some(item.color().to_string()),
        },
        None => SummaryLine {
            label: format!("{} {}", id, suffix),
            swatch: None,
        },
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary() {
        let summary = DesignSummary::from_selection(&KitchenSelection::default());
        assert_eq!(summary.title, "Timber Craft Design");
        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Pure White Walls",
                "Natural Wood Cabinets",
                "White Subway Tile Backsplash",
                "Light Oak Flooring",
            ]
        );
        assert_eq!(summary.lines[1].swatch.as_deref(), Some("#D4B896"));
        assert_eq!(summary.lines[3].swatch.as_deref(), Some("#DEB887"));
    }

    #[test]
    fn test_summary_follows_selection() {
        let mut selection = KitchenSelection::default();
        selection.set_wall_color("#123abc");
        selection.set_cabinet("charcoal");
        selection.set_backsplash("");
        selection.set_flooring("bamboo");

        let summary = DesignSummary::from_selection(&selection);
        assert_eq!(summary.lines.len(), 3);
        assert_eq!(
            summary.lines[0],
            SummaryLine {
                label: "Wall Color".to_string(),
                swatch: Some("#123abc".to_string()),
            }
        );
        assert_eq!(summary.lines[1].label, "Charcoal Cabinets");
        assert_eq!(
            summary.lines[2],
            SummaryLine {
                label: "bamboo Flooring".to_string(),
                swatch: None,
            }
        );
    }

    #[test]
    fn test_labels_use_full_catalog_names() {
        let mut selection = KitchenSelection::default();
        selection.set_wall_color("#e6f3ff");
        selection.set_flooring("light-tile");

        let summary = DesignSummary::from_selection(&selection);
        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Light Blue Walls",
                "Natural Wood Cabinets",
                "White Subway Tile Backsplash",
                "Light Stone Tile Flooring",
            ]
        );
    }
}
