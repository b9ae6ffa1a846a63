use serde::Serialize;

use crate::domain::common::CatalogOption;

/// Стиль кухонных шкафов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CabinetStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl CatalogOption for CabinetStyle {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn color(&self) -> &str {
        self.color
    }

    fn detail(&self) -> &str {
        self.description
    }
}

pub const CABINET_STYLES: &[CabinetStyle] = &[
    CabinetStyle {
        id: "natural-wood",
        name: "Natural Wood",
        description: "Warm natural timber finish",
        color: "#D4B896",
    },
    CabinetStyle {
        id: "dark-stain",
        name: "Dark Stain",
        description: "Rich dark wood finish",
        color: "#8B4513",
    },
    CabinetStyle {
        id: "white-painted",
        name: "White Painted",
        description: "Clean white finish",
        color: "#FFFFFF",
    },
    CabinetStyle {
        id: "charcoal",
        name: "Charcoal",
        description: "Modern charcoal finish",
        color: "#36454F",
    },
];
