use serde::Serialize;

use crate::domain::common::CatalogOption;

/// Напольное покрытие
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlooringOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl CatalogOption for FlooringOption {
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

pub const FLOORING_OPTIONS: &[FlooringOption] = &[
    FlooringOption {
        id: "light-oak",
        name: "Light Oak",
        description: "Natural light wood finish",
        color: "#DEB887",
    },
    FlooringOption {
        id: "dark-walnut",
        name: "Dark Walnut",
        description: "Rich dark wood finish",
        color: "#654321",
    },
    FlooringOption {
        id: "light-tile",
        name: "Light Stone Tile",
        description: "Modern light stone",
        color: "#F5F5F5",
    },
    FlooringOption {
        id: "dark-tile",
        name: "Dark Stone Tile",
        description: "Elegant dark stone",
        color: "#696969",
    },
];
