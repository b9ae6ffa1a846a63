use serde::Serialize;

use crate::domain::common::CatalogOption;

/// Вариант отделки фартука
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BacksplashOption {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    pub color: &'static str,
}

impl CatalogOption for BacksplashOption {
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
        self.pattern
    }
}

pub const BACKSPLASH_OPTIONS: &[BacksplashOption] = &[
    BacksplashOption {
        id: "white-subway",
        name: "White Subway Tile",
        pattern: "subway",
        color: "#FFFFFF",
    },
    BacksplashOption {
        id: "natural-stone",
        name: "Natural Stone",
        pattern: "natural",
        color: "#F5F5DC",
    },
    BacksplashOption {
        id: "dark-tile",
        name: "Dark Tile",
        pattern: "square",
        color: "#2F4F4F",
    },
    BacksplashOption {
        id: "glass-mosaic",
        name: "Glass Mosaic",
        pattern: "mosaic",
        color: "#E6E6FA",
    },
];
