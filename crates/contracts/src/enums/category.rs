use serde::{Deserialize, Serialize};

/// Категории настройки кухни
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    WallColors,
    Cabinets,
    Backsplash,
    Flooring,
}

impl Category {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            Category::WallColors => "wall-colors",
            Category::Cabinets => "cabinets",
            Category::Backsplash => "backsplash",
            Category::Flooring => "flooring",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::WallColors => "Wall Colors",
            Category::Cabinets => "Cabinet Styles",
            Category::Backsplash => "Backsplash",
            Category::Flooring => "Flooring",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::WallColors => "🎨",
            Category::Cabinets => "🚪",
            Category::Backsplash => "⬜",
            Category::Flooring => "🏠",
        }
    }

    /// Получить все категории в порядке отображения
    pub fn all() -> Vec<Category> {
        vec![
            Category::WallColors,
            Category::Cabinets,
            Category::Backsplash,
            Category::Flooring,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "wall-colors" => Some(Category::WallColors),
            "cabinets" => Some(Category::Cabinets),
            "backsplash" => Some(Category::Backsplash),
            "flooring" => Some(Category::Flooring),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("lighting"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Category::WallColors).unwrap();
        assert_eq!(json, "\"wall-colors\"");
        let parsed: Category = serde_json::from_str("\"backsplash\"").unwrap();
        assert_eq!(parsed, Category::Backsplash);
    }
}
