use serde::{Deserialize, Serialize};

use crate::enums::category::Category;

/// Цвет стен по умолчанию; при нём оверлей на превью не рисуется
pub const DEFAULT_WALL_COLOR: &str = "#ffffff";

/// Непрозрачность цветного оверлея стен для любого цвета кроме белого
pub const WALL_OVERLAY_OPACITY: f64 = 0.25;

/// Текущий выбор пользователя по всем категориям.
///
/// Поля меняются независимо друг от друга. Пустая строка означает
/// "ничего не выбрано"; принадлежность id каталогу не проверяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenSelection {
    pub wall_color: String,
    pub cabinet: String,
    pub backsplash: String,
    pub flooring: String,
}

impl Default for KitchenSelection {
    fn default() -> Self {
        Self {
            wall_color: DEFAULT_WALL_COLOR.to_string(),
            cabinet: "natural-wood".to_string(),
            backsplash: "white-subway".to_string(),
            flooring: "light-oak".to_string(),
        }
    }
}

impl KitchenSelection {
    pub fn set_wall_color(&mut self, value: impl Into<String>) {
        self.wall_color = value.into();
    }

    pub fn set_cabinet(&mut self, id: impl Into<String>) {
        self.cabinet = id.into();
    }

    pub fn set_backsplash(&mut self, id: impl Into<String>) {
        self.backsplash = id.into();
    }

    pub fn set_flooring(&mut self, id: impl Into<String>) {
        self.flooring = id.into();
    }

    /// Записать значение в поле, соответствующее категории
    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        match category {
            Category::WallColors => self.set_wall_color(value),
            Category::Cabinets => self.set_cabinet(value),
            Category::Backsplash => self.set_backsplash(value),
            Category::Flooring => self.set_flooring(value),
        }
    }

    /// Текущее значение поля категории
    pub fn selected(&self, category: Category) -> &str {
        match category {
            Category::WallColors => &self.wall_color,
            Category::Cabinets => &self.cabinet,
            Category::Backsplash => &self.backsplash,
            Category::Flooring => &self.flooring,
        }
    }
}

/// Как селектор превращает клик по элементу в новое значение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Повторный клик по выбранному элементу снимает выбор
    #[default]
    Toggle,
    /// Клик всегда назначает элемент
    Replace,
}

impl SelectMode {
    pub fn next(self, current: &str, clicked: &str) -> String {
        match self {
            SelectMode::Toggle => toggle_selection(current, clicked),
            SelectMode::Replace => clicked.to_string(),
        }
    }
}

/// Повторный выбор текущего id очищает поле, любой другой id его заменяет
pub fn toggle_selection(current: &str, clicked: &str) -> String {
    if current == clicked {
        String::new()
    } else {
        clicked.to_string()
    }
}

/// Непрозрачность оверлея стен: 0 только для строки `#ffffff` как есть,
/// иначе фиксированное значение
pub fn wall_overlay_opacity(wall_color: &str) -> f64 {
    if wall_color == DEFAULT_WALL_COLOR {
        0.0
    } else {
        WALL_OVERLAY_OPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_cabinet_style::CABINET_STYLES;

    #[test]
    fn test_default_selection() {
        let selection = KitchenSelection::default();
        assert_eq!(selection.wall_color, "#ffffff");
        assert_eq!(selection.cabinet, "natural-wood");
        assert_eq!(selection.backsplash, "white-subway");
        assert_eq!(selection.flooring, "light-oak");
    }

    #[test]
    fn test_set_cabinet_keeps_other_fields() {
        let mut selection = KitchenSelection::default();
        selection.set_cabinet("charcoal");
        assert_eq!(
            selection,
            KitchenSelection {
                wall_color: "#ffffff".to_string(),
                cabinet: "charcoal".to_string(),
                backsplash: "white-subway".to_string(),
                flooring: "light-oak".to_string(),
            }
        );
    }

    #[test]
    fn test_setters_are_independent() {
        let before = KitchenSelection::default();

        let mut after = before.clone();
        after.set_wall_color("#e6f3ff");
        assert_eq!(after.cabinet, before.cabinet);
        assert_eq!(after.backsplash, before.backsplash);
        assert_eq!(after.flooring, before.flooring);

        let mut after = before.clone();
        after.set_flooring("dark-walnut");
        assert_eq!(after.wall_color, before.wall_color);
        assert_eq!(after.cabinet, before.cabinet);
        assert_eq!(after.backsplash, before.backsplash);

        let mut after = before.clone();
        after.set_backsplash("");
        assert_eq!(after.wall_color, before.wall_color);
        assert_eq!(after.cabinet, before.cabinet);
        assert_eq!(after.flooring, before.flooring);
    }

    #[test]
    fn test_unknown_id_is_accepted() {
        let mut selection = KitchenSelection::default();
        selection.set(Category::Cabinets, "no-such-cabinet");
        assert_eq!(selection.selected(Category::Cabinets), "no-such-cabinet");
    }

    #[test]
    fn test_set_by_category() {
        let mut selection = KitchenSelection::default();
        selection.set(Category::WallColors, "#123456");
        selection.set(Category::Backsplash, "glass-mosaic");
        assert_eq!(selection.selected(Category::WallColors), "#123456");
        assert_eq!(selection.selected(Category::Backsplash), "glass-mosaic");
        assert_eq!(selection.selected(Category::Flooring), "light-oak");
    }

    #[test]
    fn test_toggle_policy() {
        for cabinet in CABINET_STYLES {
            let mut field = String::new();
            field = toggle_selection(&field, cabinet.id);
            assert_eq!(field, cabinet.id);
            field = toggle_selection(&field, cabinet.id);
            assert_eq!(field, "");
        }

        let field = toggle_selection("natural-wood", "charcoal");
        assert_eq!(field, "charcoal");
    }

    #[test]
    fn test_replace_mode_never_clears() {
        assert_eq!(SelectMode::Replace.next("#ffffff", "#ffffff"), "#ffffff");
        assert_eq!(SelectMode::Toggle.next("#ffffff", "#ffffff"), "");
    }

    #[test]
    fn test_overlay_opacity() {
        assert_eq!(wall_overlay_opacity("#ffffff"), 0.0);
        assert_eq!(wall_overlay_opacity("#f5f5dc"), WALL_OVERLAY_OPACITY);
        assert_eq!(wall_overlay_opacity("#000000"), WALL_OVERLAY_OPACITY);
        assert_eq!(wall_overlay_opacity(""), WALL_OVERLAY_OPACITY);
    }

    #[test]
    fn test_overlay_opacity_is_exact_match() {
        // Белый в другом регистре или с пробелами считается обычным цветом
        assert_eq!(wall_overlay_opacity("#FFFFFF"), WALL_OVERLAY_OPACITY);
        assert_eq!(wall_overlay_opacity(" #ffffff "), WALL_OVERLAY_OPACITY);
        assert_eq!(wall_overlay_opacity("#FfFfFf"), WALL_OVERLAY_OPACITY);
    }
}
