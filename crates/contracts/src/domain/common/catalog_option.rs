/// Трейт для элементов каталога (шкафы, фартук, пол, цвета стен)
///
/// Все каталоги неизменяемы и живут всё время работы приложения,
/// поэтому элементы хранятся в `&'static [T]`.
pub trait CatalogOption: std::fmt::Debug + Send + Sync + 'static {
    /// Стабильный идентификатор, уникальный внутри каталога
    fn id(&self) -> &str;

    /// Отображаемое имя
    fn name(&self) -> &str;

    /// Цвет образца в виде `#RRGGBB`
    fn color(&self) -> &str;

    /// Дополнительное поле для отображения (описание или узор)
    fn detail(&self) -> &str;

    /// Строки, по которым ищет фильтр. По умолчанию только имя.
    fn search_keys(&self) -> Vec<&str> {
        vec![self.name()]
    }
}

/// Найти элемент каталога по id.
///
/// Отсутствие элемента не является ошибкой: выбор с неизвестным id
/// просто ничего не подсвечивает.
pub fn find_by_id<'a, T: CatalogOption>(catalog: &'a [T], id: &str) -> Option<&'a T> {
    if id.is_empty() {
        return None;
    }
    catalog.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_cabinet_style::CABINET_STYLES;
    use crate::domain::a002_backsplash::BACKSPLASH_OPTIONS;
    use crate::domain::a003_flooring::FLOORING_OPTIONS;
    use crate::domain::a004_wall_color::PRESET_COLORS;
    use std::collections::HashSet;

    fn assert_well_formed<T: CatalogOption>(catalog: &[T]) {
        let mut ids = HashSet::new();
        for item in catalog {
            assert!(!item.id().is_empty(), "empty id in {:?}", item);
            assert!(!item.name().is_empty(), "empty name in {:?}", item);
            assert!(!item.detail().is_empty(), "empty detail in {:?}", item);
            let color = item.color();
            assert_eq!(color.len(), 7, "bad color {}", color);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            assert!(ids.insert(item.id()), "duplicate id {}", item.id());
        }
    }

    #[test]
    fn test_catalogs_are_well_formed() {
        assert_well_formed(CABINET_STYLES);
        assert_well_formed(BACKSPLASH_OPTIONS);
        assert_well_formed(FLOORING_OPTIONS);
        assert_well_formed(PRESET_COLORS);
    }

    #[test]
    fn test_find_by_id() {
        let found = find_by_id(CABINET_STYLES, "charcoal").map(|c| c.name);
        assert_eq!(found, Some("Charcoal"));
        assert!(find_by_id(CABINET_STYLES, "oak-veneer").is_none());
        assert!(find_by_id(CABINET_STYLES, "").is_none());
    }

    #[test]
    fn test_same_id_in_different_catalogs() {
        // "dark-tile" есть и в фартуке, и в полу
        let backsplash = find_by_id(BACKSPLASH_OPTIONS, "dark-tile").map(|b| b.name);
        let flooring = find_by_id(FLOORING_OPTIONS, "dark-tile").map(|f| f.name);
        assert_eq!(backsplash, Some("Dark Tile"));
        assert_eq!(flooring, Some("Dark Stone Tile"));
    }
}
