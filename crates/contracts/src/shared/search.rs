/// Универсальный поиск по каталогам
use crate::domain::common::CatalogOption;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Поиск по `search_keys()` без учёта регистра: для шкафов, фартука и
/// пола это только имя, для готовых цветов ещё и hex.
impl<T: CatalogOption> Searchable for T {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.search_keys()
            .iter()
            .any(|key| key.to_lowercase().contains(&filter))
    }
}

/// Фильтрует каталог по поисковому запросу, сохраняя исходный порядок.
///
/// Пустой запрос возвращает каталог целиком; отсутствие совпадений
/// даёт пустой список, а не ошибку.
pub fn filter_options<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_cabinet_style::CABINET_STYLES;
    use crate::domain::a002_backsplash::BACKSPLASH_OPTIONS;
    use crate::domain::a003_flooring::FLOORING_OPTIONS;
    use crate::domain::a004_wall_color::PRESET_COLORS;

    fn ids<T: CatalogOption>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.id().to_string()).collect()
    }

    fn all_ids<T: CatalogOption>(catalog: &[T]) -> Vec<String> {
        catalog.iter().map(|item| item.id().to_string()).collect()
    }

    #[test]
    fn test_empty_term_returns_whole_catalog() {
        assert_eq!(ids(&filter_options(CABINET_STYLES, "")), all_ids(CABINET_STYLES));
        assert_eq!(
            ids(&filter_options(BACKSPLASH_OPTIONS, "")),
            all_ids(BACKSPLASH_OPTIONS)
        );
        assert_eq!(ids(&filter_options(FLOORING_OPTIONS, "")), all_ids(FLOORING_OPTIONS));
        assert_eq!(ids(&filter_options(PRESET_COLORS, "")), all_ids(PRESET_COLORS));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            filter_options(FLOORING_OPTIONS, "OAK"),
            filter_options(FLOORING_OPTIONS, "oak")
        );
        assert_eq!(ids(&filter_options(FLOORING_OPTIONS, "oAk")), vec!["light-oak"]);
    }

    #[test]
    fn test_dark_matches_single_cabinet() {
        let result = filter_options(CABINET_STYLES, "dark");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "dark-stain");
        assert_eq!(result[0].name, "Dark Stain");
    }

    #[test]
    fn test_order_is_preserved() {
        assert_eq!(
            ids(&filter_options(FLOORING_OPTIONS, "tile")),
            vec!["light-tile", "dark-tile"]
        );
        assert_eq!(
            ids(&filter_options(PRESET_COLORS, "white")),
            vec!["#ffffff", "#f8f9fa", "#fff5f0"]
        );
    }

    #[test]
    fn test_matches_name_only() {
        // "finish" встречается только в описаниях
        assert!(filter_options(CABINET_STYLES, "finish").is_empty());
        // "square" это узор плитки, не имя
        assert_eq!(ids(&filter_options(BACKSPLASH_OPTIONS, "square")), Vec::<String>::new());
        assert!(filter_options(CABINET_STYLES, "natural-wood").is_empty());
    }

    #[test]
    fn test_preset_colors_match_hex() {
        assert_eq!(
            ids(&filter_options(PRESET_COLORS, "#f5")),
            vec!["#f5f5dc", "#f5f0ff"]
        );
        assert_eq!(
            ids(&filter_options(PRESET_COLORS, "FF")),
            // "Off White" совпадает по подписи
            vec!["#ffffff", "#f8f9fa", "#e6f3ff", "#fff5f0", "#f5f0ff", "#ffeaa7"]
        );
        // Подпись по-прежнему работает
        assert_eq!(ids(&filter_options(PRESET_COLORS, "beige")), vec!["#f5f5dc"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_options(CABINET_STYLES, "marble").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once: Vec<_> = filter_options(BACKSPLASH_OPTIONS, "t")
            .into_iter()
            .copied()
            .collect();
        let twice = filter_options(&once, "t");
        assert_eq!(ids(&twice), all_ids(&once));
    }
}
