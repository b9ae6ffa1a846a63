use crate::enums::category::Category;

/// Заголовок боковой панели, когда категория не выбрана
pub const ROOT_PANEL_TITLE: &str = "Customize Kitchen";

/// Состояние оболочки страницы: видимость панелей, активная категория
/// и строка поиска.
///
/// Категории взаимоисключающие и переключаются прямым присваиванием.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub show_sidebar: bool,
    pub show_design_info: bool,
    pub preview_mode: bool,
    pub current_category: Option<Category>,
    pub search_term: String,
    pub show_inquiry_dialog: bool,
}

impl PageState {
    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    pub fn close_sidebar(&mut self) {
        self.show_sidebar = false;
    }

    pub fn toggle_design_info(&mut self) {
        self.show_design_info = !self.show_design_info;
    }

    pub fn close_design_info(&mut self) {
        self.show_design_info = false;
    }

    /// Entering preview hides both panels; leaving it restores nothing.
    pub fn toggle_preview_mode(&mut self) {
        self.preview_mode = !self.preview_mode;
        if self.preview_mode {
            self.show_sidebar = false;
            self.show_design_info = false;
        }
    }

    /// Выбор категории всегда сбрасывает поиск
    pub fn select_category(&mut self, category: Category) {
        self.current_category = Some(category);
        self.search_term.clear();
    }

    pub fn back_to_categories(&mut self) {
        self.current_category = None;
        self.search_term.clear();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn open_inquiry(&mut self) {
        self.show_inquiry_dialog = true;
    }

    pub fn close_inquiry(&mut self) {
        self.show_inquiry_dialog = false;
    }

    pub fn sidebar_visible(&self) -> bool {
        self.show_sidebar && !self.preview_mode
    }

    pub fn design_info_visible(&self) -> bool {
        self.show_design_info && !self.preview_mode
    }

    /// Логотипы и кнопки управления скрыты в режиме превью
    pub fn chrome_visible(&self) -> bool {
        !self.preview_mode
    }

    pub fn header_title(&self) -> &'static str {
        self.current_category
            .map(|c| c.display_name())
            .unwrap_or(ROOT_PANEL_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let state = PageState::default();
        assert!(!state.sidebar_visible());
        assert!(!state.design_info_visible());
        assert!(state.chrome_visible());
        assert_eq!(state.current_category, None);
        assert_eq!(state.header_title(), "Customize Kitchen");
    }

    #[test]
    fn test_select_category_resets_search() {
        let mut state = PageState::default();
        state.select_category(Category::Cabinets);
        state.set_search_term("oak");
        state.select_category(Category::Flooring);
        assert_eq!(state.current_category, Some(Category::Flooring));
        assert_eq!(state.search_term, "");
        assert_eq!(state.header_title(), "Flooring");

        state.set_search_term("tile");
        state.back_to_categories();
        assert_eq!(state.current_category, None);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_reselecting_same_category_still_resets_search() {
        let mut state = PageState::default();
        state.select_category(Category::Backsplash);
        state.set_search_term("glass");
        state.select_category(Category::Backsplash);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_preview_hides_panels() {
        let mut state = PageState::default();
        state.toggle_sidebar();
        state.toggle_design_info();
        assert!(state.sidebar_visible());
        assert!(state.design_info_visible());

        state.toggle_preview_mode();
        assert!(state.preview_mode);
        assert!(!state.show_sidebar);
        assert!(!state.show_design_info);
        assert!(!state.chrome_visible());

        // Выход из превью панели не возвращает
        state.toggle_preview_mode();
        assert!(!state.preview_mode);
        assert!(!state.sidebar_visible());
        assert!(state.chrome_visible());
    }

    #[test]
    fn test_sidebar_hidden_while_previewing() {
        let mut state = PageState::default();
        state.toggle_preview_mode();
        state.toggle_sidebar();
        assert!(state.show_sidebar);
        assert!(!state.sidebar_visible());
    }

    #[test]
    fn test_inquiry_dialog() {
        let mut state = PageState::default();
        state.open_inquiry();
        assert!(state.show_inquiry_dialog);
        state.close_inquiry();
        assert!(!state.show_inquiry_dialog);
    }
}
