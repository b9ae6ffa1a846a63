//! Настройки клиента, задаются на этапе сборки.
//!
//! Страница ничего не запрашивает по сети, поэтому конфигурация сводится
//! к путям статических ресурсов и задержкам отложенных действий.

/// Фотография кухни, фон превью
pub const KITCHEN_IMAGE: &str = "/assets/kitchen.jpg";

pub const TIMBER_CRAFT_LOGO: &str = "/assets/timbercraft.png";
pub const BIOREV_LOGO: &str = "/assets/biorev-logo.png";

/// Задержка перед скачиванием экспорта, мс
pub const EXPORT_DELAY_MS: u32 = 300;

/// Задержка "отправки" запроса клиента, мс
pub const INQUIRY_DELAY_MS: u32 = 800;

/// Время жизни уведомления, мс
pub const TOAST_TIMEOUT_MS: u32 = 4000;

pub const SEARCH_PLACEHOLDER: &str = "Search options...";

/// Уровень логирования в консоль браузера
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
