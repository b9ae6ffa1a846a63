use serde::{Deserialize, Serialize};

/// Оформление уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeIntent {
    #[default]
    Success,
    Info,
    /// Деструктивное оформление (ошибка)
    Error,
}

/// Всплывающее уведомление о результате действия пользователя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub intent: NoticeIntent,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        intent: NoticeIntent,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            intent,
        }
    }

    pub fn design_saved() -> Self {
        Self::new(
            "Design Saved",
            "Your kitchen design has been saved successfully!",
            NoticeIntent::Success,
        )
    }

    pub fn share_coming_soon() -> Self {
        Self::new(
            "Share Design",
            "Share functionality coming soon!",
            NoticeIntent::Info,
        )
    }

    pub fn design_exported(file_name: &str) -> Self {
        Self::new(
            "Design Downloaded",
            format!("Saved as {}", file_name),
            NoticeIntent::Success,
        )
    }

    pub fn export_failed(reason: &str) -> Self {
        Self::new(
            "Export Failed",
            format!("Could not export your design: {}", reason),
            NoticeIntent::Error,
        )
    }

    pub fn inquiry_sent() -> Self {
        Self::new(
            "Inquiry Sent",
            "Your inquiry has been sent successfully!",
            NoticeIntent::Success,
        )
    }

    pub fn is_error(&self) -> bool {
        self.intent == NoticeIntent::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_notices() {
        let ok = Notice::design_exported("kitchen-design-1.png");
        assert!(!ok.is_error());
        assert!(ok.description.contains("kitchen-design-1.png"));

        let failed = Notice::export_failed("no canvas context");
        assert!(failed.is_error());
        assert_eq!(failed.title, "Export Failed");
        assert!(failed.description.ends_with("no canvas context"));
    }

    #[test]
    fn test_fixed_notices() {
        assert_eq!(Notice::design_saved().title, "Design Saved");
        assert_eq!(Notice::share_coming_soon().intent, NoticeIntent::Info);
        assert_eq!(
            Notice::inquiry_sent().description,
            "Your inquiry has been sent successfully!"
        );
    }
}
