use serde::{Deserialize, Serialize};

use crate::shared::selection::KitchenSelection;

/// Запрос клиента по текущему дизайну.
///
/// Поля не валидируются: форма отправляется в любом состоянии.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Имена приложенных файлов
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Снимок выбора на момент отправки
    #[serde(default)]
    pub design: Option<KitchenSelection>,
}

impl InquiryRequest {
    pub fn with_design(mut self, design: KitchenSelection) -> Self {
        self.design = Some(design);
        self
    }

    /// Добавить имя файла. Повторно выбранный файл не дублируется,
    /// возвращает false, если имя уже было в списке.
    pub fn add_attachment(&mut self, file_name: impl Into<String>) -> bool {
        let file_name = file_name.into();
        if self.attachments.contains(&file_name) {
            return false;
        }
        self.attachments.push(file_name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_allowed() {
        let request = InquiryRequest::default().with_design(KitchenSelection::default());
        assert!(request.name.is_empty());
        assert_eq!(request.design, Some(KitchenSelection::default()));
    }

    #[test]
    fn test_serialized_design_uses_camel_case() {
        let mut request = InquiryRequest {
            name: "Ann".to_string(),
            ..Default::default()
        };
        request.add_attachment("floorplan.pdf");
        let request = request.with_design(KitchenSelection::default());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["attachments"][0], "floorplan.pdf");
        assert_eq!(json["design"]["wallColor"], "#ffffff");
    }

    #[test]
    fn test_same_file_is_attached_once() {
        let mut request = InquiryRequest::default();
        assert!(request.add_attachment("floorplan.pdf"));
        assert!(request.add_attachment("photo.jpg"));
        assert!(!request.add_attachment("floorplan.pdf"));
        assert_eq!(request.attachments, vec!["floorplan.pdf", "photo.jpg"]);
    }
}
