use serde::{Deserialize, Serialize};

/// Размер холста экспорта, px
pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 800;

/// Запрос на экспорт превью в изображение
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub width: u32,
    pub height: u32,
    /// Имя скачиваемого файла
    pub file_name: String,
}

impl ExportRequest {
    /// Запрос со стандартным размером холста и именем по метке времени
    pub fn at(epoch_ms: u64) -> Self {
        Self {
            width: EXPORT_WIDTH,
            height: EXPORT_HEIGHT,
            file_name: export_file_name(epoch_ms),
        }
    }
}

pub fn export_file_name(epoch_ms: u64) -> String {
    format!("kitchen-design-{}.png", epoch_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_request_at() {
        let request = ExportRequest::at(1_753_210_414_123);
        assert_eq!(request.width, 1200);
        assert_eq!(request.height, 800);
        assert_eq!(request.file_name, "kitchen-design-1753210414123.png");
    }
}
