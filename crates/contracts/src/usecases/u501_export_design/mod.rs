pub mod request;

pub use request::{export_file_name, ExportRequest, EXPORT_HEIGHT, EXPORT_WIDTH};

use crate::usecases::common::UseCaseMetadata;

pub struct ExportDesign;

impl UseCaseMetadata for ExportDesign {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "export_design"
    }

    fn display_name() -> &'static str {
        "Download Design"
    }

    fn description() -> &'static str {
        "Render the preview to a PNG and download it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ExportDesign::full_name(), "u501_export_design");
    }
}
