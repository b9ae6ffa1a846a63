pub mod request;

pub use request::InquiryRequest;

use crate::usecases::common::UseCaseMetadata;

pub struct SendInquiry;

impl UseCaseMetadata for SendInquiry {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "send_inquiry"
    }

    fn display_name() -> &'static str {
        "Send Design Inquiry"
    }
}
