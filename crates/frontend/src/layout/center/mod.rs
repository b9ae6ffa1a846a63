pub mod center;
pub mod design_info;
pub mod preview;
