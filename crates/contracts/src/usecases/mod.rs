pub mod common;
pub mod u501_export_design;
pub mod u502_send_inquiry;
