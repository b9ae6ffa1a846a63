pub mod inquiry_dialog;
pub mod panel;
pub mod right;
