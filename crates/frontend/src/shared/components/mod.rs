pub mod card_animated;
pub mod color_picker;
pub mod option_selector;
pub mod ui;
