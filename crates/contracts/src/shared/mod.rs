pub mod notice;
pub mod page_state;
pub mod search;
pub mod selection;
