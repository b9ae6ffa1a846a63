pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod toast;
