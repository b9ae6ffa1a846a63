pub mod a001_cabinet_style;
pub mod a002_backsplash;
pub mod a003_flooring;
pub mod a004_wall_color;
pub mod common;
