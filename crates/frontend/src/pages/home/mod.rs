pub mod view;
pub mod view_model;

pub use view::HomePage;
pub use view_model::KitchenViewModel;
