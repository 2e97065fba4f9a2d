pub mod component;
pub mod drag_data;
pub mod grid;
pub mod toolbar;

pub use component::{use_grid_handle, CeilingGrid, GridHandle};
pub use toolbar::Toolbar;
