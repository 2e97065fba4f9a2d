pub mod component;
pub mod transform;

pub use component::ZoomProvider;
