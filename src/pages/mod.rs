pub mod home;

pub use home::{Home, SizedGrid};
