pub mod edge;
pub mod image;
