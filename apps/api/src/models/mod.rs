pub mod hosted;
pub mod resume;
