pub mod records;
pub mod render;
pub mod structured_data;

pub use records::{CATALOGUE, Category, CategoryFilter, Link, Media, ProjectRecord};
pub use render::render_grid;
pub use structured_data::structured_data;
