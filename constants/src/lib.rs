pub mod camera;
pub mod environment;
pub mod model;
