pub mod environment;
pub mod fallback;
pub mod model_fit;
