pub mod data;
pub mod fallback;
pub mod resolver;
pub mod settings;
