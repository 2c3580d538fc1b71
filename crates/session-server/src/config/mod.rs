mod settings;

pub use settings::{ServerConfig, SessionConfig, Settings};
