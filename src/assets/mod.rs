mod loader;

pub use loader::{LevelFiles, LoadError, load_level, load_texture};
