mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, CustomLanguageConfig, DEFAULT_LANGUAGE, SingleLineBlocks};
