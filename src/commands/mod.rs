pub mod context;
pub mod count;
pub mod init;
pub mod languages;

pub use context::{load_config, write_output};
pub use count::{count_sources, run_count, run_count_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use languages::{format_languages, run_languages};
