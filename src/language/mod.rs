mod registry;

pub use registry::{BlockMarker, LanguageProfile, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
