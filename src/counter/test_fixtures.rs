//! Shared test fixtures for counter tests.

use crate::language::LanguageProfile;

/// `#` inline comments with triple-quote blocks
pub fn python_profile() -> LanguageProfile {
    LanguageProfile::new(
        "python",
        "#",
        vec![
            ("'''", "'''"),
            ("\"\"\"", "\"\"\""),
            ("r'''", "'''"),
            ("r\"\"\"", "\"\"\""),
        ],
    )
}

/// `--` inline comments with `/* */` blocks
pub fn sql_profile() -> LanguageProfile {
    LanguageProfile::new("sql", "--", vec![("/*", "*/")])
}

/// `//` inline comments with `/* */` blocks
pub fn javascript_profile() -> LanguageProfile {
    LanguageProfile::new("javascript", "//", vec![("/*", "*/")])
}
