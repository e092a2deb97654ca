//! Translation configuration for ts2dart
//!
//! Controls which inputs are translated and how large an input may be. The CLI builds one from its flags; library
//! callers usually start from [`TranslateConfig::default`].

/// Suffix of TypeScript declaration-only files.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Maximum source file size (100 MB)
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    /// Skip declaration-only inputs (they carry no code to translate)
    pub skip_declaration_files: bool,
    /// File-name suffix that marks a declaration-only input
    pub declaration_suffix: String,
    /// Inputs larger than this many bytes are rejected before reading
    pub max_source_size: u64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            skip_declaration_files: true,
            declaration_suffix: DECLARATION_SUFFIX.to_string(),
            max_source_size: MAX_SOURCE_SIZE,
        }
    }
}

impl TranslateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether declaration-only inputs are skipped
    pub fn with_skip_declaration_files(mut self, skip: bool) -> Self {
        self.skip_declaration_files = skip;
        self
    }

    /// Set the suffix that marks declaration-only inputs
    pub fn with_declaration_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.declaration_suffix = suffix.into();
        self
    }

    /// Set the maximum accepted source size in bytes
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }

    /// Return `true` if `file_name` should be left out of the translation.
    pub fn skips(&self, file_name: &str) -> bool {
        self.skip_declaration_files && file_name.ends_with(&self.declaration_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranslateConfig::default();
        assert!(config.skip_declaration_files);
        assert_eq!(config.declaration_suffix, ".d.ts");
        assert_eq!(config.max_source_size, 100 * 1024 * 1024);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(TranslateConfig::new(), TranslateConfig::default());
    }

    #[test]
    fn test_builder_chaining() {
        let config = TranslateConfig::new()
            .with_skip_declaration_files(false)
            .with_declaration_suffix(".decl.ts")
            .with_max_source_size(10);
        assert!(!config.skip_declaration_files);
        assert_eq!(config.declaration_suffix, ".decl.ts");
        assert_eq!(config.max_source_size, 10);
    }

    #[test]
    fn test_skips_declaration_files_only_when_enabled() {
        let config = TranslateConfig::default();
        assert!(config.skips("lib.d.ts"));
        assert!(!config.skips("main.ts"));

        let config = config.with_skip_declaration_files(false);
        assert!(!config.skips("lib.d.ts"));
    }
}
