use glob::Pattern;
use std::path::Path;

/// File-name patterns that batch mode skips
pub struct Exclusions {
    patterns: Vec<Pattern>,
}

impl Exclusions {
    /// Compile pattern strings. Invalid patterns are dropped with a warning.
    pub fn new(patterns: Vec<String>) -> Self {
        let compiled: Vec<Pattern> = patterns
            .into_iter()
            .filter_map(|p| match Pattern::new(&p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "ignoring invalid exclude pattern");
                    None
                }
            })
            .collect();

        Self { patterns: compiled }
    }

    /// An empty set that excludes nothing
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Get first matching pattern (for log messages)
    pub fn matching_pattern(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        self.patterns
            .iter()
            .find(|p| p.matches(name))
            .map(|p| p.as_str().to_string())
    }
}
