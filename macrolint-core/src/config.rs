//! Analyzer configuration: option resolution and macrolint.toml loading.
//!
//! The host's configuration layer hands over raw [`AnalyzerOptions`];
//! [`AnalyzerConfig::resolve`] compiles them once into the immutable form
//! used for the rest of the run. A malformed allow-list pattern is caught
//! here, before any macro-definition event fires.

use crate::error::{MacrolintError, MacrolintResult};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default allow-list pattern for the usage-category check.
///
/// Debug-switch macros are the classic legitimate use of object-like
/// macros, so `DEBUG_`-prefixed names are exempt out of the box.
pub const DEFAULT_ALLOWED_PATTERN: &str = "^DEBUG_*";

/// Raw option values, as read from macrolint.toml or supplied by a host.
/// Unset fields fall back to the documented defaults during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerOptions {
    /// Regex of macro names exempt from the usage-category check.
    pub allowed_pattern: Option<String>,
    /// Check names for all-uppercase form instead of usage categories.
    pub enforce_uppercase_naming: Option<bool>,
    /// Skip macros defined via the build command line.
    pub ignore_command_line_definitions: Option<bool>,
}

/// Immutable, resolved configuration. Built once per run, before any event
/// is delivered; `Send + Sync`, so independent translation units can share
/// it without synchronization.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Compiled allow-list pattern (default: [`DEFAULT_ALLOWED_PATTERN`])
    pub allowed_pattern: Regex,
    /// When true, run the naming check and disable the usage-category check
    /// entirely; the two checks never both apply in one run (default: false)
    pub enforce_uppercase_naming: bool,
    /// Exempt command-line definitions (default: true)
    pub ignore_command_line_definitions: bool,
}

impl AnalyzerConfig {
    /// Resolves raw options into a usable configuration.
    ///
    /// Fails with [`MacrolintError::Pattern`] if the allow-list regex does
    /// not compile.
    pub fn resolve(options: &AnalyzerOptions) -> MacrolintResult<Self> {
        let pattern = options
            .allowed_pattern
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_PATTERN);
        let allowed_pattern =
            Regex::new(pattern).map_err(|e| MacrolintError::pattern(pattern, e.to_string()))?;

        Ok(Self {
            allowed_pattern,
            enforce_uppercase_naming: options.enforce_uppercase_naming.unwrap_or(false),
            ignore_command_line_definitions: options
                .ignore_command_line_definitions
                .unwrap_or(true),
        })
    }

    /// Whether the macro name is on the configured allow list.
    ///
    /// An unanchored search: the pattern may hit anywhere in the name
    /// unless explicitly anchored.
    pub fn is_allowed_name(&self, name: &str) -> bool {
        self.allowed_pattern.is_match(name)
    }
}

/// Loads analyzer options from macrolint.toml if it exists.
pub fn load_options(root: &Path) -> Result<Option<AnalyzerOptions>> {
    let path = root.join("macrolint.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let opts = toml::from_str(&content).context("Invalid macrolint.toml")?;
    Ok(Some(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AnalyzerConfig::resolve(&AnalyzerOptions::default()).unwrap();
        assert!(!cfg.enforce_uppercase_naming);
        assert!(cfg.ignore_command_line_definitions);
        assert!(cfg.is_allowed_name("DEBUG_TRACE"));
        assert!(!cfg.is_allowed_name("MAX_SIZE"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let options = AnalyzerOptions {
            allowed_pattern: Some("([".into()),
            ..Default::default()
        };
        let err = AnalyzerConfig::resolve(&options).unwrap_err();
        assert!(matches!(err, MacrolintError::Pattern { .. }));
    }

    #[test]
    fn test_unanchored_match() {
        let options = AnalyzerOptions {
            allowed_pattern: Some("INTERNAL".into()),
            ..Default::default()
        };
        let cfg = AnalyzerConfig::resolve(&options).unwrap();
        assert!(cfg.is_allowed_name("MY_INTERNAL_FLAG"));
    }

    #[test]
    fn test_toml_options() {
        let opts: AnalyzerOptions = toml::from_str(
            r#"
            allowed_pattern = "^(DEBUG_|TRACE_)"
            enforce_uppercase_naming = true
            "#,
        )
        .unwrap();
        let cfg = AnalyzerConfig::resolve(&opts).unwrap();
        assert!(cfg.enforce_uppercase_naming);
        assert!(cfg.ignore_command_line_definitions, "unset field keeps default");
        assert!(cfg.is_allowed_name("TRACE_IO"));
    }
}
