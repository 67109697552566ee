//! Builder pattern API for configuring and running macro-usage analysis.
//!
//! Provides a fluent interface over the observer/classifier pipeline:
//!
//! ```rust,ignore
//! use macrolint_core::prelude::*;
//!
//! let analyzer = MacroUsageAnalyzer::builder()
//!     .allowed_pattern("^(DEBUG_|TRACE_)")
//!     .ignore_command_line_definitions(true)
//!     .build()?;
//!
//! let diagnostics = analyzer.analyze_all(&events);
//! for d in &diagnostics {
//!     println!("{}", d);
//! }
//! ```

use crate::config::{AnalyzerConfig, AnalyzerOptions};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::MacrolintResult;
use crate::event::MacroDefinitionEvent;
use crate::observer;

/// A configured macro-usage analyzer for one run.
///
/// Holds only the immutable configuration; no state accumulates across
/// events, so one analyzer per translation unit costs nothing and needs no
/// synchronization.
#[derive(Debug, Clone)]
pub struct MacroUsageAnalyzer {
    config: AnalyzerConfig,
}

impl MacroUsageAnalyzer {
    /// Create an analyzer from an already-resolved configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer from raw options (e.g. loaded from macrolint.toml).
    pub fn from_options(options: &AnalyzerOptions) -> MacrolintResult<Self> {
        Ok(Self::new(AnalyzerConfig::resolve(options)?))
    }

    /// Start building an analyzer with the default configuration.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// The resolved configuration this analyzer runs with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Process one macro-definition event, emitting into `sink`.
    pub fn on_macro_defined<S: DiagnosticSink>(&self, event: &MacroDefinitionEvent, sink: &mut S) {
        observer::on_macro_defined(event, &self.config, sink);
    }

    /// The closure shape a host event source registers as its callback.
    pub fn callback<'a, S: DiagnosticSink>(
        &'a self,
        sink: &'a mut S,
    ) -> impl FnMut(&MacroDefinitionEvent) + 'a {
        observer::callback(&self.config, sink)
    }

    /// Run over a recorded event sequence and collect the diagnostics in
    /// source order.
    pub fn analyze_all<'e>(
        &self,
        events: impl IntoIterator<Item = &'e MacroDefinitionEvent>,
    ) -> Vec<Diagnostic> {
        let mut sink = Vec::new();
        for event in events {
            self.on_macro_defined(event, &mut sink);
        }
        sink
    }
}

/// Builder for [`MacroUsageAnalyzer`].
///
/// Unset options keep the documented defaults; `build` fails only if the
/// allow-list pattern does not compile.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    options: AnalyzerOptions,
}

impl AnalyzerBuilder {
    /// Set the allow-list regex for the usage-category check.
    pub fn allowed_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.allowed_pattern = Some(pattern.into());
        self
    }

    /// Switch to the all-uppercase naming check (disables the usage check).
    pub fn enforce_uppercase_naming(mut self, enabled: bool) -> Self {
        self.options.enforce_uppercase_naming = Some(enabled);
        self
    }

    /// Exempt macros defined on the build command line.
    pub fn ignore_command_line_definitions(mut self, enabled: bool) -> Self {
        self.options.ignore_command_line_definitions = Some(enabled);
        self
    }

    /// Resolve the options into a ready analyzer.
    pub fn build(self) -> MacrolintResult<MacroUsageAnalyzer> {
        MacroUsageAnalyzer::from_options(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticCategory;
    use crate::event::{DefinitionSource, SourceLocation, Token};

    fn constant_event(name: &str, line: u32) -> MacroDefinitionEvent {
        MacroDefinitionEvent {
            name: name.into(),
            tokens: vec![Token::literal("1")],
            location: SourceLocation::new("t.h", line, 9),
            source: DefinitionSource::Ordinary,
            is_header_guard: false,
            is_function_like: false,
            is_variadic: false,
        }
    }

    #[test]
    fn test_builder_defaults() {
        let analyzer = MacroUsageAnalyzer::builder().build().unwrap();
        assert!(!analyzer.config().enforce_uppercase_naming);
        assert!(analyzer.config().ignore_command_line_definitions);
    }

    #[test]
    fn test_builder_invalid_pattern() {
        assert!(MacroUsageAnalyzer::builder()
            .allowed_pattern("([")
            .build()
            .is_err());
    }

    #[test]
    fn test_analyze_all_preserves_order() {
        let analyzer = MacroUsageAnalyzer::builder().build().unwrap();
        let events = vec![constant_event("FIRST", 1), constant_event("SECOND", 2)];

        let diagnostics = analyzer.analyze_all(&events);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].macro_name, "FIRST");
        assert_eq!(diagnostics[1].macro_name, "SECOND");
    }

    #[test]
    fn test_naming_mode_replaces_usage_mode() {
        let analyzer = MacroUsageAnalyzer::builder()
            .enforce_uppercase_naming(true)
            .build()
            .unwrap();

        // All-caps constant macro: would fire the usage check, passes naming.
        let diagnostics = analyzer.analyze_all(&[constant_event("MAX", 1)]);
        assert!(diagnostics.is_empty());

        let diagnostics = analyzer.analyze_all(&[constant_event("maxValue", 2)]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].category, DiagnosticCategory::Naming);
    }
}
