//! macrolint-core: macro-usage analysis for C/C++ preprocessing pipelines
//!
//! This library classifies macro definitions observed during preprocessing
//! and flags the ones where a typed, scoped language construct would be
//! safer. It does not preprocess text itself: a host pipeline delivers one
//! definition event per `#define` it encounters, and macrolint decides
//! whether to emit a diagnostic.
//!
//! # Checks
//!
//! - **Usage categories** (default): constant-like macros (all-literal
//!   bodies), variadic macros, and function-like macros each get a
//!   dedicated diagnostic suggesting a typed replacement. Names matching
//!   the configured allow-list pattern are exempt.
//! - **Uppercase naming** (opt-in): flags macro names not written in
//!   all-uppercase form. Enabling it disables the usage-category check.
//!
//! Builtin macros, header guards, empty-bodied macros, macros that
//! stringize or token-paste, and (by default) command-line definitions are
//! filtered out before either check runs.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use macrolint_core::prelude::*;
//!
//! let analyzer = MacroUsageAnalyzer::builder()
//!     .allowed_pattern("^DEBUG_")
//!     .build()?;
//!
//! let mut sink: Vec<Diagnostic> = Vec::new();
//! let mut on_defined = analyzer.callback(&mut sink);
//! // ... host preprocessing loop calls on_defined(&event) per definition ...
//! ```
//!
//! # Module Organization
//!
//! - [`event`]: definition events as delivered by the host pipeline
//! - [`observer`]: exclusion filtering ahead of classification
//! - [`classify`]: structural categories and the caps-only name check
//! - [`diagnostics`]: categories, message templates, output formatting
//! - [`config`]: option resolution and macrolint.toml loading
//! - [`analyzer`]: fluent builder API
//! - [`error`]: typed error handling

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod logging;
pub mod observer;
pub mod prelude;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Analyzer API
pub use analyzer::{AnalyzerBuilder, MacroUsageAnalyzer};

// Classification
pub use classify::{categorize, check_naming, check_usage, is_caps_only, MacroCategory};

// Configuration
pub use config::{load_options, AnalyzerConfig, AnalyzerOptions, DEFAULT_ALLOWED_PATTERN};

// Diagnostics
pub use diagnostics::{print_json, print_plain, Diagnostic, DiagnosticCategory, DiagnosticSink};

// Error types
pub use error::{IoResultExt, MacrolintError, MacrolintResult};

// Events
pub use event::{
    load_events, DefinitionSource, MacroDefinitionEvent, SourceLocation, Token, TokenKind,
};

// Logging
pub use logging::init_structured_logging;

// Observer
pub use observer::{callback, on_macro_defined, skip_reason, SkipReason, EXEMPT_MACRO_NAMES};
