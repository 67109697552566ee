//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use macrolint_core::prelude::*;
//! ```

// Analyzer API
pub use crate::analyzer::{AnalyzerBuilder, MacroUsageAnalyzer};

// Configuration
pub use crate::config::{load_options, AnalyzerConfig, AnalyzerOptions};

// Events
pub use crate::event::{
    load_events, DefinitionSource, MacroDefinitionEvent, SourceLocation, Token, TokenKind,
};

// Diagnostics
pub use crate::diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSink};

// Errors
pub use crate::error::{MacrolintError, MacrolintResult};
