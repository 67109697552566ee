//! Macro classification: structural categories and the caps-only name check.
//!
//! Both checks are pure functions of the macro's name and token sequence.
//! Which one runs for a given analyzer is decided by
//! `AnalyzerConfig::enforce_uppercase_naming`; they are mutually exclusive
//! within a run.

use crate::config::AnalyzerConfig;
use crate::diagnostics::{Diagnostic, DiagnosticCategory};
use crate::event::MacroDefinitionEvent;

/// Structural shape of a macro definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroCategory {
    /// Replacement list consists solely of literal tokens
    ConstantLike,
    /// Declared with a variable argument list
    Variadic,
    /// Takes a fixed parameter list
    FunctionLike,
    /// Object-like with a non-literal body
    ObjectLike,
}

/// Computes the category tag for a definition.
///
/// Order matters: a variadic macro is function-like at the same time, so
/// variadic is tested first and wins.
pub fn categorize(event: &MacroDefinitionEvent) -> MacroCategory {
    if event.body_is_literal_only() {
        MacroCategory::ConstantLike
    } else if event.is_variadic {
        MacroCategory::Variadic
    } else if event.is_function_like {
        MacroCategory::FunctionLike
    } else {
        MacroCategory::ObjectLike
    }
}

/// True if the name is written in all-uppercase form: ASCII uppercase
/// letters, digits, and underscores only.
pub fn is_caps_only(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Usage-category check.
///
/// Skips names on the allow list; otherwise maps the structural category to
/// a diagnostic. Object-like macros with non-literal bodies produce nothing:
/// they may be doing something no typed construct can.
pub fn check_usage(event: &MacroDefinitionEvent, config: &AnalyzerConfig) -> Option<Diagnostic> {
    if config.is_allowed_name(&event.name) {
        return None;
    }

    let category = match categorize(event) {
        MacroCategory::ConstantLike => DiagnosticCategory::ConstantLike,
        MacroCategory::Variadic => DiagnosticCategory::Variadic,
        MacroCategory::FunctionLike => DiagnosticCategory::FunctionLike,
        MacroCategory::ObjectLike => return None,
    };

    Some(Diagnostic::new(
        event.location.clone(),
        category,
        event.name.clone(),
    ))
}

/// Naming check: flags names that are not all-uppercase.
pub fn check_naming(event: &MacroDefinitionEvent) -> Option<Diagnostic> {
    if is_caps_only(&event.name) {
        return None;
    }

    Some(Diagnostic::new(
        event.location.clone(),
        DiagnosticCategory::Naming,
        event.name.clone(),
    ))
}
