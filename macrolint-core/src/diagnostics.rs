//! Diagnostic categories, fixed message templates, and output formatting.

use crate::event::SourceLocation;
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// Category of an emitted diagnostic.
///
/// The first three come from the usage-category check, the last from the
/// naming check; a single run only ever produces one of the two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCategory {
    /// Body is all literals; a typed constant would be safer
    ConstantLike,
    /// Variadic macro; reported ahead of function-like
    Variadic,
    /// Function-like macro with fixed arity
    FunctionLike,
    /// Name is not written in all-uppercase form
    Naming,
}

/// A single finding: where, what kind, and which macro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub location: SourceLocation,
    pub category: DiagnosticCategory,
    pub macro_name: String,
}

impl Diagnostic {
    pub fn new(
        location: SourceLocation,
        category: DiagnosticCategory,
        macro_name: impl Into<String>,
    ) -> Self {
        Self {
            location,
            category,
            macro_name: macro_name.into(),
        }
    }

    /// Renders the fixed message template for this category. The macro name
    /// is the only variable part.
    pub fn message(&self) -> String {
        match self.category {
            DiagnosticCategory::ConstantLike => format!(
                "macro '{}' used to declare a constant; consider a typed compile-time constant",
                self.macro_name
            ),
            DiagnosticCategory::Variadic => format!(
                "variadic macro '{}' used; consider a variadic template function",
                self.macro_name
            ),
            DiagnosticCategory::FunctionLike => format!(
                "function-like macro '{}' used; consider a template function",
                self.macro_name
            ),
            DiagnosticCategory::Naming => format!(
                "macro definition does not define the macro name '{}' using all uppercase characters",
                self.macro_name
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message())
    }
}

/// Receives diagnostics as the analyzer produces them. The host's reporting
/// machinery sits behind this trait; emission order is source order.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Plain collection sink, used by tests and the CLI.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Prints diagnostics in plain text format.
pub fn print_plain(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("No macro-usage findings.");
    } else {
        println!("MACRO-USAGE FINDINGS ({}):", diagnostics.len());
        for d in diagnostics {
            println!("- {}", d);
        }
    }
}

/// Prints diagnostics in JSON format.
///
/// Falls back to line-per-finding output if serialization fails (should not
/// happen for these types, but the output path must not panic).
pub fn print_json(diagnostics: &[Diagnostic]) {
    let rendered: Vec<_> = diagnostics
        .iter()
        .map(|d| {
            json!({
                "location": d.location,
                "category": d.category,
                "macro": d.macro_name,
                "message": d.message(),
            })
        })
        .collect();

    match serde_json::to_string_pretty(&json!({ "findings": rendered })) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            for d in diagnostics {
                println!("{}", d);
            }
        }
    }
}
