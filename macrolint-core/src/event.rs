//! Macro definition events delivered by the host preprocessing pipeline.
//!
//! macrolint never lexes or preprocesses text itself. The host observes
//! `#define` directives during preprocessing and hands over one
//! [`MacroDefinitionEvent`] per definition, with token kinds and macro shape
//! flags already computed. The analyzer borrows events and never mutates them.
//!
//! All event types derive serde so that a host harness (or the CLI) can
//! replay a recorded JSON dump of a preprocessing run.

use crate::error::{IoResultExt, MacrolintError, MacrolintResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Kind of a single token in a macro replacement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Numeric, string, or character literal
    Literal,
    /// The stringize operator `#`
    Hash,
    /// The token-paste operator `##`
    HashHash,
    /// Anything else: identifiers, punctuation, keywords
    Other,
}

/// One token of a macro replacement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, text)
    }

    /// Shorthand for a non-literal, non-operator token.
    pub fn other(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Other, text)
    }

    pub fn is_literal(&self) -> bool {
        self.kind == TokenKind::Literal
    }

    /// True for the stringize (`#`) and token-paste (`##`) operators.
    pub fn is_paste_or_stringize(&self) -> bool {
        matches!(self.kind, TokenKind::Hash | TokenKind::HashHash)
    }
}

/// Where a macro definition was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionSource {
    /// Predefined macros injected by the compiler itself
    Builtin,
    /// `-D` style definitions from the build command line
    CommandLine,
    /// An ordinary source or header file
    Ordinary,
}

/// Source position of the `#define` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    /// 1-indexed line
    pub line: u32,
    /// 1-indexed column
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A single "macro defined" event, produced by the host once per macro
/// definition encountered in a translation unit.
///
/// The `is_header_guard`, `is_function_like`, and `is_variadic` flags are
/// precomputed by the host; the analyzer does not re-derive them from the
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDefinitionEvent {
    /// Identifier text of the macro's name token
    pub name: String,
    /// Ordered replacement-list tokens (the macro body)
    pub tokens: Vec<Token>,
    /// Position of the definition
    pub location: SourceLocation,
    /// Classification of the defining file
    pub source: DefinitionSource,
    /// The host recognized this macro as a header include guard
    #[serde(default)]
    pub is_header_guard: bool,
    /// Declared with a parameter list
    #[serde(default)]
    pub is_function_like: bool,
    /// Declared with a variable argument list
    #[serde(default)]
    pub is_variadic: bool,
}

impl MacroDefinitionEvent {
    pub fn body_is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if any body token is a `#` or `##` operator. Such macros cannot
    /// be mechanically replaced by a function or constant.
    pub fn pastes_or_stringizes(&self) -> bool {
        self.tokens.iter().any(Token::is_paste_or_stringize)
    }

    /// True if the body is non-empty and consists solely of literal tokens.
    pub fn body_is_literal_only(&self) -> bool {
        !self.tokens.is_empty() && self.tokens.iter().all(Token::is_literal)
    }
}

/// Loads a JSON dump of macro-definition events, as recorded by a host
/// harness. Event order in the file is preserved.
pub fn load_events(path: &Path) -> MacrolintResult<Vec<MacroDefinitionEvent>> {
    let content = fs::read_to_string(path).with_path(path)?;
    let events: Vec<MacroDefinitionEvent> =
        serde_json::from_str(&content).map_err(|e| MacrolintError::parse(path, e.to_string()))?;
    Ok(events)
}
