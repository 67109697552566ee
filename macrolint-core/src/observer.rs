//! Definition observer: exclusion filtering ahead of classification.
//!
//! The host pipeline invokes [`on_macro_defined`] once per macro definition,
//! in source order, on the thread preprocessing one translation unit.
//! Definitions that cannot or should not be replaced are rejected here;
//! survivors go to the classifier, which emits at most one diagnostic each.

use crate::classify::{check_naming, check_usage};
use crate::config::AnalyzerConfig;
use crate::diagnostics::DiagnosticSink;
use crate::event::{DefinitionSource, MacroDefinitionEvent};
use tracing::debug;

/// Macro names exempt from analysis regardless of configuration.
///
/// Historical carve-outs for feature-test macros that compilers inject into
/// every translation unit. Kept as an explicit, documented list rather than
/// a pattern; extend only with names a compiler defines on its own.
pub const EXEMPT_MACRO_NAMES: &[&str] = &["__GCC_HAVE_DWARF2_CFI_ASM"];

/// Why a definition was rejected before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Defined in the compiler's builtin/implicit source
    Builtin,
    /// Recognized by the host as a header include guard
    HeaderGuard,
    /// Replacement list has zero tokens
    EmptyBody,
    /// Body stringizes (`#`) or token-pastes (`##`)
    TokenPasting,
    /// Defined on the command line while those are configured as exempt
    CommandLine,
    /// Name is on [`EXEMPT_MACRO_NAMES`]
    ExemptName,
}

/// Applies the exclusion rules in order, short-circuiting on the first hit.
/// `None` means the definition proceeds to classification.
pub fn skip_reason(
    event: &MacroDefinitionEvent,
    config: &AnalyzerConfig,
) -> Option<SkipReason> {
    if event.source == DefinitionSource::Builtin {
        return Some(SkipReason::Builtin);
    }
    if event.is_header_guard {
        return Some(SkipReason::HeaderGuard);
    }
    if event.body_is_empty() {
        return Some(SkipReason::EmptyBody);
    }
    if event.pastes_or_stringizes() {
        return Some(SkipReason::TokenPasting);
    }
    if config.ignore_command_line_definitions && event.source == DefinitionSource::CommandLine {
        return Some(SkipReason::CommandLine);
    }
    if EXEMPT_MACRO_NAMES.contains(&event.name.as_str()) {
        return Some(SkipReason::ExemptName);
    }
    None
}

/// Entry point the host pipeline calls once per macro definition.
///
/// Stateless across calls: the outcome depends only on the event and the
/// immutable configuration, so replaying the same event sequence yields the
/// same diagnostic sequence.
pub fn on_macro_defined<S: DiagnosticSink>(
    event: &MacroDefinitionEvent,
    config: &AnalyzerConfig,
    sink: &mut S,
) {
    if let Some(reason) = skip_reason(event, config) {
        debug!(macro_name = %event.name, reason = ?reason, "macro definition skipped");
        return;
    }

    let finding = if config.enforce_uppercase_naming {
        check_naming(event)
    } else {
        check_usage(event, config)
    };

    if let Some(diagnostic) = finding {
        sink.emit(diagnostic);
    }
}

/// Builds the closure a host event source registers as its macro-defined
/// callback. A plain callable is the whole subscription surface; no trait
/// object is needed.
pub fn callback<'a, S: DiagnosticSink>(
    config: &'a AnalyzerConfig,
    sink: &'a mut S,
) -> impl FnMut(&MacroDefinitionEvent) + 'a {
    move |event| on_macro_defined(event, config, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerOptions;
    use crate::diagnostics::Diagnostic;
    use crate::event::{SourceLocation, Token, TokenKind};

    fn event(name: &str, tokens: Vec<Token>) -> MacroDefinitionEvent {
        MacroDefinitionEvent {
            name: name.into(),
            tokens,
            location: SourceLocation::new("test.h", 1, 9),
            source: DefinitionSource::Ordinary,
            is_header_guard: false,
            is_function_like: false,
            is_variadic: false,
        }
    }

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::resolve(&AnalyzerOptions::default()).unwrap()
    }

    #[test]
    fn test_builtin_rejected() {
        let mut e = event("__STDC__", vec![Token::literal("1")]);
        e.source = DefinitionSource::Builtin;
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::Builtin));
    }

    #[test]
    fn test_header_guard_rejected() {
        let mut e = event("FOO_H", vec![Token::literal("1")]);
        e.is_header_guard = true;
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::HeaderGuard));
    }

    #[test]
    fn test_empty_body_rejected() {
        let e = event("EMPTY", Vec::new());
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::EmptyBody));
    }

    #[test]
    fn test_token_pasting_rejected() {
        let e = event(
            "CONCAT",
            vec![
                Token::other("a"),
                Token::new(TokenKind::HashHash, "##"),
                Token::other("b"),
            ],
        );
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::TokenPasting));
    }

    #[test]
    fn test_command_line_exemption_is_configurable() {
        let mut e = event("NDEBUG", vec![Token::literal("1")]);
        e.source = DefinitionSource::CommandLine;
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::CommandLine));

        let options = AnalyzerOptions {
            ignore_command_line_definitions: Some(false),
            ..Default::default()
        };
        let cfg = AnalyzerConfig::resolve(&options).unwrap();
        assert_eq!(skip_reason(&e, &cfg), None);
    }

    #[test]
    fn test_exempt_name_rejected() {
        let e = event("__GCC_HAVE_DWARF2_CFI_ASM", vec![Token::literal("1")]);
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::ExemptName));
    }

    #[test]
    fn test_rejection_order_builtin_first() {
        // A builtin, header-guard, empty macro reports the builtin rule.
        let mut e = event("X", Vec::new());
        e.source = DefinitionSource::Builtin;
        e.is_header_guard = true;
        assert_eq!(skip_reason(&e, &config()), Some(SkipReason::Builtin));
    }

    #[test]
    fn test_skipped_definitions_emit_nothing() {
        let cfg = config();
        let mut sink: Vec<Diagnostic> = Vec::new();

        let mut builtin = event("B", vec![Token::literal("1")]);
        builtin.source = DefinitionSource::Builtin;
        on_macro_defined(&builtin, &cfg, &mut sink);
        on_macro_defined(&event("EMPTY", Vec::new()), &cfg, &mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_survivor_is_classified() {
        let cfg = config();
        let mut sink: Vec<Diagnostic> = Vec::new();
        on_macro_defined(&event("MAX", vec![Token::literal("100")]), &cfg, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].macro_name, "MAX");
    }

    #[test]
    fn test_callback_registration() {
        let cfg = config();
        let mut sink: Vec<Diagnostic> = Vec::new();
        {
            let mut on_defined = callback(&cfg, &mut sink);
            on_defined(&event("MAX", vec![Token::literal("100")]));
            on_defined(&event("FLAG", vec![Token::other("someVar")]));
        }
        assert_eq!(sink.len(), 1);
    }
}
