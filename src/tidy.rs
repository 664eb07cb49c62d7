//! The typed option setter over an engine handle.

use std::ffi::CString;

use crate::engine::{Engine, SetOutcome};
use crate::error::{Error, Result};
use crate::registry::{
    AutoBoolOption, BoolOption, EnumIntOption, IntOption, OptionId, StringOption,
};
use crate::value::{AccessLevel, AutoBool, DuplicateAttrs, Encoding, Newline};

/// Typed, validated configuration facade over one engine session.
///
/// Each setter validates its value against the option's declared domain,
/// encodes it the way the engine expects and forwards it through one of
/// four dispatch primitives. On success the returned flag reports whether
/// engine state actually changed (`true`) or already held the requested
/// value (`false`); both are successful outcomes. On failure the engine's
/// diagnostic text is attached when it can be retrieved.
///
/// A `Tidy` owns its engine handle exclusively, so at most one setter call
/// is in flight per handle. Distinct `Tidy` values are independent.
///
/// # Example
///
/// ```
/// use tidyopt::{AutoBool, AutoBoolOption, BoolOption, Encoding, MemoryEngine, Tidy};
///
/// let mut tidy = Tidy::new(MemoryEngine::new());
/// tidy.set_bool(BoolOption::OutputXhtml, true)?;
/// tidy.set_auto_bool(AutoBoolOption::Indent, AutoBool::Auto)?;
/// tidy.set_char_encoding(Encoding::Utf8)?;
/// # Ok::<(), tidyopt::Error>(())
/// ```
#[derive(Debug)]
pub struct Tidy<E: Engine> {
    engine: E,
}

impl<E: Engine> Tidy<E> {
    /// Wrap a freshly created engine session.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Shared access to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Give the engine back, consuming the facade.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Set a plain boolean option.
    pub fn set_bool(&mut self, option: BoolOption, value: bool) -> Result<bool> {
        self.dispatch_bool(option.id(), value)
    }

    /// Set a tri-state option from a typed value.
    pub fn set_auto_bool(&mut self, option: AutoBoolOption, value: AutoBool) -> Result<bool> {
        // Closed enum, already in domain; straight to the integer path.
        self.dispatch_int(option.id(), value.code())
    }

    /// Set a tri-state option from a raw wire code.
    ///
    /// The code is validated against `{0, 1, 2}` before the engine is
    /// invoked; the engine's integer primitive does not enforce the
    /// tri-state domain itself.
    pub fn set_auto_bool_code(&mut self, option: AutoBoolOption, code: u64) -> Result<bool> {
        self.check_domain(option.id(), code)?;
        self.dispatch_int(option.id(), code)
    }

    /// Set an enumerated integer option from a raw wire code.
    ///
    /// The code is validated against the option's legal set first; an
    /// out-of-range code never reaches the engine and the error names the
    /// valid set.
    pub fn set_enum_int(&mut self, option: EnumIntOption, value: u64) -> Result<bool> {
        self.check_domain(option.id(), value)?;
        self.dispatch_int(option.id(), value)
    }

    /// Set an unconstrained integer option.
    pub fn set_int(&mut self, option: IntOption, value: u64) -> Result<bool> {
        self.dispatch_int(option.id(), value)
    }

    /// Set a free-form string option.
    pub fn set_string(&mut self, option: StringOption, value: &str) -> Result<bool> {
        self.dispatch_string(option.id(), value)
    }

    /// Set the character encoding for both input and output.
    pub fn set_char_encoding(&mut self, encoding: Encoding) -> Result<bool> {
        self.set_enum_int(EnumIntOption::CharEncoding, encoding.code())
    }

    /// Set the character encoding for the input only.
    pub fn set_input_encoding(&mut self, encoding: Encoding) -> Result<bool> {
        self.set_enum_int(EnumIntOption::InputEncoding, encoding.code())
    }

    /// Set the character encoding for the output only.
    pub fn set_output_encoding(&mut self, encoding: Encoding) -> Result<bool> {
        self.set_enum_int(EnumIntOption::OutputEncoding, encoding.code())
    }

    /// Set the output line-ending style.
    pub fn set_newline(&mut self, newline: Newline) -> Result<bool> {
        self.set_enum_int(EnumIntOption::Newline, newline.code())
    }

    /// Set the repeated-attribute policy.
    pub fn set_repeated_attributes(&mut self, policy: DuplicateAttrs) -> Result<bool> {
        self.set_enum_int(EnumIntOption::RepeatedAttributes, policy.code())
    }

    /// Set the accessibility-checking level.
    pub fn set_accessibility_check(&mut self, level: AccessLevel) -> Result<bool> {
        self.set_enum_int(EnumIntOption::AccessibilityCheck, level.code())
    }

    fn check_domain(&self, id: OptionId, value: u64) -> Result<()> {
        let descriptor = id.descriptor();
        if descriptor.domain.contains(value) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                option: descriptor.name,
                value,
                domain: descriptor.domain,
            })
        }
    }

    fn dispatch_bool(&mut self, id: OptionId, value: bool) -> Result<bool> {
        let outcome = self.engine.set_bool_option(id, value);
        self.conclude(id, outcome)
    }

    fn dispatch_int(&mut self, id: OptionId, value: u64) -> Result<bool> {
        let outcome = self.engine.set_int_option(id, value);
        self.conclude(id, outcome)
    }

    fn dispatch_string(&mut self, id: OptionId, value: &str) -> Result<bool> {
        // Marshaled storage lives for this call only; dropped on every
        // exit path, applied or rejected.
        let text = CString::new(value).map_err(|err| Error::Marshal {
            option: id.name(),
            reason: err.to_string(),
        })?;
        let outcome = self.engine.set_string_option(id, &text);
        self.conclude(id, outcome)
    }

    fn conclude(&mut self, id: OptionId, outcome: SetOutcome) -> Result<bool> {
        match outcome {
            SetOutcome::Changed => Ok(true),
            SetOutcome::Unchanged => Ok(false),
            SetOutcome::Rejected => Err(Error::EngineRejected {
                option: id.name(),
                // The buffer is only trustworthy right now, before any
                // further call reuses it.
                diagnostic: self.engine.take_diagnostic(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    #[test]
    fn test_bool_round_trip() {
        let mut tidy = Tidy::new(MemoryEngine::new());
        assert!(tidy.set_bool(BoolOption::AddXmlDecl, true).unwrap());
        assert!(tidy.engine().bool_value(BoolOption::AddXmlDecl));
    }

    #[test]
    fn test_auto_bool_validates_before_engine() {
        let mut tidy = Tidy::new(MemoryEngine::new());
        let err = tidy
            .set_auto_bool_code(AutoBoolOption::MergeDivs, 3)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { value: 3, .. }));
        assert_eq!(tidy.engine().call_count(), 0);
    }

    #[test]
    fn test_typed_convenience_setters() {
        let mut tidy = Tidy::new(MemoryEngine::new());
        assert!(tidy.set_output_encoding(Encoding::Utf8).unwrap());
        assert_eq!(tidy.engine().int_value(OptionId::OutCharEncoding), 4);

        assert!(tidy.set_newline(Newline::CrLf).unwrap());
        assert_eq!(tidy.engine().int_value(OptionId::Newline), 1);

        assert!(tidy
            .set_repeated_attributes(DuplicateAttrs::KeepLast)
            .unwrap());
        assert_eq!(tidy.engine().int_value(OptionId::DuplicateAttrs), 1);
    }

    #[test]
    fn test_rejection_carries_diagnostic() {
        let engine = MemoryEngine::new().reject_with(BoolOption::TidyMark, "not while writing back");
        let mut tidy = Tidy::new(engine);
        let err = tidy.set_bool(BoolOption::TidyMark, false).unwrap_err();
        match err {
            Error::EngineRejected { option, diagnostic } => {
                assert_eq!(option, "tidy-mark");
                assert_eq!(diagnostic.as_deref(), Some("not while writing back"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_marshal_failure_skips_engine() {
        let mut tidy = Tidy::new(MemoryEngine::new());
        let err = tidy
            .set_string(StringOption::Doctype, "str\0ict")
            .unwrap_err();
        assert!(matches!(err, Error::Marshal { option: "doctype", .. }));
        assert_eq!(tidy.engine().call_count(), 0);
    }
}
