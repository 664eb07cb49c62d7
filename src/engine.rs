//! Engine-side contract and an in-process reference engine.
//!
//! The facade never talks to the markup engine directly; it goes through
//! the [`Engine`] trait, which mirrors the native call boundary: three set
//! primitives plus a handle-owned diagnostic buffer. The libtidy-backed
//! implementation lives in [`crate::native`] behind the `native` feature;
//! [`MemoryEngine`] is a self-contained implementation for tests, doctests
//! and dry-run configuration.

use std::collections::HashMap;
use std::ffi::CStr;

use crate::registry::OptionId;

/// Outcome of one engine set primitive.
///
/// `Changed` and `Unchanged` are equally successful; the distinction only
/// tells the caller whether engine state was actually altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The engine applied the value and its state changed.
    Changed,
    /// The engine already held the requested value.
    Unchanged,
    /// The engine refused the value.
    Rejected,
}

/// One configuration session of the markup engine.
///
/// A value implementing this trait owns exactly one engine handle together
/// with that handle's diagnostic buffer. Setter calls against one handle
/// must not be interleaved; `&mut self` receivers enforce that at compile
/// time. Distinct engine values are fully independent.
pub trait Engine {
    /// Set a boolean option. The value is encoded `0`/`1` engine-side.
    fn set_bool_option(&mut self, id: OptionId, value: bool) -> SetOutcome;

    /// Set an integer option. The engine does not validate enumerated
    /// domains itself; callers are expected to have done so.
    fn set_int_option(&mut self, id: OptionId, value: u64) -> SetOutcome;

    /// Set a string option from an already-marshaled C string.
    fn set_string_option(&mut self, id: OptionId, value: &CStr) -> SetOutcome;

    /// Drain the diagnostic text for the most recent rejection.
    ///
    /// Only meaningful immediately after a call returned
    /// [`SetOutcome::Rejected`]; the buffer is reused, so the text must be
    /// taken before the next setter call. Diagnostics are best-effort and
    /// an engine may furnish none.
    fn take_diagnostic(&mut self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stored {
    Bool(bool),
    Int(u64),
    Text(String),
}

/// In-process reference engine.
///
/// Holds option values in a map and reports `Changed`/`Unchanged` against
/// the engine defaults (`false`, `0`, `""`). Rejections can be scripted
/// per option, with or without diagnostic text, and every invocation is
/// recorded so tests can assert the engine was (or was not) reached.
///
/// # Example
///
/// ```
/// use tidyopt::{BoolOption, MemoryEngine, Tidy};
///
/// let mut tidy = Tidy::new(MemoryEngine::new());
/// assert!(tidy.set_bool(BoolOption::DropEmptyParas, true)?);
/// assert!(!tidy.set_bool(BoolOption::DropEmptyParas, true)?);
/// # Ok::<(), tidyopt::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryEngine {
    values: HashMap<OptionId, Stored>,
    rejections: HashMap<OptionId, Option<String>>,
    diagnostic: Option<String>,
    calls: Vec<OptionId>,
}

impl MemoryEngine {
    /// Create an engine with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a rejection for `id`, furnishing `diagnostic` on failure.
    pub fn reject_with(mut self, id: impl Into<OptionId>, diagnostic: &str) -> Self {
        self.rejections
            .insert(id.into(), Some(diagnostic.to_string()));
        self
    }

    /// Script a rejection for `id` without any diagnostic text, as an
    /// engine that fails to furnish one would behave.
    pub fn reject_silently(mut self, id: impl Into<OptionId>) -> Self {
        self.rejections.insert(id.into(), None);
        self
    }

    /// Current boolean value of `id` (default `false`).
    pub fn bool_value(&self, id: impl Into<OptionId>) -> bool {
        match self.values.get(&id.into()) {
            Some(Stored::Bool(value)) => *value,
            _ => false,
        }
    }

    /// Current integer value of `id` (default `0`).
    pub fn int_value(&self, id: impl Into<OptionId>) -> u64 {
        match self.values.get(&id.into()) {
            Some(Stored::Int(value)) => *value,
            _ => 0,
        }
    }

    /// Current string value of `id` (default empty).
    pub fn text_value(&self, id: impl Into<OptionId>) -> &str {
        match self.values.get(&id.into()) {
            Some(Stored::Text(value)) => value,
            _ => "",
        }
    }

    /// Every set primitive invoked so far, in call order.
    pub fn calls(&self) -> &[OptionId] {
        &self.calls
    }

    /// How many set primitives were invoked so far.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    fn apply(&mut self, id: OptionId, value: Stored) -> SetOutcome {
        self.calls.push(id);
        if let Some(diagnostic) = self.rejections.get(&id) {
            self.diagnostic = diagnostic.clone();
            return SetOutcome::Rejected;
        }
        let default = match value {
            Stored::Bool(_) => Stored::Bool(false),
            Stored::Int(_) => Stored::Int(0),
            Stored::Text(_) => Stored::Text(String::new()),
        };
        let previous = self.values.insert(id, value.clone());
        if previous.unwrap_or(default) == value {
            SetOutcome::Unchanged
        } else {
            SetOutcome::Changed
        }
    }
}

impl Engine for MemoryEngine {
    fn set_bool_option(&mut self, id: OptionId, value: bool) -> SetOutcome {
        self.apply(id, Stored::Bool(value))
    }

    fn set_int_option(&mut self, id: OptionId, value: u64) -> SetOutcome {
        self.apply(id, Stored::Int(value))
    }

    fn set_string_option(&mut self, id: OptionId, value: &CStr) -> SetOutcome {
        let text = value.to_string_lossy().into_owned();
        self.apply(id, Stored::Text(text))
    }

    fn take_diagnostic(&mut self) -> Option<String> {
        self.diagnostic.take()
    }
}
