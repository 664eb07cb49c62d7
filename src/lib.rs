//! # tidyopt
//!
//! Typed, validated option facade for HTML Tidy-style markup reformatting
//! engines.
//!
//! The engine itself takes a large flat set of named options: boolean
//! switches, tri-state "auto" booleans, enumerated integers and free-form
//! strings. This crate puts a typed surface in front of that: every option
//! lives in a closed enum for its family, every value is validated against
//! the option's legal domain before the engine is invoked, and engine
//! rejections come back as structured errors carrying the engine's own
//! diagnostic text when it is retrievable.
//!
//! ## Quick Start
//!
//! ```
//! use tidyopt::{AutoBool, AutoBoolOption, BoolOption, Encoding, MemoryEngine, Tidy};
//!
//! let mut tidy = Tidy::new(MemoryEngine::new());
//!
//! // Plain booleans; the flag reports whether engine state changed.
//! let changed = tidy.set_bool(BoolOption::OutputXhtml, true)?;
//! assert!(changed);
//!
//! // Tri-state and enumerated options are validated before dispatch.
//! tidy.set_auto_bool(AutoBoolOption::Indent, AutoBool::Auto)?;
//! tidy.set_char_encoding(Encoding::Utf8)?;
//!
//! // Out-of-domain codes never reach the engine.
//! assert!(tidy.set_auto_bool_code(AutoBoolOption::Indent, 9).is_err());
//! # Ok::<(), tidyopt::Error>(())
//! ```
//!
//! ## Engines
//!
//! Setters are generic over the [`Engine`] trait, which mirrors the native
//! call boundary. [`MemoryEngine`] is a self-contained implementation for
//! tests and dry runs; with the `native` feature the crate links against
//! the system libtidy and exposes [`native::NativeEngine`].
//!
//! ## Concurrency
//!
//! Everything here is synchronous. A [`Tidy`] owns one engine session and
//! takes `&mut self` for every setter, so calls against one session cannot
//! interleave; use separate sessions for concurrent configuration.
//!
//! ## Features
//!
//! - `native`: link against the system libtidy and provide
//!   [`native::NativeEngine`].

pub mod engine;
pub mod error;
pub mod registry;
pub mod tidy;
pub mod value;

#[cfg(feature = "native")]
pub mod native;

// Re-exports
pub use engine::{Engine, MemoryEngine, SetOutcome};
pub use error::{Error, Result};
pub use registry::{
    AutoBoolOption, BoolOption, Descriptor, Domain, EnumIntOption, IntOption, OptionId,
    StringOption, ValueKind,
};
pub use tidy::Tidy;
pub use value::{AccessLevel, AutoBool, DuplicateAttrs, Encoding, Newline};
