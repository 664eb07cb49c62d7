//! Closed value domains for enumerated options.
//!
//! The engine encodes every non-boolean choice as a small integer. Each
//! family of codes gets its own closed enumeration here, so an encoding
//! code can never be passed where a tri-state code is expected.

use serde::{Deserialize, Serialize};

/// Three-valued option domain, distinct from plain booleans.
///
/// Encoded as `0`, `1`, `2` on the wire to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoBool {
    /// Behavior disabled (`0`).
    #[default]
    No,
    /// Behavior enabled (`1`).
    Yes,
    /// Let the engine decide from context (`2`).
    Auto,
}

impl AutoBool {
    /// Every legal wire code, in encoding order.
    pub const CODES: &'static [u64] = &[0, 1, 2];

    /// The wire code the engine expects.
    pub const fn code(self) -> u64 {
        match self {
            AutoBool::No => 0,
            AutoBool::Yes => 1,
            AutoBool::Auto => 2,
        }
    }

    /// Decode a wire code, if it is in the tri-state domain.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(AutoBool::No),
            1 => Some(AutoBool::Yes),
            2 => Some(AutoBool::Auto),
            _ => None,
        }
    }
}

impl From<bool> for AutoBool {
    fn from(value: bool) -> Self {
        if value {
            AutoBool::Yes
        } else {
            AutoBool::No
        }
    }
}

/// Character encoding the engine uses for input and/or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Pass bytes above 127 through without translating them to entities.
    Raw,
    /// Accept Latin-1 values but write entities for everything above 127.
    Ascii,
    /// ISO-8859-15.
    Latin0,
    /// ISO-8859-1; characters above 255 are written as entities.
    Latin1,
    /// UTF-8 for both input and output.
    Utf8,
    /// The ISO-2022 family of encodings, e.g. ISO-2022-JP.
    Iso2022,
    /// MacRoman; vendor-specific values accepted on input.
    Mac,
    /// Windows-1252; vendor-specific values accepted on input.
    Win1252,
    /// IBM code page 858.
    Ibm858,
    /// UTF-16 little-endian.
    Utf16Le,
    /// UTF-16 big-endian.
    Utf16Be,
    /// UTF-16 with platform byte order.
    Utf16,
    /// Big5 (traditional Chinese).
    Big5,
    /// Shift_JIS (Japanese).
    ShiftJis,
}

impl Encoding {
    /// Every legal wire code, in encoding order.
    pub const CODES: &'static [u64] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

    /// The wire code the engine expects.
    pub const fn code(self) -> u64 {
        match self {
            Encoding::Raw => 0,
            Encoding::Ascii => 1,
            Encoding::Latin0 => 2,
            Encoding::Latin1 => 3,
            Encoding::Utf8 => 4,
            Encoding::Iso2022 => 5,
            Encoding::Mac => 6,
            Encoding::Win1252 => 7,
            Encoding::Ibm858 => 8,
            Encoding::Utf16Le => 9,
            Encoding::Utf16Be => 10,
            Encoding::Utf16 => 11,
            Encoding::Big5 => 12,
            Encoding::ShiftJis => 13,
        }
    }

    /// Decode a wire code, if it names a supported encoding.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Encoding::Raw),
            1 => Some(Encoding::Ascii),
            2 => Some(Encoding::Latin0),
            3 => Some(Encoding::Latin1),
            4 => Some(Encoding::Utf8),
            5 => Some(Encoding::Iso2022),
            6 => Some(Encoding::Mac),
            7 => Some(Encoding::Win1252),
            8 => Some(Encoding::Ibm858),
            9 => Some(Encoding::Utf16Le),
            10 => Some(Encoding::Utf16Be),
            11 => Some(Encoding::Utf16),
            12 => Some(Encoding::Big5),
            13 => Some(Encoding::ShiftJis),
            _ => None,
        }
    }
}

/// Line-ending style for generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Newline {
    /// Unix line endings (`\n`).
    Lf,
    /// DOS/Windows line endings (`\r\n`).
    CrLf,
    /// Classic Mac OS line endings (`\r`).
    Cr,
}

impl Newline {
    /// Every legal wire code, in encoding order.
    pub const CODES: &'static [u64] = &[0, 1, 2];

    /// The wire code the engine expects.
    pub const fn code(self) -> u64 {
        match self {
            Newline::Lf => 0,
            Newline::CrLf => 1,
            Newline::Cr => 2,
        }
    }

    /// Decode a wire code, if it names a line-ending style.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Newline::Lf),
            1 => Some(Newline::CrLf),
            2 => Some(Newline::Cr),
            _ => None,
        }
    }

    /// The conventional style for the current platform.
    pub fn platform() -> Self {
        if cfg!(windows) {
            Newline::CrLf
        } else {
            Newline::Lf
        }
    }
}

/// Which copy survives when an attribute is repeated on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateAttrs {
    /// Keep the first occurrence.
    KeepFirst,
    /// Keep the last occurrence.
    KeepLast,
}

impl DuplicateAttrs {
    /// Every legal wire code, in encoding order.
    pub const CODES: &'static [u64] = &[0, 1];

    /// The wire code the engine expects.
    pub const fn code(self) -> u64 {
        match self {
            DuplicateAttrs::KeepFirst => 0,
            DuplicateAttrs::KeepLast => 1,
        }
    }

    /// Decode a wire code, if it names a policy.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(DuplicateAttrs::KeepFirst),
            1 => Some(DuplicateAttrs::KeepLast),
            _ => None,
        }
    }
}

/// Accessibility-checking level the engine applies to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    /// Classic accessibility checking only.
    Classic,
    /// WAI priority 1 checks.
    Priority1,
    /// WAI priority 2 checks.
    Priority2,
    /// WAI priority 3 checks.
    Priority3,
}

impl AccessLevel {
    /// Every legal wire code, in encoding order.
    pub const CODES: &'static [u64] = &[0, 1, 2, 3];

    /// The wire code the engine expects.
    pub const fn code(self) -> u64 {
        match self {
            AccessLevel::Classic => 0,
            AccessLevel::Priority1 => 1,
            AccessLevel::Priority2 => 2,
            AccessLevel::Priority3 => 3,
        }
    }

    /// Decode a wire code, if it names a checking level.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(AccessLevel::Classic),
            1 => Some(AccessLevel::Priority1),
            2 => Some(AccessLevel::Priority2),
            3 => Some(AccessLevel::Priority3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_bool_codes() {
        assert_eq!(AutoBool::No.code(), 0);
        assert_eq!(AutoBool::Yes.code(), 1);
        assert_eq!(AutoBool::Auto.code(), 2);
        assert_eq!(AutoBool::from_code(2), Some(AutoBool::Auto));
        assert_eq!(AutoBool::from_code(3), None);
    }

    #[test]
    fn test_auto_bool_from_bool() {
        assert_eq!(AutoBool::from(true), AutoBool::Yes);
        assert_eq!(AutoBool::from(false), AutoBool::No);
    }

    #[test]
    fn test_code_tables_are_exhaustive() {
        for &code in Encoding::CODES {
            let encoding = Encoding::from_code(code).unwrap();
            assert_eq!(encoding.code(), code);
        }
        assert_eq!(Encoding::from_code(14), None);

        for &code in AccessLevel::CODES {
            let level = AccessLevel::from_code(code).unwrap();
            assert_eq!(level.code(), code);
        }
        assert_eq!(AccessLevel::from_code(4), None);

        for &code in Newline::CODES {
            assert_eq!(Newline::from_code(code).unwrap().code(), code);
        }
        for &code in DuplicateAttrs::CODES {
            assert_eq!(DuplicateAttrs::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Encoding::ShiftJis).unwrap();
        assert_eq!(json, "\"shift-jis\"");

        let parsed: AutoBool = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, AutoBool::Auto);
    }
}
