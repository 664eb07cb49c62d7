//! Static catalog of engine options.
//!
//! Every option the engine understands is listed here exactly once, tagged
//! with its value kind and legal domain. The typed setter surface in
//! [`crate::tidy`] is derived from this catalog; nothing else in the crate
//! hard-codes option knowledge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::{AccessLevel, DuplicateAttrs, Encoding, Newline};

/// Engine symbolic identifier, one per supported option.
///
/// The engine resolves these through [`OptionId::name`], its canonical
/// config-file spelling; the numeric id is an engine-internal detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    // HTML, XHTML, XML options
    XmlDecl,
    XmlSpace,
    AltText,
    XmlPIs,
    MakeBare,
    MakeClean,
    CssPrefix,
    DecorateInferredUl,
    Doctype,
    DropEmptyParas,
    DropPropAttrs,
    EncloseBlockText,
    EncloseBodyText,
    EscapeCdata,
    FixBackslash,
    FixComments,
    FixUri,
    HideComments,
    IndentCdata,
    XmlTags,
    JoinClasses,
    JoinStyles,
    LiteralAttribs,
    LogicalEmphasis,
    LowerLiterals,
    MergeDivs,
    Ncr,
    BlockTags,
    EmptyTags,
    InlineTags,
    PreTags,
    NumEntities,
    HtmlOut,
    XhtmlOut,
    XmlOut,
    QuoteAmpersand,
    QuoteMarks,
    QuoteNbsp,
    DuplicateAttrs,
    ReplaceColor,
    BodyOnly,
    UpperCaseAttrs,
    UpperCaseTags,
    Word2000,
    // Diagnostics options
    AccessibilityCheckLevel,
    ShowErrors,
    ShowWarnings,
    // Pretty-print options
    BreakBeforeBr,
    IndentContent,
    IndentAttributes,
    IndentSpaces,
    ShowMarkup,
    PunctWrap,
    TabSize,
    VertSpace,
    WrapLen,
    WrapAsp,
    WrapAttVals,
    WrapJste,
    WrapPhp,
    WrapScriptlets,
    WrapSection,
    // Character encoding options
    AsciiChars,
    CharEncoding,
    InCharEncoding,
    Newline,
    OutputBom,
    OutCharEncoding,
    // Miscellaneous options
    ErrFile,
    ForceOutput,
    Emacs,
    EmacsFile,
    KeepFileTimes,
    OutFile,
    Quiet,
    Mark,
    WriteBack,
}

impl OptionId {
    /// The engine's canonical config name for this option.
    pub const fn name(self) -> &'static str {
        match self {
            OptionId::XmlDecl => "add-xml-decl",
            OptionId::XmlSpace => "add-xml-space",
            OptionId::AltText => "alt-text",
            OptionId::XmlPIs => "assume-xml-procins",
            OptionId::MakeBare => "bare",
            OptionId::MakeClean => "clean",
            OptionId::CssPrefix => "css-prefix",
            OptionId::DecorateInferredUl => "decorate-inferred-ul",
            OptionId::Doctype => "doctype",
            OptionId::DropEmptyParas => "drop-empty-paras",
            OptionId::DropPropAttrs => "drop-proprietary-attributes",
            OptionId::EncloseBlockText => "enclose-block-text",
            OptionId::EncloseBodyText => "enclose-text",
            OptionId::EscapeCdata => "escape-cdata",
            OptionId::FixBackslash => "fix-backslash",
            OptionId::FixComments => "fix-bad-comments",
            OptionId::FixUri => "fix-uri",
            OptionId::HideComments => "hide-comments",
            OptionId::IndentCdata => "indent-cdata",
            OptionId::XmlTags => "input-xml",
            OptionId::JoinClasses => "join-classes",
            OptionId::JoinStyles => "join-styles",
            OptionId::LiteralAttribs => "literal-attributes",
            OptionId::LogicalEmphasis => "logical-emphasis",
            OptionId::LowerLiterals => "lower-literals",
            OptionId::MergeDivs => "merge-divs",
            OptionId::Ncr => "ncr",
            OptionId::BlockTags => "new-blocklevel-tags",
            OptionId::EmptyTags => "new-empty-tags",
            OptionId::InlineTags => "new-inline-tags",
            OptionId::PreTags => "new-pre-tags",
            OptionId::NumEntities => "numeric-entities",
            OptionId::HtmlOut => "output-html",
            OptionId::XhtmlOut => "output-xhtml",
            OptionId::XmlOut => "output-xml",
            OptionId::QuoteAmpersand => "quote-ampersand",
            OptionId::QuoteMarks => "quote-marks",
            OptionId::QuoteNbsp => "quote-nbsp",
            OptionId::DuplicateAttrs => "repeated-attributes",
            OptionId::ReplaceColor => "replace-color",
            OptionId::BodyOnly => "show-body-only",
            OptionId::UpperCaseAttrs => "uppercase-attributes",
            OptionId::UpperCaseTags => "uppercase-tags",
            OptionId::Word2000 => "word-2000",
            OptionId::AccessibilityCheckLevel => "accessibility-check",
            OptionId::ShowErrors => "show-errors",
            OptionId::ShowWarnings => "show-warnings",
            OptionId::BreakBeforeBr => "break-before-br",
            OptionId::IndentContent => "indent",
            OptionId::IndentAttributes => "indent-attributes",
            OptionId::IndentSpaces => "indent-spaces",
            OptionId::ShowMarkup => "markup",
            OptionId::PunctWrap => "punctuation-wrap",
            OptionId::TabSize => "tab-size",
            OptionId::VertSpace => "vertical-space",
            OptionId::WrapLen => "wrap",
            OptionId::WrapAsp => "wrap-asp",
            OptionId::WrapAttVals => "wrap-attributes",
            OptionId::WrapJste => "wrap-jste",
            OptionId::WrapPhp => "wrap-php",
            OptionId::WrapScriptlets => "wrap-script-literals",
            OptionId::WrapSection => "wrap-sections",
            OptionId::AsciiChars => "ascii-chars",
            OptionId::CharEncoding => "char-encoding",
            OptionId::InCharEncoding => "input-encoding",
            OptionId::Newline => "newline",
            OptionId::OutputBom => "output-bom",
            OptionId::OutCharEncoding => "output-encoding",
            OptionId::ErrFile => "error-file",
            OptionId::ForceOutput => "force-output",
            OptionId::Emacs => "gnu-emacs",
            OptionId::EmacsFile => "gnu-emacs-file",
            OptionId::KeepFileTimes => "keep-time",
            OptionId::OutFile => "output-file",
            OptionId::Quiet => "quiet",
            OptionId::Mark => "tidy-mark",
            OptionId::WriteBack => "write-back",
        }
    }

    /// The legal-value constraint for this option.
    pub fn domain(self) -> Domain {
        match self {
            // Enumerated integers
            OptionId::DuplicateAttrs => Domain::Set(DuplicateAttrs::CODES),
            OptionId::AccessibilityCheckLevel => Domain::Set(AccessLevel::CODES),
            OptionId::Newline => Domain::Set(Newline::CODES),
            OptionId::CharEncoding | OptionId::InCharEncoding | OptionId::OutCharEncoding => {
                Domain::Set(Encoding::CODES)
            }
            // Tri-state auto-booleans
            OptionId::MergeDivs
            | OptionId::BodyOnly
            | OptionId::IndentContent
            | OptionId::OutputBom => Domain::TriState,
            // Unconstrained integers
            OptionId::ShowErrors
            | OptionId::IndentSpaces
            | OptionId::TabSize
            | OptionId::WrapLen => Domain::AnyInt,
            // Free-form strings
            OptionId::AltText
            | OptionId::CssPrefix
            | OptionId::Doctype
            | OptionId::BlockTags
            | OptionId::EmptyTags
            | OptionId::InlineTags
            | OptionId::PreTags
            | OptionId::ErrFile
            | OptionId::EmacsFile
            | OptionId::OutFile => Domain::Text,
            // Everything else is a plain boolean switch
            _ => Domain::Bool,
        }
    }

    /// The value kind this option accepts.
    pub fn kind(self) -> ValueKind {
        match self.domain() {
            Domain::Bool => ValueKind::Bool,
            Domain::TriState => ValueKind::AutoBool,
            Domain::Set(_) => ValueKind::EnumInt,
            Domain::AnyInt => ValueKind::FreeInt,
            Domain::Text => ValueKind::Text,
        }
    }

    /// Full static metadata for this option.
    pub fn descriptor(self) -> Descriptor {
        Descriptor {
            id: self,
            name: self.name(),
            kind: self.kind(),
            domain: self.domain(),
        }
    }
}

/// The kind of value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Two-valued switch encoded `0`/`1`.
    Bool,
    /// Three-valued switch encoded `0`/`1`/`2`.
    AutoBool,
    /// Integer constrained to an explicit finite set.
    EnumInt,
    /// Unconstrained unsigned integer.
    FreeInt,
    /// Free-form text.
    Text,
}

/// Legal-value constraint for one option.
///
/// Displays as the valid set (e.g. `{0, 1, 2, 3}`) so it can be embedded
/// verbatim in [`crate::Error::OutOfRange`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `{0, 1}`.
    Bool,
    /// `{0, 1, 2}`.
    TriState,
    /// An explicit finite set of codes.
    Set(&'static [u64]),
    /// Any unsigned integer.
    AnyInt,
    /// Any string.
    Text,
}

impl Domain {
    /// Whether an integer value is a member of this domain.
    pub fn contains(self, value: u64) -> bool {
        match self {
            Domain::Bool => value <= 1,
            Domain::TriState => value <= 2,
            Domain::Set(codes) => codes.contains(&value),
            Domain::AnyInt => true,
            Domain::Text => false,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Bool => write!(f, "{{0, 1}}"),
            Domain::TriState => write!(f, "{{0, 1, 2}}"),
            Domain::Set(codes) => {
                write!(f, "{{")?;
                for (i, code) in codes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{code}")?;
                }
                write!(f, "}}")
            }
            Domain::AnyInt => write!(f, "any unsigned integer"),
            Domain::Text => write!(f, "any string"),
        }
    }
}

/// Static metadata describing one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// The engine's symbolic identifier.
    pub id: OptionId,
    /// The engine's canonical config name.
    pub name: &'static str,
    /// The kind of value the option accepts.
    pub kind: ValueKind,
    /// The legal-value constraint.
    pub domain: Domain,
}

macro_rules! option_family {
    (
        $(#[$meta:meta])*
        $family:ident {
            $($(#[$vmeta:meta])* $variant:ident => $id:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $family {
            $($(#[$vmeta])* $variant,)+
        }

        impl $family {
            /// Every option in this family, in declaration order.
            pub const ALL: &'static [$family] = &[$(Self::$variant),+];

            /// The engine's symbolic identifier for this option.
            pub const fn id(self) -> OptionId {
                match self {
                    $(Self::$variant => OptionId::$id,)+
                }
            }

            /// The engine's canonical config name for this option.
            pub const fn name(self) -> &'static str {
                self.id().name()
            }
        }

        impl From<$family> for OptionId {
            fn from(option: $family) -> OptionId {
                option.id()
            }
        }
    };
}

option_family! {
    /// Plain boolean switches.
    BoolOption {
        /// Add the XML declaration when outputting XML or XHTML.
        AddXmlDecl => XmlDecl,
        /// Add `xml:space="preserve"` to elements such as `<pre>` when generating XML.
        AddXmlSpace => XmlSpace,
        /// Require `?>` as the processing-instruction terminator rather than `>`.
        AssumeXmlProcins => XmlPIs,
        /// Strip Microsoft-specific HTML from Word 2000 documents.
        Bare => MakeBare,
        /// Replace surplus presentational tags and attributes with style rules.
        Clean => MakeClean,
        /// Decorate inferred `<ul>` elements with CSS markup.
        DecorateInferredUl => DecorateInferredUl,
        /// Discard empty paragraphs.
        DropEmptyParas => DropEmptyParas,
        /// Strip proprietary attributes, such as MS data binding attributes.
        DropProprietaryAttributes => DropPropAttrs,
        /// Wrap text found in block-level elements in a `<p>` element.
        EncloseBlockText => EncloseBlockText,
        /// Wrap text found directly in the body element in a `<p>` element.
        EncloseText => EncloseBodyText,
        /// Convert `<![CDATA[]]>` sections to normal text.
        EscapeCdata => EscapeCdata,
        /// Replace backslashes in URLs with forward slashes.
        FixBackslash => FixBackslash,
        /// Replace unexpected hyphens in comments with `=` characters.
        FixBadComments => FixComments,
        /// Escape illegal characters in URI attribute values.
        FixUri => FixUri,
        /// Omit comments from the output.
        HideComments => HideComments,
        /// Indent `<![CDATA[]]>` sections.
        IndentCdata => IndentCdata,
        /// Use the XML parser rather than the error-correcting HTML parser.
        InputXml => XmlTags,
        /// Combine multiple class assignments into a single class name.
        JoinClasses => JoinClasses,
        /// Combine multiple style values into a single style.
        JoinStyles => JoinStyles,
        /// Pass whitespace in attribute values through unchanged.
        LiteralAttributes => LiteralAttribs,
        /// Replace `<i>` with `<em>` and `<b>` with `<strong>`.
        LogicalEmphasis => LogicalEmphasis,
        /// Lower-case attribute values that take a list of predefined values.
        LowerLiterals => LowerLiterals,
        /// Allow numeric character references.
        Ncr => Ncr,
        /// Output entities in numeric rather than named form.
        NumericEntities => NumEntities,
        /// Write pretty-printed output as HTML.
        OutputHtml => HtmlOut,
        /// Write pretty-printed output as extensible HTML.
        OutputXhtml => XhtmlOut,
        /// Write pretty-printed output as well-formed XML.
        OutputXml => XmlOut,
        /// Output unadorned `&` characters as `&amp;`.
        QuoteAmpersand => QuoteAmpersand,
        /// Output `"` characters as `&quot;`.
        QuoteMarks => QuoteMarks,
        /// Output non-breaking spaces as entities rather than U+00A0.
        QuoteNbsp => QuoteNbsp,
        /// Replace numeric color values with HTML color names where defined.
        ReplaceColor => ReplaceColor,
        /// Output attribute names in upper case.
        UppercaseAttributes => UpperCaseAttrs,
        /// Output tag names in upper case.
        UppercaseTags => UpperCaseTags,
        /// Strip the surplus markup Word 2000 inserts when saving as web pages.
        Word2000 => Word2000,
        /// Report warnings alongside errors.
        ShowWarnings => ShowWarnings,
        /// Output a line break before each `<br>` element.
        BreakBeforeBr => BreakBeforeBr,
        /// Begin each attribute on a new line.
        IndentAttributes => IndentAttributes,
        /// Generate a pretty-printed version of the markup.
        Markup => ShowMarkup,
        /// Line wrap after some Unicode or Chinese punctuation characters.
        PunctuationWrap => PunctWrap,
        /// Add some empty lines for readability.
        VerticalSpace => VertSpace,
        /// Line wrap text within ASP pseudo elements (`<% ... %>`).
        WrapAsp => WrapAsp,
        /// Line wrap attribute values.
        WrapAttributes => WrapAttVals,
        /// Line wrap text within JSTE pseudo elements (`<# ... #>`).
        WrapJste => WrapJste,
        /// Line wrap text within PHP pseudo elements.
        WrapPhp => WrapPhp,
        /// Line wrap string literals in script attributes.
        WrapScriptLiterals => WrapScriptlets,
        /// Line wrap text within `<![ ... ]>` section tags.
        WrapSections => WrapSection,
        /// Downgrade named entities to their closest ASCII equivalents.
        AsciiChars => AsciiChars,
        /// Produce output even if errors are encountered.
        ForceOutput => ForceOutput,
        /// Report errors and warnings in a format GNU Emacs can parse.
        GnuEmacs => Emacs,
        /// Keep the original modification time of files tidied in place.
        KeepTime => KeepFileTimes,
        /// Suppress the summary and informational messages.
        Quiet => Quiet,
        /// Add a meta element noting the document has been tidied.
        TidyMark => Mark,
        /// Write the tidied markup back to the file it was read from.
        WriteBack => WriteBack,
    }
}

option_family! {
    /// Tri-state switches accepting no, yes or auto.
    AutoBoolOption {
        /// Indent block-level tags; auto decides per element content.
        Indent => IndentContent,
        /// Merge nested `<div>` elements produced by the clean transform.
        MergeDivs => MergeDivs,
        /// Write a byte-order mark; auto mirrors whether the input had one.
        OutputBom => OutputBom,
        /// Print only the body contents; auto applies when body was inferred.
        ShowBodyOnly => BodyOnly,
    }
}

option_family! {
    /// Integer options constrained to an explicit finite set.
    EnumIntOption {
        /// Accessibility-checking level, 0 through 3.
        AccessibilityCheck => AccessibilityCheckLevel,
        /// Character encoding for both input and output.
        CharEncoding => CharEncoding,
        /// Character encoding for the input only.
        InputEncoding => InCharEncoding,
        /// Line-ending style for the output.
        Newline => Newline,
        /// Character encoding for the output only.
        OutputEncoding => OutCharEncoding,
        /// Which copy survives when an attribute is repeated.
        RepeatedAttributes => DuplicateAttrs,
    }
}

option_family! {
    /// Unconstrained unsigned-integer options.
    IntOption {
        /// Spaces used to indent content when indentation is enabled.
        IndentSpaces => IndentSpaces,
        /// How many errors to report before going quiet; 0 reports none.
        ShowErrors => ShowErrors,
        /// Columns between successive tab stops when reading input.
        TabSize => TabSize,
        /// Right margin for line wrapping; 0 disables wrapping.
        Wrap => WrapLen,
    }
}

option_family! {
    /// Free-form string options.
    StringOption {
        /// Default `alt=` text for `<img>` attributes.
        AltText => AltText,
        /// Prefix used for style rule names generated by the clean transform.
        CssPrefix => CssPrefix,
        /// DOCTYPE declaration: omit, auto, strict, loose or an FPI string.
        Doctype => Doctype,
        /// File to receive errors and warnings instead of stderr.
        ErrorFile => ErrFile,
        /// File used for GNU Emacs style error reporting.
        GnuEmacsFile => EmacsFile,
        /// Space- or comma-separated list of new block-level tags.
        NewBlocklevelTags => BlockTags,
        /// Space- or comma-separated list of new empty inline tags.
        NewEmptyTags => EmptyTags,
        /// Space- or comma-separated list of new non-empty inline tags.
        NewInlineTags => InlineTags,
        /// Space- or comma-separated list of tags treated like `<pre>`.
        NewPreTags => PreTags,
        /// File to receive the markup instead of stdout.
        OutputFile => OutFile,
    }
}
