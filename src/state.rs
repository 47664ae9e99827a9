//! The explicit state enum for the branchy, mutually-recursive part of the
//! grammar (spec §4.2.1, §4.2.3, §4.2.7, §4.2.8): character data, tag open,
//! tag name, attributes, and close tags.
//!
//! Per the §9 flattening note, each state is handled by a function that
//! returns the *next* state (and possibly a completed token); a driver loop
//! in `tokenizer.rs` advances through them rather than recursing. Comments,
//! CDATA, the XML declaration, processing instructions, and DOCTYPE are each
//! self-contained constructs handled by a dedicated straight-line function
//! instead of living in this enum — see `tokenizer.rs` for why.

/// A state in the tag/attribute/character-data cascade.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum State {
    /// Top-level character data (spec §4.2.1).
    Data,
    /// A `]` was just seen in `Data`; check whether it starts `]]>`.
    DataBracket,
    /// A `<` was just seen; dispatch on what follows (spec §4.2.3).
    TagOpen,
    /// Consuming `NameChar`s of a start tag's name (spec §4.2.7).
    TagName,
    /// Between attributes, or at the tag's end (spec §4.2.7).
    AttributeBeforeName,
    /// Consuming `NameChar`s of an attribute's name.
    AttributeName,
    /// Whitespace before the attribute value's opening quote.
    AttributeBeforeValue,
    /// Inside a quoted attribute value; `char` is the quote in effect.
    AttributeValue(char),
    /// Just after an attribute value's closing quote.
    AttributeAfterValue,
    /// A `/` was just seen while scanning attributes; require `>`.
    TagSelfClosing,
    /// A `</` was just consumed; require `NameStartChar` (spec §4.2.8).
    TagEndOpen,
    /// Consuming `NameChar`s of a close tag's name.
    TagEndName,
    /// Whitespace before a close tag's `>`.
    TagEndAfterName,
}
