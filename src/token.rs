//! The public token data model (spec §3.1).

use std::borrow::Cow;

/// One token of the XML token stream.
///
/// Text fields that can never involve entity resolution (names, CDATA,
/// comments, PI target/content, doctype identifiers) borrow directly from
/// the input. Attribute values and top-level character data, which may
/// require substituting resolved entity text, use `Cow` so the common case
/// (no entities present) stays allocation-free.
#[derive(Clone, PartialEq, Debug)]
pub enum Token<'a> {
    /// A single character of data, including one produced by resolving a
    /// top-level entity or character reference (spec §9 Open Question,
    /// resolved in DESIGN.md: references are resolved, not forwarded).
    Character(char),
    /// A `<![CDATA[ ... ]]>` section's literal text. Never entity-resolved
    /// (CDATA content is always literal), so always borrowed.
    CData(&'a str),
    /// A `<!-- ... -->` comment's text.
    Comment(&'a str),
    /// The XML declaration, `<?xml version="..." encoding="..." standalone="..."?>`.
    Declaration {
        /// The `version` pseudo-attribute's value.
        version: &'a str,
        /// The `encoding` pseudo-attribute's value, if present.
        encoding: Option<&'a str>,
        /// The `standalone` pseudo-attribute's value: `None` when
        /// unspecified, `Some(true)` for `yes`, `Some(false)` for `no`.
        standalone: Option<bool>,
    },
    /// A processing instruction, `<?target content?>`.
    ProcessingInstruction {
        /// The instruction's target name.
        target: &'a str,
        /// The instruction's content, if any.
        content: Option<&'a str>,
    },
    /// A DOCTYPE declaration with external identifiers only (spec §1:
    /// internal-subset entity/element/attlist declarations are not
    /// materialized).
    Doctype {
        /// The document element name the DOCTYPE names.
        name: &'a str,
        /// The `PUBLIC` identifier, if one was given.
        public_id: Option<&'a str>,
        /// The `SYSTEM` identifier, if one was given.
        system_id: Option<&'a str>,
    },
    /// A start tag, `<name attr="value" ...>` or its self-closing form
    /// `<name attr="value" .../>`.
    OpenTag {
        /// The tag's name.
        name: &'a str,
        /// Attributes, in document order, with unique names (spec §3.2).
        attributes: Vec<(&'a str, Cow<'a, str>)>,
        /// Whether the tag closed itself with `/>`.
        self_closing: bool,
    },
    /// An end tag, `</name>`.
    CloseTag(&'a str),
    /// The terminal end-of-file token. Every successful stream ends with
    /// exactly one of these; further calls keep returning it (spec §8,
    /// invariant 3).
    EndOfFile,
}
