//! The tokenizer itself: the `Data`/tag/attribute driver loop (spec §4.2.1,
//! §4.2.3, §4.2.7, §4.2.8) plus the dedicated straight-line scanners for the
//! self-contained constructs — comments, CDATA, the XML declaration,
//! processing instructions, and DOCTYPE — that don't benefit from living in
//! the `State` cascade.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::builder::OpenTagBuilder;
use crate::entities::{resolve_named, resolve_numeric, EntityTable, PREDEFINED};
use crate::error::{Error, ErrorKind, Result, TextPos};
use crate::source::{CharCursor, CharSource};
use crate::state::State;
use crate::token::Token;
use crate::xmlchar::XmlCharExt;

/// Streams [`Token`]s out of an XML document, one well-formedness unit at a
/// time.
///
/// ```
/// use xmlparser::{Token, Tokenizer};
///
/// let mut t = Tokenizer::new("<a x='1'>hi</a>");
/// assert_eq!(t.advance().unwrap(), Token::OpenTag {
///     name: "a",
///     attributes: vec![("x", "1".into())],
///     self_closing: false,
/// });
/// ```
///
/// A tokenizer never allocates except where an entity reference forces an
/// attribute value or piece of character data to become an owned string;
/// everything else borrows directly from the input.
pub struct Tokenizer<'a> {
    source: CharCursor<'a>,
    entities: &'a dyn EntityTable,
    /// Reused scratch buffer for attribute values that contain entity
    /// references (spec §4.3); cleared and materialized into a `String` at
    /// the point of emission, never retained across a token boundary.
    buffer: String,
    /// Scalars still owed to the caller after a top-level named-entity
    /// reference resolved to more than one `char` (spec §9: entity tokens
    /// are consumed immediately, not queued as tokens, but a multi-scalar
    /// replacement still has to surface every scalar it contains — only
    /// the first can be returned by the `advance()` call that triggered
    /// the resolution, so the rest wait here for subsequent calls).
    pending: VecDeque<char>,
    status: Status,
    iter_done: bool,
}

enum Status {
    Running,
    Finished,
    Errored(Error),
}

enum Resolved<'a> {
    Char(char),
    Text(&'a str),
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer recognizing only the five predefined XML entities.
    pub fn new(input: &'a str) -> Self {
        Self::with_entities(input, &PREDEFINED)
    }

    /// Create a tokenizer that additionally resolves named entities via
    /// `entities` (falling back to none if the table doesn't also include
    /// the predefined five).
    pub fn with_entities(input: &'a str, entities: &'a dyn EntityTable) -> Self {
        Tokenizer {
            source: CharCursor::new(input),
            entities,
            buffer: String::new(),
            pending: VecDeque::new(),
            status: Status::Running,
            iter_done: false,
        }
    }

    /// Produce the next token (spec §6.2). Once `Token::EndOfFile` has been
    /// returned, further calls keep returning it; once an error has been
    /// returned, further calls keep returning that same error.
    pub fn advance(&mut self) -> Result<Token<'a>> {
        if let Some(c) = self.pending.pop_front() {
            return Ok(Token::Character(c));
        }
        match &self.status {
            Status::Finished => return Ok(Token::EndOfFile),
            Status::Errored(e) => return Err(*e),
            Status::Running => {}
        }
        let result = self.tokenize_one();
        match &result {
            Ok(Token::EndOfFile) => self.status = Status::Finished,
            Err(e) => self.status = Status::Errored(*e),
            _ => {}
        }
        result
    }

    fn tokenize_one(&mut self) -> Result<Token<'a>> {
        if self.source.at_end() {
            return Ok(Token::EndOfFile);
        }
        self.run()
    }

    // -- small cursor helpers -------------------------------------------------

    fn pos(&self) -> usize {
        self.source.pos()
    }

    fn cur(&self) -> Option<char> {
        self.source.current()
    }

    fn bump(&mut self) {
        self.source.advance(1);
    }

    fn text_pos(&self, start: usize) -> TextPos {
        self.source.text_pos_from(start)
    }

    fn err(&self, kind: ErrorKind, start: usize) -> Error {
        Error::new(kind, self.text_pos(start))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cur(), Some(c) if c.is_xml_whitespace()) {
            self.bump();
        }
    }

    /// Skip whitespace, returning whether any was actually consumed.
    fn eat_whitespace(&mut self) -> bool {
        let before = self.pos();
        self.skip_whitespace();
        self.pos() != before
    }

    fn require_whitespace(&mut self, start: usize, kind: ErrorKind) -> Result<()> {
        match self.cur() {
            Some(c) if c.is_xml_whitespace() => {
                self.skip_whitespace();
                Ok(())
            }
            _ => Err(self.err(kind, start)),
        }
    }

    fn expect_char(&mut self, ch: char, start: usize, kind: ErrorKind) -> Result<()> {
        if self.cur() == Some(ch) {
            self.bump();
            Ok(())
        } else {
            Err(self.err(kind, start))
        }
    }

    fn expect_literal(&mut self, lit: &str, start: usize, kind: ErrorKind) -> Result<()> {
        if self.source.continues_with(lit, true) {
            self.source.advance(lit.chars().count());
            Ok(())
        } else {
            Err(self.err(kind, start))
        }
    }

    fn scan_name(&mut self, kind: ErrorKind) -> Result<&'a str> {
        let start = self.pos();
        match self.cur() {
            Some(c) if c.is_xml_name_start_char() => self.bump(),
            _ => return Err(self.err(kind, start)),
        }
        while matches!(self.cur(), Some(c) if c.is_xml_name_char()) {
            self.bump();
        }
        Ok(self.source.str_slice_from(start))
    }

    // -- the Data/tag/attribute driver loop -----------------------------------

    fn run(&mut self) -> Result<Token<'a>> {
        let mut state = State::Data;
        let mut tag: Option<OpenTagBuilder<'a>> = None;
        let mut name_start = 0usize;
        let mut value_start = 0usize;
        let mut used_buffer = false;

        loop {
            match state {
                State::Data => {
                    let start = self.pos();
                    match self.cur() {
                        None => return Ok(Token::EndOfFile),
                        Some('&') => {
                            self.bump();
                            match self.resolve_reference(start)? {
                                Resolved::Char(c) => return Ok(Token::Character(c)),
                                // Entity tokens are consumed immediately by
                                // whichever state invoked the reference, not
                                // queued as tokens (spec §9). A named entity's
                                // replacement text can still hold more than
                                // one scalar (only the five predefined ones
                                // are guaranteed single-character); the first
                                // scalar is returned now and any remaining
                                // ones are queued in `pending` so the next
                                // `advance()` call picks them up in order.
                                Resolved::Text(s) => {
                                    let mut chars = s.chars();
                                    match chars.next() {
                                        Some(first) => {
                                            self.pending.extend(chars);
                                            return Ok(Token::Character(first));
                                        }
                                        None => continue,
                                    }
                                }
                            }
                        }
                        Some('<') => {
                            self.bump();
                            state = State::TagOpen;
                        }
                        Some(']') => state = State::DataBracket,
                        Some(c) => {
                            self.bump();
                            return Ok(Token::Character(c));
                        }
                    }
                }

                State::DataBracket => {
                    let start = self.pos();
                    if self.source.continues_with("]]>", true) {
                        return Err(self.err(ErrorKind::InvalidCharData, start));
                    }
                    self.bump();
                    return Ok(Token::Character(']'));
                }

                State::TagOpen => {
                    let lt_pos = self.pos().saturating_sub(1);
                    match self.cur() {
                        Some('!') => {
                            self.bump();
                            return self.scan_markup_declaration(lt_pos);
                        }
                        Some('?') => {
                            self.bump();
                            return self.scan_question_mark(lt_pos);
                        }
                        Some('/') => {
                            self.bump();
                            state = State::TagEndOpen;
                        }
                        Some(c) if c.is_xml_name_start_char() => {
                            name_start = self.pos();
                            self.bump();
                            state = State::TagName;
                        }
                        _ => return Err(self.err(ErrorKind::InvalidStartTag, lt_pos)),
                    }
                }

                State::TagName => {
                    while matches!(self.cur(), Some(c) if c.is_xml_name_char()) {
                        self.bump();
                    }
                    let name = self.source.str_slice_from(name_start);
                    tag = Some(OpenTagBuilder::new(name));
                    match self.cur() {
                        Some('>') => {
                            self.bump();
                            return Ok(finish_open_tag(tag.take().unwrap()));
                        }
                        Some(c) if c.is_xml_whitespace() => {
                            self.skip_whitespace();
                            state = State::AttributeBeforeName;
                        }
                        Some('/') => {
                            self.bump();
                            state = State::TagSelfClosing;
                        }
                        None => return Err(self.err(ErrorKind::Eof, name_start)),
                        _ => return Err(self.err(ErrorKind::InvalidName, name_start)),
                    }
                }

                State::AttributeBeforeName => {
                    self.skip_whitespace();
                    match self.cur() {
                        Some('/') => {
                            self.bump();
                            state = State::TagSelfClosing;
                        }
                        Some('>') => {
                            self.bump();
                            return Ok(finish_open_tag(tag.take().unwrap()));
                        }
                        Some(c) if c.is_xml_name_start_char() => {
                            name_start = self.pos();
                            self.bump();
                            state = State::AttributeName;
                        }
                        None => return Err(self.err(ErrorKind::Eof, name_start)),
                        _ => return Err(self.err(ErrorKind::InvalidAttribute, name_start)),
                    }
                }

                State::AttributeName => {
                    while matches!(self.cur(), Some(c) if c.is_xml_name_char()) {
                        self.bump();
                    }
                    let attr_name = self.source.str_slice_from(name_start);
                    if !tag.as_mut().unwrap().begin_attribute(attr_name) {
                        return Err(self.err(ErrorKind::UniqueAttribute, name_start));
                    }
                    self.skip_whitespace();
                    match self.cur() {
                        Some('=') => {
                            self.bump();
                            state = State::AttributeBeforeValue;
                        }
                        None => return Err(self.err(ErrorKind::Eof, name_start)),
                        _ => return Err(self.err(ErrorKind::InvalidAttribute, name_start)),
                    }
                }

                State::AttributeBeforeValue => {
                    self.skip_whitespace();
                    match self.cur() {
                        Some(q @ ('"' | '\'')) => {
                            self.bump();
                            value_start = self.pos();
                            used_buffer = false;
                            state = State::AttributeValue(q);
                        }
                        None => return Err(self.err(ErrorKind::Eof, name_start)),
                        _ => return Err(self.err(ErrorKind::InvalidAttribute, name_start)),
                    }
                }

                State::AttributeValue(quote) => match self.cur() {
                    None => return Err(self.err(ErrorKind::Eof, value_start)),
                    Some(c) if c == quote => {
                        let raw = self.source.str_slice(value_start, self.pos());
                        self.bump();
                        let value = if used_buffer {
                            self.buffer.push_str(raw);
                            Cow::Owned(std::mem::take(&mut self.buffer))
                        } else {
                            Cow::Borrowed(raw)
                        };
                        tag.as_mut().unwrap().set_current_attribute_value(value);
                        state = State::AttributeAfterValue;
                    }
                    Some('<') => return Err(self.err(ErrorKind::LtInAttributeValue, self.pos())),
                    Some('&') => {
                        if !used_buffer {
                            self.buffer.clear();
                            used_buffer = true;
                        }
                        let raw = self.source.str_slice(value_start, self.pos());
                        self.buffer.push_str(raw);
                        let amp_pos = self.pos();
                        self.bump();
                        match self.resolve_reference(amp_pos)? {
                            Resolved::Char(c) => self.buffer.push(c),
                            Resolved::Text(s) => self.buffer.push_str(s),
                        }
                        value_start = self.pos();
                    }
                    Some(_) => self.bump(),
                },

                State::AttributeAfterValue => match self.cur() {
                    Some(c) if c.is_xml_whitespace() => {
                        self.skip_whitespace();
                        state = State::AttributeBeforeName;
                    }
                    Some('/') => {
                        self.bump();
                        state = State::TagSelfClosing;
                    }
                    Some('>') => {
                        self.bump();
                        return Ok(finish_open_tag(tag.take().unwrap()));
                    }
                    None => return Err(self.err(ErrorKind::Eof, self.pos())),
                    _ => return Err(self.err(ErrorKind::InvalidAttribute, self.pos())),
                },

                State::TagSelfClosing => match self.cur() {
                    Some('>') => {
                        self.bump();
                        let mut builder = tag.take().unwrap();
                        builder.set_self_closing();
                        return Ok(finish_open_tag(builder));
                    }
                    None => return Err(self.err(ErrorKind::Eof, self.pos())),
                    _ => return Err(self.err(ErrorKind::InvalidName, self.pos())),
                },

                State::TagEndOpen => {
                    let here = self.pos();
                    match self.cur() {
                        Some(c) if c.is_xml_name_start_char() => {
                            name_start = self.pos();
                            self.bump();
                            state = State::TagEndName;
                        }
                        None => return Err(self.err(ErrorKind::Eof, here)),
                        _ => return Err(self.err(ErrorKind::InvalidEndTag, here)),
                    }
                }

                State::TagEndName => {
                    while matches!(self.cur(), Some(c) if c.is_xml_name_char()) {
                        self.bump();
                    }
                    state = State::TagEndAfterName;
                }

                State::TagEndAfterName => {
                    self.skip_whitespace();
                    match self.cur() {
                        Some('>') => {
                            self.bump();
                            let name = self.source.str_slice_from(name_start);
                            return Ok(Token::CloseTag(name));
                        }
                        None => return Err(self.err(ErrorKind::Eof, name_start)),
                        _ => return Err(self.err(ErrorKind::InvalidEndTag, name_start)),
                    }
                }
            }
        }
    }

    // -- character and entity references (spec §4.2.2, §4.4) -----------------

    fn resolve_reference(&mut self, amp_pos: usize) -> Result<Resolved<'a>> {
        match self.cur() {
            Some('#') => {
                self.bump();
                let hex = matches!(self.cur(), Some('x' | 'X'));
                if hex {
                    self.bump();
                }
                let digits_start = self.pos();
                loop {
                    match self.cur() {
                        Some(c) if (hex && c.is_xml_hex_digit()) || (!hex && c.is_xml_digit()) => {
                            self.bump();
                        }
                        _ => break,
                    }
                }
                let digits = self.source.str_slice_from(digits_start);
                if digits.is_empty() || self.cur() != Some(';') {
                    return Err(self.err(ErrorKind::CharacterReferenceNotTerminated, amp_pos));
                }
                self.bump();
                let c = resolve_numeric(digits, hex).map_err(|k| self.err(k, amp_pos))?;
                Ok(Resolved::Char(c))
            }
            Some(c) if c.is_xml_name_start_char() => {
                let name_start = self.pos();
                self.bump();
                while matches!(self.cur(), Some(c) if c.is_xml_name_char()) {
                    self.bump();
                }
                let name = self.source.str_slice_from(name_start);
                if self.cur() != Some(';') {
                    return Err(self.err(ErrorKind::CharacterReferenceNotTerminated, amp_pos));
                }
                self.bump();
                let table = self.entities;
                let replacement = resolve_named(name, table).map_err(|k| self.err(k, amp_pos))?;
                Ok(Resolved::Text(replacement))
            }
            _ => Err(self.err(ErrorKind::CharacterReferenceNotTerminated, amp_pos)),
        }
    }

    // -- comment, CDATA (spec §4.2.5, §4.2.6) ---------------------------------

    fn scan_markup_declaration(&mut self, start: usize) -> Result<Token<'a>> {
        if self.source.continues_with("--", true) {
            self.source.advance(2);
            return self.scan_comment(start);
        }
        if self.source.continues_with("DOCTYPE", false) {
            self.source.advance(7);
            return self.scan_doctype(start);
        }
        if self.source.continues_with("[CDATA[", true) {
            self.source.advance(7);
            return self.scan_cdata(start);
        }
        Err(self.err(ErrorKind::UndefinedMarkupDeclaration, start))
    }

    /// This implementation is deliberately more permissive than strict XML
    /// 1.0: a bare `--` not immediately followed by `>` is treated as
    /// ordinary comment text rather than a well-formedness error, since the
    /// two-pass "scan then check for --" construction that strict conformance
    /// requires would force this function to buffer instead of slicing the
    /// input directly.
    fn scan_comment(&mut self, start: usize) -> Result<Token<'a>> {
        let text_start = self.pos();
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::InvalidComment, start)),
                Some('-') if self.source.continues_with("-->", true) => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.source.advance(3);
                    return Ok(Token::Comment(text));
                }
                Some(c) if c.is_xml_char() => self.bump(),
                _ => return Err(self.err(ErrorKind::InvalidComment, start)),
            }
        }
    }

    fn scan_cdata(&mut self, start: usize) -> Result<Token<'a>> {
        let text_start = self.pos();
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some(']') if self.source.continues_with("]]>", true) => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.source.advance(3);
                    return Ok(Token::CData(text));
                }
                Some(_) => self.bump(),
            }
        }
    }

    // -- XML declaration / processing instructions (spec §4.2.10, §4.2.9) ----

    /// Dispatches on the `?` of `<?`. Always scans the full target name
    /// first (so e.g. `xml-stylesheet` is never mistaken for the reserved
    /// three-letter target `xml` just because it starts with that prefix);
    /// only a target that is *exactly* `xml`, case-insensitively, is treated
    /// specially (spec §4.2.10, §9 declaration fallthrough).
    fn scan_question_mark(&mut self, start: usize) -> Result<Token<'a>> {
        let target = self.scan_name(ErrorKind::InvalidPi)?;
        if target.eq_ignore_ascii_case("xml") {
            let is_declaration_start = start == 0
                && target == "xml"
                && matches!(self.cur(), Some(c) if c.is_xml_whitespace());
            if is_declaration_start {
                return self.scan_declaration(start);
            }
            return Err(self.err(ErrorKind::InvalidPi, start));
        }
        self.scan_processing_instruction_body(start, target)
    }

    fn scan_declaration(&mut self, start: usize) -> Result<Token<'a>> {
        self.skip_whitespace();
        self.expect_literal("version", start, ErrorKind::XmlDeclarationInvalid)?;
        self.skip_whitespace();
        self.expect_char('=', start, ErrorKind::XmlDeclarationInvalid)?;
        self.skip_whitespace();
        let version = self.scan_quoted_generic(start)?;

        let mut encoding = None;
        let mut standalone = None;
        let mut saw_ws = self.eat_whitespace();

        if saw_ws && self.source.continues_with("encoding", true) {
            self.source.advance(8);
            self.skip_whitespace();
            self.expect_char('=', start, ErrorKind::XmlDeclarationInvalid)?;
            self.skip_whitespace();
            encoding = Some(self.scan_encoding_value(start)?);
            saw_ws = self.eat_whitespace();
        }

        if saw_ws && self.source.continues_with("standalone", true) {
            self.source.advance(10);
            self.skip_whitespace();
            self.expect_char('=', start, ErrorKind::XmlDeclarationInvalid)?;
            self.skip_whitespace();
            standalone = Some(self.scan_standalone_value(start)?);
            self.eat_whitespace();
        }

        self.skip_whitespace();
        self.expect_literal("?>", start, ErrorKind::XmlDeclarationInvalid)?;

        Ok(Token::Declaration { version, encoding, standalone })
    }

    fn scan_quoted_generic(&mut self, start: usize) -> Result<&'a str> {
        let quote = match self.cur() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
        };
        self.bump();
        let text_start = self.pos();
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some(c) if c == quote => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.bump();
                    return Ok(text);
                }
                Some(_) => self.bump(),
            }
        }
    }

    fn scan_encoding_value(&mut self, start: usize) -> Result<&'a str> {
        let quote = match self.cur() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
        };
        self.bump();
        let text_start = self.pos();
        match self.cur() {
            Some(c) if c.is_xml_letter() => self.bump(),
            _ => return Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
        }
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some(c) if c == quote => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.bump();
                    return Ok(text);
                }
                Some(c) if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => self.bump(),
                _ => return Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
            }
        }
    }

    fn scan_standalone_value(&mut self, start: usize) -> Result<bool> {
        let quote = match self.cur() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
        };
        self.bump();
        let value = if self.source.continues_with("yes", true) {
            self.source.advance(3);
            true
        } else if self.source.continues_with("no", true) {
            self.source.advance(2);
            false
        } else {
            return Err(self.err(ErrorKind::XmlDeclarationInvalid, start));
        };
        match self.cur() {
            Some(c) if c == quote => {
                self.bump();
                Ok(value)
            }
            _ => Err(self.err(ErrorKind::XmlDeclarationInvalid, start)),
        }
    }

    fn scan_processing_instruction_body(
        &mut self,
        start: usize,
        target: &'a str,
    ) -> Result<Token<'a>> {
        if target.eq_ignore_ascii_case("xml") {
            return Err(self.err(ErrorKind::InvalidPi, start));
        }
        match self.cur() {
            Some('?') => {
                self.bump();
                self.expect_char('>', start, ErrorKind::InvalidPi)?;
                Ok(Token::ProcessingInstruction { target, content: None })
            }
            Some(c) if c.is_xml_whitespace() => {
                self.skip_whitespace();
                let text_start = self.pos();
                loop {
                    match self.cur() {
                        None => return Err(self.err(ErrorKind::Eof, start)),
                        Some('?') if self.source.continues_with("?>", true) => {
                            let content = self.source.str_slice(text_start, self.pos());
                            self.source.advance(2);
                            let content = if content.is_empty() { None } else { Some(content) };
                            return Ok(Token::ProcessingInstruction { target, content });
                        }
                        Some(c) if c.is_xml_char() => self.bump(),
                        _ => return Err(self.err(ErrorKind::InvalidPi, start)),
                    }
                }
            }
            _ => Err(self.err(ErrorKind::InvalidPi, start)),
        }
    }

    // -- DOCTYPE (spec §4.2.12) -----------------------------------------------

    fn scan_doctype(&mut self, start: usize) -> Result<Token<'a>> {
        self.require_whitespace(start, ErrorKind::DoctypeInvalid)?;
        let name = self.scan_name(ErrorKind::DoctypeInvalid)?;

        let mut public_id = None;
        let mut system_id = None;

        match self.cur() {
            Some('>') => {}
            Some(c) if c.is_xml_whitespace() => {
                self.skip_whitespace();
                if self.source.continues_with("PUBLIC", false) {
                    self.source.advance(6);
                    self.require_whitespace(start, ErrorKind::DoctypeInvalid)?;
                    public_id = Some(self.scan_quoted_pubid(start)?);
                    self.require_whitespace(start, ErrorKind::DoctypeInvalid)?;
                    system_id = Some(self.scan_quoted_system(start)?);
                } else if self.source.continues_with("SYSTEM", false) {
                    self.source.advance(6);
                    self.require_whitespace(start, ErrorKind::DoctypeInvalid)?;
                    system_id = Some(self.scan_quoted_system(start)?);
                } else if !matches!(self.cur(), Some('[') | Some('>')) {
                    return Err(self.err(ErrorKind::DoctypeInvalid, start));
                }
            }
            None => return Err(self.err(ErrorKind::Eof, start)),
            _ => return Err(self.err(ErrorKind::DoctypeInvalid, start)),
        }

        self.skip_whitespace();
        if self.cur() == Some('[') {
            self.bump();
            self.skip_doctype_internal_subset(start)?;
            self.skip_whitespace();
        }

        match self.cur() {
            Some('>') => {
                self.bump();
                Ok(Token::Doctype { name, public_id, system_id })
            }
            None => Err(self.err(ErrorKind::Eof, start)),
            _ => Err(self.err(ErrorKind::DoctypeInvalid, start)),
        }
    }

    fn scan_quoted_pubid(&mut self, start: usize) -> Result<&'a str> {
        let quote = match self.cur() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.err(ErrorKind::DoctypeInvalid, start)),
        };
        self.bump();
        let text_start = self.pos();
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some(c) if c == quote => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.bump();
                    return Ok(text);
                }
                Some(c) if c.is_xml_pubid_char() => self.bump(),
                _ => return Err(self.err(ErrorKind::InvalidPubId, start)),
            }
        }
    }

    fn scan_quoted_system(&mut self, start: usize) -> Result<&'a str> {
        let quote = match self.cur() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.err(ErrorKind::DoctypeInvalid, start)),
        };
        self.bump();
        let text_start = self.pos();
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some(c) if c == quote => {
                    let text = self.source.str_slice(text_start, self.pos());
                    self.bump();
                    return Ok(text);
                }
                Some(_) => self.bump(),
            }
        }
    }

    /// Skips a DOCTYPE internal subset without materializing its contents.
    /// Tracks `[`/`]` nesting so conditional sections don't terminate the
    /// skip early; does not account for `]` appearing inside a quoted entity
    /// value, which the XML grammar technically permits.
    ///
    /// TODO: feed `<!ENTITY ...>` declarations encountered here into an
    /// `EntityTable` so character references can resolve document-local
    /// entities, not just the predefined five.
    fn skip_doctype_internal_subset(&mut self, start: usize) -> Result<()> {
        let mut depth = 1usize;
        loop {
            match self.cur() {
                None => return Err(self.err(ErrorKind::Eof, start)),
                Some('[') => {
                    depth += 1;
                    self.bump();
                }
                Some(']') => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(_) => self.bump(),
            }
        }
    }
}

fn finish_open_tag(builder: OpenTagBuilder<'_>) -> Token<'_> {
    let (name, attributes, self_closing) = builder.into_parts();
    Token::OpenTag { name, attributes, self_closing }
}

impl<'a> From<&'a str> for Tokenizer<'a> {
    fn from(input: &'a str) -> Self {
        Tokenizer::new(input)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iter_done {
            return None;
        }
        let result = self.advance();
        if matches!(result, Ok(Token::EndOfFile)) || result.is_err() {
            self.iter_done = true;
        }
        Some(result)
    }
}
