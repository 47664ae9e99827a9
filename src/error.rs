use std::error;
use std::fmt;

/// A position in the original document, for error reporting.
///
/// Both fields are 1-based, matching the convention of editors and other
/// XML tooling.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextPos {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub col: u32,
}

impl TextPos {
    pub(crate) fn new(line: u32, col: u32) -> Self {
        TextPos { line, col }
    }
}

impl fmt::Display for TextPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The distinct well-formedness error kinds this tokenizer can raise.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum ErrorKind {
    /// Input ended inside a token.
    Eof,
    InvalidStartTag,
    InvalidEndTag,
    InvalidName,
    InvalidAttribute,
    UniqueAttribute,
    LtInAttributeValue,
    /// A stray `]]>` was found in character data.
    InvalidCharData,
    UndefinedMarkupDeclaration,
    InvalidComment,
    InvalidPi,
    XmlDeclarationInvalid,
    DoctypeInvalid,
    InvalidPubId,
    CharacterReferenceNotTerminated,
    CharacterReferenceInvalidNumber,
    CharacterReferenceInvalidCode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            ErrorKind::Eof => "unexpected end of input",
            ErrorKind::InvalidStartTag => "invalid start tag",
            ErrorKind::InvalidEndTag => "invalid end tag",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::InvalidAttribute => "invalid attribute",
            ErrorKind::UniqueAttribute => "duplicate attribute",
            ErrorKind::LtInAttributeValue => "'<' is not allowed in an attribute value",
            ErrorKind::InvalidCharData => "']]>' is not allowed in character data",
            ErrorKind::UndefinedMarkupDeclaration => "unknown markup declaration",
            ErrorKind::InvalidComment => "invalid comment",
            ErrorKind::InvalidPi => "invalid processing instruction",
            ErrorKind::XmlDeclarationInvalid => "invalid XML declaration",
            ErrorKind::DoctypeInvalid => "invalid DOCTYPE declaration",
            ErrorKind::InvalidPubId => "invalid public identifier",
            ErrorKind::CharacterReferenceNotTerminated => "character reference is not terminated by ';'",
            ErrorKind::CharacterReferenceInvalidNumber => "character reference does not resolve to a valid character",
            ErrorKind::CharacterReferenceInvalidCode => "unknown entity reference",
        };
        write!(f, "{}", s)
    }
}

/// A well-formedness error, tagged with the position it occurred at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Error {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Where in the document it occurred.
    pub pos: TextPos,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, pos: TextPos) -> Self {
        Error { kind, pos }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.pos)
    }
}

impl error::Error for Error {}

/// A specialized `Result` for tokenizer operations.
pub type Result<T> = ::std::result::Result<T, Error>;
