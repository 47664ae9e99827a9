/*!

*xmlparser* is a low-level, pull-based XML 1.0 tokenizer.

## Example

```rust
for token in xmlparser::Tokenizer::from("<tagname name='value'>text</tagname>") {
    println!("{:?}", token);
}
```

## Why a new library

This library turns a well-formed XML document into a flat stream of tokens:
one [`Token`] per open tag, close tag, comment, CDATA section, processing
instruction, piece of character data, and so on, terminated by a single
[`Token::EndOfFile`]. It resolves character and predefined-entity references
as it goes, so callers get real `char`s and attribute-value text rather than
raw escaped markup.

It is not a DOM: there is no tree, no parent/child relationship, and no
validation that open and close tags nest correctly. If you want that,
build it on top of this crate, or use a higher-level parser.

## Benefits

- Attribute names, tag names, comment text, and similar spans borrow
  directly from the input string; only attribute values and character data
  that contain an entity reference allocate.
- All errors carry the line:column position where they occurred.
- The named-entity table is pluggable via the [`EntityTable`] trait, so a
  caller that needs more than the five predefined entities can supply its
  own.

## Limitations

- DOCTYPE internal subsets are recognized and skipped but not parsed: their
  `<!ENTITY ...>` / `<!ELEMENT ...>` / `<!ATTLIST ...>` declarations are not
  surfaced as tokens.
- No tree structure validation. `<root><child></root></child>` tokenizes
  without error; checking that tags nest correctly is the caller's job.
- Duplicated attributes are rejected ([`ErrorKind::UniqueAttribute`]), but
  beyond that this crate does not validate document structure.
- Input must already be a `&str` (so UTF-8 and already decoded); this crate
  does no encoding detection or transcoding.

## Safety

- The library must not panic. Any panic is considered a critical bug and
  should be reported.
- The library forbids unsafe code.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod entities;
mod error;
mod source;
mod state;
mod token;
mod tokenizer;
mod xmlchar;

pub use entities::{EntityTable, PredefinedEntities, PREDEFINED};
pub use error::{Error, ErrorKind, Result, TextPos};
pub use source::{CharCursor, CharSource};
pub use token::Token;
pub use tokenizer::Tokenizer;
pub use xmlchar::XmlCharExt;
