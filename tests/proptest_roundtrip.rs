//! Property tests for the invariants in spec §8: determinism and
//! attribute-name uniqueness hold for any input, not just the examples in
//! the unit/integration suites.

use proptest::prelude::*;
use xmlparser::{Token, Tokenizer};

fn run_all(input: &str) -> Vec<Result<Token<'_>, xmlparser::Error>> {
    Tokenizer::new(input).collect()
}

proptest! {
    /// Invariant 5: identical input always produces an identical token
    /// sequence (including identical errors at identical positions).
    #[test]
    fn tokenizing_is_deterministic(input in ".{0,200}") {
        let first = run_all(&input);
        let second = run_all(&input);
        prop_assert_eq!(first, second);
    }

    /// Invariant 1: a second attribute with a name already seen on the same
    /// tag is always rejected, regardless of how many other attributes
    /// surround it or what their values are.
    #[test]
    fn duplicate_attribute_name_is_always_rejected(
        name in "[a-zA-Z][a-zA-Z0-9]{0,5}",
        before in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,5}", 0..4),
        after in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,5}", 0..4),
    ) {
        let mut xml = String::from("<t");
        for n in &before {
            if n != &name {
                xml.push_str(&format!(" {n}='x'"));
            }
        }
        xml.push_str(&format!(" {name}='1'"));
        for n in &after {
            if n != &name {
                xml.push_str(&format!(" {n}='y'"));
            }
        }
        xml.push_str(&format!(" {name}='2'/>"));

        let mut t = Tokenizer::new(&xml);
        let err = loop {
            match t.next() {
                Some(Ok(Token::EndOfFile)) | None => panic!("expected a UniqueAttribute error"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => break e,
            }
        };
        prop_assert_eq!(err.kind, xmlparser::ErrorKind::UniqueAttribute);
    }
}
