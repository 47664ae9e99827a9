//! Black-box tests driving `Tokenizer` from the public API only.

use xmlparser::{EntityTable, ErrorKind, Token, Tokenizer};

fn tokens(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).map(|r| r.expect("input is well-formed")).collect()
}

/// A custom entity table whose replacement text is not restricted to a
/// single `char`, unlike all five predefined entities.
struct CustomEntities;

impl EntityTable for CustomEntities {
    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "wave" => Some("abc"),
            _ => None,
        }
    }
}

#[test]
fn minimal_document() {
    assert_eq!(
        tokens("<root/>"),
        vec![
            Token::OpenTag { name: "root", attributes: vec![], self_closing: true },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn nested_elements_with_attributes_and_text() {
    let input = "<a id='1'><b>hello</b></a>";
    assert_eq!(
        tokens(input),
        vec![
            Token::OpenTag {
                name: "a",
                attributes: vec![("id", "1".into())],
                self_closing: false,
            },
            Token::OpenTag { name: "b", attributes: vec![], self_closing: false },
            Token::Character('h'),
            Token::Character('e'),
            Token::Character('l'),
            Token::Character('l'),
            Token::Character('o'),
            Token::CloseTag("b"),
            Token::CloseTag("a"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn full_preamble_then_content() {
    let input = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE greeting SYSTEM \"greeting.dtd\">\n",
        "<!-- a friendly greeting -->\n",
        "<greeting>Hello, world!</greeting>\n",
    );
    let mut t = Tokenizer::new(input);

    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::Declaration { version: "1.0", encoding: Some("UTF-8"), standalone: None }
    );
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('\n'));
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::Doctype {
            name: "greeting",
            public_id: None,
            system_id: Some("greeting.dtd"),
        }
    );
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('\n'));
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::Comment(" a friendly greeting ")
    );
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('\n'));
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::OpenTag { name: "greeting", attributes: vec![], self_closing: false }
    );
}

#[test]
fn attributes_with_entities_and_numeric_references() {
    let input = "<a x=\"AT&amp;T\" y=\"&#169;\"/>";
    match &tokens(input)[0] {
        Token::OpenTag { attributes, .. } => {
            assert_eq!(attributes[0].0, "x");
            assert_eq!(attributes[0].1.as_ref(), "AT&T");
            assert_eq!(attributes[1].0, "y");
            assert_eq!(attributes[1].1.as_ref(), "\u{A9}");
        }
        other => panic!("unexpected token: {other:?}"),
    }
}

#[test]
fn multi_char_named_entity_surfaces_every_scalar_at_top_level() {
    let mut t = Tokenizer::with_entities("x&wave;y", &CustomEntities);
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('x'));
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('a'));
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('b'));
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('c'));
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('y'));
    assert_eq!(t.next().unwrap().unwrap(), Token::EndOfFile);
}

#[test]
fn multi_char_named_entity_resolves_fully_in_attribute_value() {
    let mut t = Tokenizer::with_entities("<a x='&wave;'/>", &CustomEntities);
    match t.next().unwrap().unwrap() {
        Token::OpenTag { attributes, .. } => {
            assert_eq!(attributes[0].1.as_ref(), "abc");
        }
        other => panic!("unexpected token: {other:?}"),
    }
}

#[test]
fn cdata_section_bypasses_markup_recognition() {
    assert_eq!(
        tokens("<a><![CDATA[<b>&amp;</b>]]></a>"),
        vec![
            Token::OpenTag { name: "a", attributes: vec![], self_closing: false },
            Token::CData("<b>&amp;</b>"),
            Token::CloseTag("a"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn processing_instruction_with_and_without_content() {
    assert_eq!(
        tokens("<?xml-stylesheet type=\"text/xsl\" href=\"style.xsl\"?><?empty?>"),
        vec![
            Token::ProcessingInstruction {
                target: "xml-stylesheet",
                content: Some("type=\"text/xsl\" href=\"style.xsl\""),
            },
            Token::ProcessingInstruction { target: "empty", content: None },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn duplicate_attribute_name_is_rejected() {
    let mut t = Tokenizer::new("<a b='1' b='2'/>");
    let err = t.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UniqueAttribute);
}

#[test]
fn unterminated_tag_is_an_eof_error() {
    let mut t = Tokenizer::new("<a");
    let err = t.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Eof);
}

#[test]
fn lt_inside_attribute_value_is_rejected() {
    let mut t = Tokenizer::new("<a b='<'/>");
    let err = t.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::LtInAttributeValue);
}

#[test]
fn xml_declaration_only_recognized_as_the_first_token() {
    // A later "<?xml ...?>" is just a rejected processing instruction, not a
    // second declaration.
    let mut t = Tokenizer::new("<a/><?xml version=\"1.0\"?>");
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::OpenTag { name: "a", attributes: vec![], self_closing: true }
    );
    let err = t.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPi);
}

#[test]
fn error_position_points_at_the_offending_construct() {
    let mut t = Tokenizer::new("<a>\n  <b c='1' c='2'/>\n</a>");
    t.next().unwrap().unwrap(); // <a>
    t.next().unwrap().unwrap(); // '\n'
    for _ in 0.."  ".chars().count() {
        t.next().unwrap().unwrap();
    }
    let err = t.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UniqueAttribute);
    assert_eq!(err.pos.line, 2);
}

#[test]
fn iterator_stops_after_end_of_file() {
    let mut t = Tokenizer::new("<a/>");
    let all: Vec<_> = (&mut t).collect();
    assert_eq!(all.len(), 2);
    assert!(t.next().is_none());
    // The underlying method keeps answering, though.
    assert_eq!(t.advance().unwrap(), Token::EndOfFile);
}

#[test]
fn doctype_internal_subset_is_skipped_without_surfacing_declarations() {
    let input = "<!DOCTYPE note [\n<!ENTITY foo \"bar\">\n]>\n<note/>";
    let mut t = Tokenizer::new(input);
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::Doctype { name: "note", public_id: None, system_id: None }
    );
    assert_eq!(t.next().unwrap().unwrap(), Token::Character('\n'));
    assert_eq!(
        t.next().unwrap().unwrap(),
        Token::OpenTag { name: "note", attributes: vec![], self_closing: true }
    );
}
