//! Character classifiers from the W3C XML 1.0 grammar (spec §4.1).

/// Extension trait implementing the character classes used throughout the
/// tokenizer: `NameStartChar`, `NameChar`, `PubidChar`, `Char`, whitespace,
/// and digit/hex-digit sets.
pub trait XmlCharExt {
    /// `NameStartChar` production.
    fn is_xml_name_start_char(&self) -> bool;
    /// `NameChar` production (`NameStartChar` plus a few extra ranges).
    fn is_xml_name_char(&self) -> bool;
    /// `PubidChar` production, used inside DOCTYPE public identifiers.
    fn is_xml_pubid_char(&self) -> bool;
    /// `Char` production: any legal XML character.
    fn is_xml_char(&self) -> bool;
    /// XML whitespace: space, tab, newline, carriage return.
    fn is_xml_whitespace(&self) -> bool;
    /// ASCII decimal digit.
    fn is_xml_digit(&self) -> bool;
    /// ASCII hexadecimal digit.
    fn is_xml_hex_digit(&self) -> bool;
    /// ASCII letter, used by the XML declaration's `encoding` value.
    fn is_xml_letter(&self) -> bool;
}

impl XmlCharExt for char {
    fn is_xml_name_start_char(&self) -> bool {
        let c = *self;
        matches!(c,
            ':' | '_' | 'A'..='Z' | 'a'..='z'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
        )
    }

    fn is_xml_name_char(&self) -> bool {
        let c = *self;
        c.is_xml_name_start_char()
            || matches!(c,
                '-' | '.' | '0'..='9'
                | '\u{B7}'
                | '\u{300}'..='\u{36F}'
                | '\u{203F}'..='\u{2040}'
            )
    }

    fn is_xml_pubid_char(&self) -> bool {
        let c = *self;
        matches!(c,
            ' ' | '\r' | '\n'
            | 'A'..='Z' | 'a'..='z' | '0'..='9'
        ) || "-'()+,./:=?;!*#@$_%".contains(c)
    }

    fn is_xml_char(&self) -> bool {
        let c = *self;
        match c as u32 {
            0x9 | 0xA | 0xD => true,
            0x0..=0x1F => false,
            0xD800..=0xDFFF => false,
            0xFFFE | 0xFFFF => false,
            _ => true,
        }
    }

    fn is_xml_whitespace(&self) -> bool {
        matches!(*self, ' ' | '\t' | '\n' | '\r')
    }

    fn is_xml_digit(&self) -> bool {
        self.is_ascii_digit()
    }

    fn is_xml_hex_digit(&self) -> bool {
        self.is_ascii_hexdigit()
    }

    fn is_xml_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_start_chars() {
        assert!(':'.is_xml_name_start_char());
        assert!('_'.is_xml_name_start_char());
        assert!('a'.is_xml_name_start_char());
        assert!('Z'.is_xml_name_start_char());
        assert!(!'-'.is_xml_name_start_char());
        assert!(!'0'.is_xml_name_start_char());
        assert!(!' '.is_xml_name_start_char());
    }

    #[test]
    fn name_chars_extend_name_start() {
        assert!('-'.is_xml_name_char());
        assert!('.'.is_xml_name_char());
        assert!('9'.is_xml_name_char());
        assert!('a'.is_xml_name_char());
        assert!(!' '.is_xml_name_char());
        assert!(!'&'.is_xml_name_char());
    }

    #[test]
    fn pubid_chars() {
        assert!('A'.is_xml_pubid_char());
        assert!('-'.is_xml_pubid_char());
        assert!(' '.is_xml_pubid_char());
        assert!(!'<'.is_xml_pubid_char());
        assert!(!'&'.is_xml_pubid_char());
    }

    #[test]
    fn char_excludes_c0_controls_and_surrogates() {
        assert!('\t'.is_xml_char());
        assert!('\n'.is_xml_char());
        assert!('\r'.is_xml_char());
        assert!('a'.is_xml_char());
        assert!(!'\u{0}'.is_xml_char());
        assert!(!'\u{1}'.is_xml_char());
        assert!(!'\u{B}'.is_xml_char());
    }

    #[test]
    fn char_excludes_noncharacters() {
        assert!(!'\u{FFFE}'.is_xml_char());
        assert!(!'\u{FFFF}'.is_xml_char());
        assert!('\u{FFFD}'.is_xml_char());
    }

    #[test]
    fn whitespace_set() {
        assert!(' '.is_xml_whitespace());
        assert!('\t'.is_xml_whitespace());
        assert!('\n'.is_xml_whitespace());
        assert!('\r'.is_xml_whitespace());
        assert!(!'a'.is_xml_whitespace());
    }
}
