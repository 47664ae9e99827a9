//! Entity resolution (spec §4.4): numeric character references and named
//! entity lookups.

use crate::error::ErrorKind;
use crate::xmlchar::XmlCharExt;

/// A host-provided table mapping entity names to their replacement text.
///
/// The five predefined XML entities (`amp`, `lt`, `gt`, `apos`, `quot`) must
/// resolve; [`PREDEFINED`] is a ready-made table providing exactly those.
pub trait EntityTable {
    /// Look up `name`, returning its replacement text if known.
    fn get(&self, name: &str) -> Option<&str>;
}

/// The five entities every XML 1.0 processor must recognize.
pub struct PredefinedEntities;

/// A table instance holding just the five predefined entities.
pub static PREDEFINED: PredefinedEntities = PredefinedEntities;

impl EntityTable for PredefinedEntities {
    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "amp" => Some("&"),
            "lt" => Some("<"),
            "gt" => Some(">"),
            "apos" => Some("'"),
            "quot" => Some("\""),
            _ => None,
        }
    }
}

/// Resolve a numeric character reference's digit text to its replacement
/// character, validating it is a legal XML `Char` (spec §4.1, §4.4).
pub(crate) fn resolve_numeric(digits: &str, hex: bool) -> Result<char, ErrorKind> {
    let radix = if hex { 16 } else { 10 };
    let value = u32::from_str_radix(digits, radix)
        .map_err(|_| ErrorKind::CharacterReferenceInvalidNumber)?;
    let c = char::from_u32(value).ok_or(ErrorKind::CharacterReferenceInvalidNumber)?;
    if !c.is_xml_char() {
        return Err(ErrorKind::CharacterReferenceInvalidNumber);
    }
    Ok(c)
}

/// Resolve a named entity reference against `table`.
pub(crate) fn resolve_named<'t>(
    name: &str,
    table: &'t dyn EntityTable,
) -> Result<&'t str, ErrorKind> {
    table.get(name).ok_or(ErrorKind::CharacterReferenceInvalidCode)
}
