//! Incremental token builders (spec §3.3): records that exist only between
//! entering a composite state and returning the completed token.

use std::borrow::Cow;

/// Accumulates the name, attributes, and self-closing flag of an in-progress
/// start tag. Enforces the attribute-uniqueness invariant (spec §3.2) at
/// insertion time rather than as a post-hoc scan.
pub(crate) struct OpenTagBuilder<'a> {
    name: &'a str,
    attributes: Vec<(&'a str, Cow<'a, str>)>,
    self_closing: bool,
}

impl<'a> OpenTagBuilder<'a> {
    pub(crate) fn new(name: &'a str) -> Self {
        OpenTagBuilder { name, attributes: Vec::new(), self_closing: false }
    }

    /// Register a new attribute name with no value yet. Returns `false` if
    /// `name` is already present, in which case the caller must raise
    /// `ErrorKind::UniqueAttribute`.
    pub(crate) fn begin_attribute(&mut self, name: &'a str) -> bool {
        if self.attributes.iter().any(|(n, _)| *n == name) {
            return false;
        }
        self.attributes.push((name, Cow::Borrowed("")));
        true
    }

    /// Set the value of the most recently registered attribute.
    pub(crate) fn set_current_attribute_value(&mut self, value: Cow<'a, str>) {
        if let Some(last) = self.attributes.last_mut() {
            last.1 = value;
        }
    }

    pub(crate) fn set_self_closing(&mut self) {
        self.self_closing = true;
    }

    pub(crate) fn into_parts(self) -> (&'a str, Vec<(&'a str, Cow<'a, str>)>, bool) {
        (self.name, self.attributes, self.self_closing)
    }
}
