//! Optional XML attributes of an element.

use std::borrow::Cow;

use quick_xml::events::BytesStart;

/// Ordered set of optional attributes.
///
/// Attributes without a value, or with an empty value, are not written at all. Present attributes are pushed
/// onto the element in insertion order; `quick-xml` escapes their values.
#[derive(Debug, Clone, Default)]
pub struct Attributes<'a> {
    entries: Vec<(&'static str, Option<Cow<'a, str>>)>,
}

impl<'a> Attributes<'a> {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.
    pub fn with(mut self, name: &'static str, value: Option<&'a str>) -> Self {
        self.entries.push((name, value.map(Cow::Borrowed)));
        self
    }

    /// Appends a numeric attribute. Zero counts as absent.
    pub fn with_number(mut self, name: &'static str, value: Option<u32>) -> Self {
        self.entries.push((
            name,
            value.filter(|v| *v != 0).map(|v| Cow::Owned(v.to_string())),
        ));
        self
    }

    /// Pushes the present attributes onto `element`.
    pub fn push_to(&self, element: &mut BytesStart<'_>) {
        for (name, value) in self.present() {
            element.push_attribute((name, value));
        }
    }

    /// Returns true if no attribute would be written.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (*name, v))
        })
    }
}
