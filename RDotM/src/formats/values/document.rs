//! Resource value structures

use std::fmt;

/// The kind of value a resource declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `<string>`
    String,
    /// `<color>`
    Color,
    /// `<integer>`
    Integer,
    /// An image under `res/drawable*/`.
    Drawable,
}

impl ResourceKind {
    /// Element name in a values file (or directory prefix for drawables).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Color => "color",
            Self::Integer => "integer",
            Self::Drawable => "drawable",
        }
    }

    /// Map a values-file element name to its kind.
    #[must_use]
    pub fn from_element(name: &[u8]) -> Option<Self> {
        match name {
            b"string" => Some(Self::String),
            b"color" => Some(Self::Color),
            b"integer" => Some(Self::Integer),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named resource value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Value of the `name` attribute.
    pub name: String,
    /// Element kind.
    pub kind: ResourceKind,
    /// Text content as written, after XML entity decoding only.
    ///
    /// For drawables this is the image file name.
    pub raw_value: String,
}

impl ResourceEntry {
    /// Creates a new entry.
    pub fn new(kind: ResourceKind, name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            raw_value: raw_value.into(),
        }
    }
}

/// Resources grouped by kind, each group in declaration order.
///
/// Same-named entries are kept side by side; nothing is de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub strings: Vec<ResourceEntry>,
    pub colors: Vec<ResourceEntry>,
    pub integers: Vec<ResourceEntry>,
    pub drawables: Vec<ResourceEntry>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the group matching its kind.
    pub fn push(&mut self, entry: ResourceEntry) {
        self.group_mut(entry.kind).push(entry);
    }

    /// Append every entry of `other`, group by group, after the existing ones.
    pub fn append(&mut self, other: Resources) {
        self.strings.extend(other.strings);
        self.colors.extend(other.colors);
        self.integers.extend(other.integers);
        self.drawables.extend(other.drawables);
    }

    /// Entries of one kind.
    #[must_use]
    pub fn entries(&self, kind: ResourceKind) -> &[ResourceEntry] {
        match kind {
            ResourceKind::String => &self.strings,
            ResourceKind::Color => &self.colors,
            ResourceKind::Integer => &self.integers,
            ResourceKind::Drawable => &self.drawables,
        }
    }

    fn group_mut(&mut self, kind: ResourceKind) -> &mut Vec<ResourceEntry> {
        match kind {
            ResourceKind::String => &mut self.strings,
            ResourceKind::Color => &mut self.colors,
            ResourceKind::Integer => &mut self.integers,
            ResourceKind::Drawable => &mut self.drawables,
        }
    }

    /// Total number of entries across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len() + self.colors.len() + self.integers.len() + self.drawables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries: strings, then colors, integers and drawables.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.strings
            .iter()
            .chain(&self.colors)
            .chain(&self.integers)
            .chain(&self.drawables)
    }
}
