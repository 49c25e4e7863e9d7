//! JSON output layout options.

/// Separator strings placed between items and between a key and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub item: &'static str,
    pub key: &'static str,
}

impl Default for Separators {
    /// `", "` and `": "`, the layout Python's `json.dump` writes.
    fn default() -> Self {
        Self {
            item: ", ",
            key: ": ",
        }
    }
}

impl Separators {
    /// `","` and `":"` with no whitespace.
    pub const fn compact() -> Self {
        Self {
            item: ",",
            key: ":",
        }
    }
}
