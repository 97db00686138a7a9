//! Source attribute name to destination channel name mapping.

use std::collections::BTreeMap;

/// Exact-match rename rules. Unmapped names pass through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameTable {
    rules: BTreeMap<String, String>,
}

impl RenameTable {
    /// Identity table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (source, destination) pairs.
    pub fn from_pairs<I, S, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            rules: pairs.into_iter().map(|(s, d)| (s.into(), d.into())).collect(),
        }
    }

    /// Destination channel name for `source`.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.rules.get(source).map(String::as_str).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules sorted by source name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let table = RenameTable::from_pairs([("PointPosition", "position")]);
        assert_eq!(table.resolve("PointPosition"), "position");
        assert_eq!(table.resolve("Foo"), "Foo");
        // exact match only
        assert_eq!(table.resolve("pointposition"), "pointposition");
    }

    #[test]
    fn test_identity() {
        let table = RenameTable::new();
        assert!(table.is_empty());
        assert_eq!(table.resolve("Color"), "Color");
    }
}
