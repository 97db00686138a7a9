//! User attribute allow-list.

use std::collections::BTreeSet;

/// Source attribute names to export. Empty means everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Select every attribute.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma separated list. Names are trimmed, empty entries dropped.
    pub fn parse(csv: Option<&str>) -> Self {
        let names = csv
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn is_all(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `name` should be exported.
    pub fn contains(&self, name: &str) -> bool {
        self.is_all() || self.names.contains(name)
    }
}
