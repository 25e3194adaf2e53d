use std::collections::HashMap;

/// Values for the symbols of an expression, keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Binding {
    values: HashMap<String, f64>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Binding::insert`]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Binding {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Binding {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Extend<(String, f64)> for Binding {
    fn extend<I: IntoIterator<Item = (String, f64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
