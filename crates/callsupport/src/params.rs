//! Ordered, multi-valued URL query parameters.
//!
//! [`ParameterSet`] collects query parameters for a single outgoing request
//! and serializes them to a deterministic query string. Keys are emitted in
//! byte-wise ascending order, so two sets with the same contents always encode
//! identically regardless of the order they were populated in.

use crate::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display};
use url::Url;

/// Bytes escaped in query keys and values: everything except ASCII
/// alphanumerics and `-_.~`. Spaces are handled separately and become `+`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Query parameters for one request.
///
/// Each key maps to an ordered list of values. Setting a key always replaces
/// whatever it held before.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, Vec<String>>,
}

impl ParameterSet {
    /// Create a new, empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Return the first value for `key`, or `""` when the key is absent or
    /// holds no values.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map_or("", String::as_str)
    }

    /// Return every value stored for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map_or(&[], Vec::as_slice)
    }

    /// Set `key` to a single value, replacing any existing values.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), vec![value.into()]);
    }

    /// Set `key` only when a value is present.
    pub fn set_opt<T>(&mut self, key: impl Into<String>, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
    }

    /// Set `key` to an ordered list of values, replacing any existing values.
    ///
    /// The set always owns what it stores, so the caller remains free to
    /// modify its own collection afterwards. Passing a `Vec<String>` by value
    /// moves it in and reuses its buffer.
    pub fn set_multi<I, V>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.params.insert(key.into(), values);
    }

    /// Remove `key`, returning its values if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.params.remove(key)
    }

    /// Returns true if `key` has been set, even to an empty list.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over keys and their values in encoding order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.params.iter(),
        }
    }

    /// Encode the set as `key=value` pairs joined with `&`.
    ///
    /// Keys are sorted byte-wise; the values of a multi-valued key keep the
    /// order they were supplied in. An empty set encodes to `""`. Spaces
    /// become `+`, and every byte other than ASCII alphanumerics and `-_.~`
    /// is percent-encoded.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs = Vec::new();
        for (key, values) in &self.params {
            let key = escape(key);
            for value in values {
                pairs.push(format!("{key}={}", escape(value)));
            }
        }
        tracing::trace!(keys = self.params.len(), "encoded query parameters");
        pairs.join("&")
    }

    /// Replace the query of `url` with this set's encoding.
    ///
    /// An empty set removes the query entirely.
    pub fn apply_to_url(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }

    /// Parse `base` and return it with this set as its query.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute URL.
    pub fn to_url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base)?;
        self.apply_to_url(&mut url);
        Ok(url)
    }
}

fn escape(text: &str) -> String {
    text.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

impl Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ParameterSet`], in key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Vec<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
