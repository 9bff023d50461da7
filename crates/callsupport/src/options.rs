//! Call options that contribute query parameters to a request.
//!
//! A generated client method accepts a list of `&dyn CallOption` from its
//! caller and applies them to the request's [`ParameterSet`] with
//! [`apply_options`]. Options are applied in order and a later option for the
//! same parameter replaces an earlier one.

use crate::params::ParameterSet;
use std::borrow::Cow;

/// The parameter contribution made by a [`CallOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// A parameter with exactly one value.
    Single {
        /// Parameter name
        name: &'a str,
        /// Parameter value
        value: Cow<'a, str>,
    },
    /// A parameter with an ordered list of values.
    Multi {
        /// Parameter name
        name: &'a str,
        /// Parameter values, in the order they are encoded
        values: &'a [String],
    },
}

/// An option passed to an API call that sets a query parameter.
pub trait CallOption {
    /// Describe the parameter this option sets.
    fn value(&self) -> OptionValue<'_>;
}

impl ParameterSet {
    /// Apply a single call option.
    pub fn apply(&mut self, option: &dyn CallOption) {
        match option.value() {
            OptionValue::Multi { name, values } => self.set_multi(name, values),
            OptionValue::Single { name, value } => self.set(name, value),
        }
    }
}

/// Apply `options` to `params` in order.
///
/// Multi-value options replace the parameter with all of their values; every
/// other option replaces it with its single value.
pub fn apply_options(params: &mut ParameterSet, options: &[&dyn CallOption]) {
    for option in options {
        params.apply(*option);
    }
    tracing::trace!(options = options.len(), "applied call options");
}

/// Identifies the user the request is made on behalf of, for quota purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaUser(pub String);

impl CallOption for QuotaUser {
    fn value(&self) -> OptionValue<'_> {
        OptionValue::Single {
            name: "quotaUser",
            value: Cow::Borrowed(&self.0),
        }
    }
}

/// IP address of the end user the request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIp(pub String);

impl CallOption for UserIp {
    fn value(&self) -> OptionValue<'_> {
        OptionValue::Single {
            name: "userIp",
            value: Cow::Borrowed(&self.0),
        }
    }
}

/// Requests server-side tracing under the given token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace(pub String);

impl CallOption for Trace {
    fn value(&self) -> OptionValue<'_> {
        OptionValue::Single {
            name: "trace",
            value: Cow::Owned(format!("token:{}", self.0)),
        }
    }
}

/// Partial-response field selection.
///
/// Each entry is a field path such as `items/id` or `nextPageToken`; the
/// entries are sent as a single comma-separated `fields` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Select the given field paths.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Add one more field path.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>) -> Self {
        self.0.push(field.into());
        self
    }
}

impl CallOption for Fields {
    fn value(&self) -> OptionValue<'_> {
        OptionValue::Single {
            name: "fields",
            value: Cow::Owned(self.0.join(",")),
        }
    }
}

/// An arbitrary query parameter with one or more values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    name: String,
    values: Vec<String>,
}

impl QueryParameter {
    /// Create a parameter named `name` with the given values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl CallOption for QueryParameter {
    fn value(&self) -> OptionValue<'_> {
        OptionValue::Multi {
            name: &self.name,
            values: &self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_options_use_expected_names() {
        let mut params = ParameterSet::new();
        apply_options(
            &mut params,
            &[
                &QuotaUser("alice".into()),
                &UserIp("10.0.0.1".into()),
                &Trace("abc".into()),
            ],
        );

        assert_eq!(params.get("quotaUser"), "alice");
        assert_eq!(params.get("userIp"), "10.0.0.1");
        assert_eq!(params.get("trace"), "token:abc");
    }

    #[test]
    fn fields_are_comma_joined() {
        let fields = Fields::new(["items/id", "nextPageToken"]).with("kind");
        let mut params = ParameterSet::new();
        params.apply(&fields);
        assert_eq!(params.get("fields"), "items/id,nextPageToken,kind");
        assert_eq!(params.encode(), "fields=items%2Fid%2CnextPageToken%2Ckind");
    }

    #[test]
    fn multi_option_sets_all_values() {
        let option = QueryParameter::new("x", ["3", "1", "2"]);
        let mut params = ParameterSet::new();
        apply_options(&mut params, &[&option]);
        assert_eq!(params.encode(), "x=3&x=1&x=2");
    }

    #[test]
    fn later_option_overwrites_earlier() {
        let mut params = ParameterSet::new();
        apply_options(
            &mut params,
            &[
                &QueryParameter::new("quotaUser", ["a", "b"]),
                &QuotaUser("c".into()),
            ],
        );
        assert_eq!(params.get_all("quotaUser"), ["c".to_string()]);
    }

    #[test]
    fn option_replaces_existing_parameter() {
        let mut params = ParameterSet::new();
        params.set("alt", "json");
        params.set("trace", "stale");
        params.apply(&Trace("fresh".into()));
        assert_eq!(params.encode(), "alt=json&trace=token%3Afresh");
    }

    #[test]
    fn no_options_leaves_set_unchanged() {
        let mut params = ParameterSet::new();
        apply_options(&mut params, &[]);
        assert!(params.is_empty());
    }

    #[test]
    fn custom_option_can_implement_trait() {
        struct PageSize(u32);

        impl CallOption for PageSize {
            fn value(&self) -> OptionValue<'_> {
                OptionValue::Single {
                    name: "pageSize",
                    value: Cow::Owned(self.0.to_string()),
                }
            }
        }

        let mut params = ParameterSet::new();
        params.apply(&PageSize(50));
        assert_eq!(params.get("pageSize"), "50");
    }
}
