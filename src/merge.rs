use crate::collection::{Appended, Grouped, Overridden, QueryCollection};
use crate::compat::{String, ToString, Vec, vec};
use crate::error::Result;
use crate::query::parse_chunks;
use crate::separator::Separator;
use crate::types::Policy;
use crate::url_components::UrlParts;
use crate::value::ParamValue;

/// Builder for one merge of parameters into a URL's query.
///
/// Ordered parameters (`param`/`params`) are folded before `overrides`, whose
/// iteration order is whatever the source collection yields.
///
/// ```
/// use qparams::{Policy, QueryMerge};
///
/// let url = QueryMerge::new("http://example.com/a?a=b")
///     .policy(Policy::Override)
///     .param("a", "c")
///     .apply();
/// assert_eq!(url, "http://example.com/a?a=c");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryMerge<'a> {
    url: &'a str,
    policy: Policy,
    separator: Option<Separator>,
    params: Vec<(String, ParamValue)>,
    overrides: Vec<(String, ParamValue)>,
}

impl<'a> QueryMerge<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Force the separator used to parse and serialize the query.
    /// When unset it is inferred from the existing query.
    #[must_use]
    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Like [`QueryMerge::separator`], from a raw character.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidSeparator`](crate::MergeError::InvalidSeparator)
    /// unless `separator` is `&` or `;`.
    pub fn try_separator(self, separator: char) -> Result<Self> {
        Ok(self.separator(Separator::try_from(separator)?))
    }

    /// Add one ordered parameter
    #[must_use]
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add ordered parameters, merged in iteration order
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add unordered parameters, merged after every ordered one
    #[must_use]
    pub fn overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// True when there is nothing to merge, in which case `apply` returns the URL untouched
    pub fn is_noop(&self) -> bool {
        self.params.is_empty() && self.overrides.is_empty()
    }

    pub fn apply(self) -> String {
        if self.is_noop() {
            tracing::trace!(url = self.url, "no parameters supplied, returning url unchanged");
            return self.url.to_string();
        }

        let parts = UrlParts::split(self.url);
        let existing = parts.query_str();
        let separator = self
            .separator
            .unwrap_or_else(|| Separator::infer(existing));
        let query = separator.normalize(existing);

        tracing::debug!(
            policy = %self.policy,
            separator = %separator,
            params = self.params.len(),
            overrides = self.overrides.len(),
            "merging query parameters"
        );

        let merged = match self.policy {
            Policy::Append => {
                fold::<Appended>(&query, separator, self.params, self.overrides)
            }
            Policy::DedupeGroup => {
                fold::<Grouped>(&query, separator, self.params, self.overrides)
            }
            Policy::Override => {
                fold::<Overridden>(&query, separator, self.params, self.overrides)
            }
        };

        parts.join(&merged)
    }
}

fn fold<C: QueryCollection>(
    query: &str,
    separator: Separator,
    params: Vec<(String, ParamValue)>,
    overrides: Vec<(String, ParamValue)>,
) -> String {
    let mut collection = C::default();
    for (key, value) in parse_chunks(query, separator) {
        collection.update(key, vec![value]);
    }
    let existing = collection.entry_count();

    for (key, value) in params.into_iter().chain(overrides) {
        collection.update(key.into_bytes(), value.into_occurrences());
    }

    tracing::trace!(
        existing,
        merged = collection.entry_count(),
        "serializing query"
    );
    collection.to_query(separator)
}

/// Merge `params` into the query of `url` with the default policy ([`Policy::Append`])
/// and an inferred separator.
///
/// ```
/// assert_eq!(qparams::add_query_params("foo", [("bar", "baz")]), "foo?bar=baz");
/// ```
pub fn add_query_params<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ParamValue>,
{
    QueryMerge::new(url).overrides(params).apply()
}

/// Merge parameters into the query of `url`.
///
/// `extra` is merged in iteration order, then `overrides`. `separator` of
/// `None` infers it from the existing query.
///
/// # Errors
///
/// Returns [`MergeError::InvalidSeparator`](crate::MergeError::InvalidSeparator)
/// when `separator` is neither `&` nor `;`.
pub fn merge_params<I, K, V, J, L, W>(
    url: &str,
    policy: Policy,
    extra: I,
    separator: Option<char>,
    overrides: J,
) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ParamValue>,
    J: IntoIterator<Item = (L, W)>,
    L: Into<String>,
    W: Into<ParamValue>,
{
    let mut merge = QueryMerge::new(url).policy(policy);
    if let Some(separator) = separator {
        merge = merge.try_separator(separator)?;
    }
    Ok(merge.params(extra).overrides(overrides).apply())
}
