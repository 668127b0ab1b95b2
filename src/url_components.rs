use crate::character_sets::scheme_end;
use crate::compat::String;
use crate::helpers::{prune_fragment, split_authority, split_query};

/// Borrowed view of the five components of a URL-like string.
///
/// Layout: `"<https://example.com/a/b?x=1#top>"`
/// - `scheme`: `Some("https")` (without ":")
/// - `authority`: `Some("example.com")` (without "//")
/// - `path`: `"/a/b"`
/// - `query`: `Some("x=1")` (without "?")
/// - `fragment`: `Some("top")` (without "#")
///
/// No validation happens here. Anything that does not look like a scheme or
/// authority simply ends up in `path`, so relative references and bare
/// `path?query` strings split the same way as absolute URLs. An empty but
/// present fragment or authority (`"a#"`, `"file:///x"`) is kept as `Some("")`
/// so that [`UrlParts::join`] reproduces it byte for byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn split(input: &'a str) -> Self {
        let (rest, fragment) = prune_fragment(input);
        let (rest, query) = split_query(rest);

        let (scheme, rest) = match scheme_end(rest) {
            Some(end) => (Some(&rest[..end]), &rest[end + 1..]),
            None => (None, rest),
        };

        let (authority, path) = match split_authority(rest) {
            Some((authority, path)) => (Some(authority), path),
            None => (None, rest),
        };

        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Query substring, empty when the URL has none
    pub fn query_str(&self) -> &'a str {
        self.query.unwrap_or("")
    }

    /// Reassemble the URL, replacing the query with `query`.
    /// An empty `query` drops the `?` entirely.
    pub fn join(&self, query: &str) -> String {
        let mut out = String::with_capacity(
            self.scheme.map_or(0, |s| s.len() + 1)
                + self.authority.map_or(0, |a| a.len() + 2)
                + self.path.len()
                + query.len()
                + 1
                + self.fragment.map_or(0, |f| f.len() + 1),
        );

        if let Some(scheme) = self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(self.path);
        if !query.is_empty() {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}
