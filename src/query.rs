use crate::collection::{Bytes, Occurrence};
use crate::percent_encode::form_decode;
use crate::separator::Separator;

/// Split a raw query (without leading `?`) into decoded `(key, value)` chunks.
///
/// A chunk splits at its first `=`; a chunk without `=` is a bare key and
/// yields `None`. Empty chunks (`a=1&&b=2`) are skipped. Keys and values are
/// decoded to raw bytes so nothing in the existing query is lost.
pub fn parse_chunks(
    query: &str,
    separator: Separator,
) -> impl Iterator<Item = (Bytes, Occurrence)> + '_ {
    query
        .split(separator.as_char())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| match chunk.split_once('=') {
            Some((key, value)) => (form_decode(key), Some(form_decode(value))),
            None => (form_decode(chunk), None),
        })
}
