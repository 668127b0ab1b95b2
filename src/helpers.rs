/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query off a fragment-less URL at the first `?`
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split an authority (after a leading `//`) from the path.
/// Returns (`authority`, `path`), or `None` when there is no `//` marker.
pub fn split_authority(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix("//")?;
    let end = memchr::memchr(b'/', rest.as_bytes()).unwrap_or(rest.len());
    Some((&rest[..end], &rest[end..]))
}
