/// Query merge usage example
use qparams::{Policy, QueryMerge, add_query_params};

fn main() {
    // Append (the default) keeps every occurrence
    let url = add_query_params("http://example.com/a?a=b", [("a", "b"), ("c", "d")]);
    println!("append:   {url}"); // http://example.com/a?a=b&a=b&c=d

    // Dedupe groups values by key and drops exact duplicates
    let url = QueryMerge::new("foo?a=b&b=c&a=b&a=d")
        .policy(Policy::DedupeGroup)
        .param("a", ["b", "e"])
        .apply();
    println!("dedupe:   {url}"); // foo?a=b&a=d&a=e&b=c

    // Override replaces values in place
    let url = QueryMerge::new("foo?page=1&q=rust#top")
        .policy(Policy::Override)
        .param("page", 2)
        .apply();
    println!("override: {url}"); // foo?page=2&q=rust#top

    // A bare key has no value
    let url = QueryMerge::new("foo;bar?a=1;b=2")
        .param("debug", None::<&str>)
        .apply();
    println!("bare key: {url}"); // foo;bar?a=1;b=2;debug
}
