use super::case_loader::{CaseFailure, CaseResult, TestCase, load_cases};
/// Merge case runner
///
/// Runs every bundled case through `qparams::args::Invocation`
use qparams::MergeError;
use qparams::args::{Invocation, collect_keywords};

fn error_kind(err: &MergeError) -> &'static str {
    match err {
        MergeError::TooFewArguments | MergeError::TooManyArguments { .. } => "arity",
        MergeError::InvalidCollection(_) => "collection",
        MergeError::InvalidSeparator(_) => "separator",
        MergeError::UnknownPolicy(_) => "policy",
    }
}

/// Compare `actual` to a fixed prefix followed by tokens in any order
fn matches_unordered(actual: &str, prefix: &str, tail: &[String], separator: char) -> bool {
    let Some(rest) = actual.strip_prefix(prefix) else {
        return false;
    };
    let rest = rest.strip_prefix(separator).unwrap_or(rest);
    let mut got: Vec<&str> = rest.split(separator).filter(|t| !t.is_empty()).collect();
    let mut want: Vec<&str> = tail.iter().map(String::as_str).collect();
    got.sort_unstable();
    want.sort_unstable();
    got == want
}

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::MergeTest {
            args,
            keywords,
            policy,
            separator,
            expected,
            expected_prefix,
            expected_tail,
            error,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let mut invocation = Invocation::new(args.clone());
        invocation.keywords = collect_keywords(&keywords);
        if let Some(policy) = &policy {
            match policy.parse() {
                Ok(policy) => invocation.policy = policy,
                Err(e) => panic!("case #{case_num}: {e}"),
            }
        }
        invocation.separator.clone_from(&separator);

        let split_on = match separator.as_deref() {
            Some(";") => ';',
            _ => '&',
        };

        let (passed, want, got) = match (invocation.call(), &error) {
            (Err(err), Some(kind)) => (error_kind(&err) == kind.as_str(), kind.clone(), err.to_string()),
            (Err(err), None) => (false, format!("{expected:?}"), err.to_string()),
            (Ok(url), Some(kind)) => (false, format!("error: {kind}"), url),
            (Ok(url), None) => match (&expected, &expected_prefix, &expected_tail) {
                (Some(want), _, _) => (&url == want, want.clone(), url),
                (None, Some(prefix), Some(tail)) => (
                    matches_unordered(&url, prefix, tail, split_on),
                    format!("{prefix} + any order of {tail:?}"),
                    url,
                ),
                _ => panic!("case #{case_num} has no expectation"),
            },
        };

        if passed {
            result.passed += 1;
        } else {
            result.failures.push(CaseFailure {
                case_num,
                args,
                expected: want,
                actual: got,
            });
        }
    }

    result
}

#[test]
fn test_merge_cases() {
    let cases = load_cases();
    let result = run_cases(cases);
    assert!(result.passed > 0);
    assert!(result.failures.is_empty(), "{}", result.summary());
}
