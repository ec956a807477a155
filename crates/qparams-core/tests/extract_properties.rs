//! Integration test: the public extraction API against the documented examples.
//!
//! Drives `extract_query_params` through the crate root the way a deep-link
//! router would, then renders the result.

use qparams_core::output::{render, OutputFormat};
use qparams_core::{extract_query_params, QueryParameterMap};

fn map(pairs: &[(&str, &str)]) -> QueryParameterMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn urls_without_question_mark_are_empty() {
    for url in [
        "https://x.test",
        "https://x.test/path/to/page",
        "https://x.test/page#section",
        "celo://wallet/pay",
        "",
    ] {
        assert!(extract_query_params(url).is_empty(), "{url}");
    }
}

#[test]
fn documented_examples() {
    let cases: &[(&str, &[(&str, &str)])] = &[
        ("https://x.test/?a=1&b=2", &[("a", "1"), ("b", "2")]),
        ("https://x.test/?a=1&a=2", &[("a", "2")]),
        ("https://x.test/?a&b=", &[("a", ""), ("b", "")]),
        ("https://x.test/?=v", &[]),
        ("https://x.test/?k=%20space", &[("k", " space")]),
        ("https://x.test/?a=1#frag?b=2", &[("a", "1")]),
    ];
    for (url, expected) in cases {
        assert_eq!(extract_query_params(url), map(expected), "{url}");
    }
}

#[test]
fn deep_link_payment_request() {
    let url = "celo://wallet/pay?address=0xabc&displayName=Alice%20B&amount=1.5&comment=thanks+a%20lot";
    let params = extract_query_params(url);
    assert_eq!(params.len(), 4);
    assert_eq!(params["address"], "0xabc");
    assert_eq!(params["displayName"], "Alice B");
    assert_eq!(params["amount"], "1.5");
    assert_eq!(params["comment"], "thanks+a lot");
}

#[test]
fn result_outlives_the_url() {
    let params = {
        let owned = String::from("https://x.test/?token=abc");
        extract_query_params(&owned)
    };
    assert_eq!(params, map(&[("token", "abc")]));
}

#[test]
fn concurrent_calls_agree() {
    let url = "https://x.test/?a=1&b=%41&c";
    let expected = extract_query_params(url);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || extract_query_params(url)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn extracted_map_renders_as_lines() {
    let params = extract_query_params("https://x.test/?z=26&a=1");
    assert_eq!(
        render(&params, OutputFormat::Lines, true).unwrap(),
        "a=1\nz=26\n"
    );
}
