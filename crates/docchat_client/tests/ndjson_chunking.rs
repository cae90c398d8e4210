//! Property tests: decoding must not depend on how the bytes were chunked.

use docchat_client::NdjsonDecoder;
use proptest::prelude::*;
use serde_json::{Value, json};

fn content_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,]{0,40}",
        "[\\u{00e0}-\\u{00ff}\\u{4e00}-\\u{4e20}]{1,10}",
        Just("emoji \u{1f600}\u{1f680} done".to_string()),
        Just("line\\nbreak inside json".to_string()),
    ]
}

fn encode(contents: &[String]) -> (Vec<u8>, Vec<Value>) {
    let mut body = Vec::new();
    let mut expected = Vec::new();
    for content in contents {
        let record = json!({"type": "chunk", "content": content});
        body.extend_from_slice(record.to_string().as_bytes());
        body.push(b'\n');
        expected.push(record);
    }
    let end = json!({"type": "end", "references": [], "total_tokens": "N/A"});
    body.extend_from_slice(end.to_string().as_bytes());
    body.push(b'\n');
    expected.push(end);
    (body, expected)
}

fn decode_in_pieces(body: &[u8], cuts: &[usize]) -> Vec<Value> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (body.len() + 1)).collect();
    points.sort_unstable();
    points.dedup();

    let mut decoder = NdjsonDecoder::new();
    let mut out = Vec::new();
    let mut start = 0;
    for point in points {
        out.extend(decoder.push(&body[start..point]));
        start = point;
    }
    out.extend(decoder.push(&body[start..]));
    assert_eq!(decoder.finish(), 0);
    out
}

proptest! {
    #[test]
    fn arbitrary_cuts_yield_same_records(
        contents in prop::collection::vec(content_strategy(), 0..8),
        cuts in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let (body, expected) = encode(&contents);
        prop_assert_eq!(decode_in_pieces(&body, &cuts), expected);
    }

    #[test]
    fn one_byte_at_a_time(contents in prop::collection::vec(content_strategy(), 0..5)) {
        let (body, expected) = encode(&contents);
        let mut decoder = NdjsonDecoder::new();
        let mut out = Vec::new();
        for byte in &body {
            out.extend(decoder.push(std::slice::from_ref(byte)));
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn malformed_line_is_skipped_among_valid(
        before in content_strategy(),
        garbage in "[a-z{}:]{1,20}",
        after in content_strategy(),
    ) {
        prop_assume!(serde_json::from_str::<Value>(&garbage).is_err());
        let mut body = Vec::new();
        body.extend_from_slice(json!({"type": "chunk", "content": before}).to_string().as_bytes());
        body.push(b'\n');
        body.extend_from_slice(garbage.as_bytes());
        body.push(b'\n');
        body.extend_from_slice(json!({"type": "chunk", "content": after}).to_string().as_bytes());
        body.push(b'\n');

        let mut decoder = NdjsonDecoder::new();
        let out = decoder.push(&body);
        prop_assert_eq!(out.len(), 2);
        prop_assert_eq!(decoder.malformed(), 1);
    }
}

#[test]
fn trailing_record_without_newline_is_dropped() {
    let mut decoder = NdjsonDecoder::new();
    let out = decoder.push(b"{\"type\":\"chunk\",\"content\":\"a\"}\n{\"type\":\"end\"}");
    assert_eq!(out.len(), 1);
    assert!(decoder.finish() > 0);
}
