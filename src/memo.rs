//! Memo extraction: pulls the answer-key lines out of an agent response.

/// Header line that starts every memo.
pub const MEMO_HEADER: &str = "Memo:";

/// Substring that marks a response line as part of the answer key.
// TODO: the scan is case-sensitive and misses "answer:", "Ans:" and "A:"
// phrasings; broaden only once real agent output confirms which forms occur.
const ANSWER_MARKER: &str = "Answer:";

/// Extract the memo (answer-key subset) from a raw agent response.
///
/// Scans line by line and keeps every line containing the literal
/// `"Answer:"`, in original order, untrimmed and without deduplication.
/// A response with no matching lines still yields the `"Memo:\n"` header —
/// a header-only memo, never an empty string and never an error.
pub fn extract_memo(response_text: &str) -> String {
    let mut memo = String::from(MEMO_HEADER);
    memo.push('\n');
    for line in response_text.split('\n') {
        if line.contains(ANSWER_MARKER) {
            memo.push_str(line);
            memo.push('\n');
        }
    }
    memo
}
