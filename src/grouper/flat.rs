use std::collections::HashMap;

use crate::models::{Conversation, Entry, Session};
use crate::parsers::HistoryRecord;

/// Group flat history records into a [`Conversation`] of ordered sessions.
///
/// Records are partitioned by `session_id` preserving arrival order, each
/// bucket is stable-sorted by timestamp (equal timestamps keep their input
/// order), and the resulting sessions are sorted by start time with the
/// session id as tie-break so output is deterministic.
///
/// Duplicate `(session_id, timestamp)` pairs are retained; grouping is a
/// stable sort, not a set. Zero input records yield an empty Conversation.
pub fn group_history(records: Vec<HistoryRecord>) -> Conversation {
    // Accumulator is local to this call and discarded once the immutable
    // Conversation is built.
    let mut buckets: HashMap<String, Vec<Entry>> = HashMap::new();
    for record in records {
        let entry = Entry {
            session_id: record.session_id.clone(),
            timestamp: record.timestamp,
            text: record.text,
        };
        buckets.entry(record.session_id).or_default().push(entry);
    }

    let mut sessions: Vec<Session> = buckets
        .into_iter()
        .map(|(session_id, mut entries)| {
            // Vec::sort_by_key is stable, so equal timestamps keep arrival order.
            entries.sort_by_key(|e| e.timestamp);
            Session::new(session_id, entries)
        })
        .collect();

    sessions.sort_by(|a, b| {
        a.start_time().cmp(&b.start_time()).then_with(|| a.session_id.cmp(&b.session_id))
    });

    Conversation { sessions }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn record(session_id: &str, ts: i64, text: &str) -> HistoryRecord {
        serde_json::from_str(&format!(
            r#"{{"session_id":"{}","ts":{},"text":"{}"}}"#,
            session_id, ts, text
        ))
        .unwrap()
    }

    #[test]
    fn test_sessions_ordered_by_start_time() {
        let records = vec![record("a", 100, "hi"), record("b", 50, "yo"), record("a", 90, "there")];
        let conversation = group_history(records);

        assert_eq!(conversation.sessions.len(), 2);
        // b starts at 50, before a's start at 90
        assert_eq!(conversation.sessions[0].session_id, "b");
        assert_eq!(conversation.sessions[1].session_id, "a");

        let a = &conversation.sessions[1];
        assert_eq!(a.entries[0].text, "there");
        assert_eq!(a.entries[1].text, "hi");
        assert_eq!(a.entries[0].timestamp, DateTime::from_timestamp_millis(90).unwrap());
    }

    #[test]
    fn test_total_entries_matches_input_count() {
        let records =
            vec![record("a", 1, "x"), record("b", 2, "y"), record("a", 3, "z"), record("c", 4, "w")];
        let conversation = group_history(records);
        assert_eq!(conversation.total_entries(), 4);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let records = vec![record("a", 100, "first"), record("a", 100, "second")];
        let conversation = group_history(records);
        let entries = &conversation.sessions[0].entries;
        assert_eq!(entries[0].text, "first");
        assert_eq!(entries[1].text, "second");
    }

    #[test]
    fn test_duplicate_records_are_kept() {
        let records = vec![record("a", 100, "x"), record("a", 100, "x")];
        let conversation = group_history(records);
        assert_eq!(conversation.sessions[0].entry_count(), 2);
    }

    #[test]
    fn test_equal_start_times_break_ties_by_session_id() {
        let records = vec![record("zz", 100, "x"), record("aa", 100, "y")];
        let conversation = group_history(records);
        assert_eq!(conversation.sessions[0].session_id, "aa");
        assert_eq!(conversation.sessions[1].session_id, "zz");
    }

    #[test]
    fn test_empty_input_yields_empty_conversation() {
        let conversation = group_history(Vec::new());
        assert!(conversation.sessions.is_empty());
        assert_eq!(conversation.total_entries(), 0);
    }

    #[test]
    fn test_single_record_yields_single_entry_session() {
        let conversation = group_history(vec![record("only", 7, "hi")]);
        assert_eq!(conversation.sessions.len(), 1);
        assert_eq!(conversation.sessions[0].entry_count(), 1);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let records = || {
            vec![
                record("a", 100, "hi"),
                record("b", 50, "yo"),
                record("a", 90, "there"),
                record("c", 50, "tie"),
            ]
        };
        assert_eq!(group_history(records()), group_history(records()));
    }
}
