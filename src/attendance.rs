use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{AttendanceKey, AttendanceRecord, PresentSet};

/// Attendance by (date, class). One record per key; saving replaces the
/// present set instead of merging into it. Records are never deleted, and ids
/// inside a set are not checked against the roster.
#[derive(Debug, Clone, Default)]
pub struct AttendanceBook {
    records: BTreeMap<AttendanceKey, PresentSet>,
}

impl AttendanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &AttendanceKey) -> PresentSet {
        self.records.get(key).cloned().unwrap_or_default()
    }

    pub fn save(&mut self, key: AttendanceKey, present: PresentSet) {
        debug!(
            date = %key.date,
            class_id = %key.class_id,
            present = present.len(),
            "attendance saved"
        );
        self.records.insert(key, present);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records ordered by date, then class id.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .map(|(key, present)| AttendanceRecord {
                key: key.clone(),
                present_student_ids: present.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(date: &str, class_id: &str) -> AttendanceKey {
        AttendanceKey::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
            class_id,
        )
    }

    fn set(ids: &[&str]) -> PresentSet {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unsaved_key_reads_empty() {
        let book = AttendanceBook::new();
        assert!(book.get(&key("2024-06-03", "cls-1")).is_empty());
        assert!(book.is_empty());
    }

    #[test]
    fn second_save_replaces_not_merges() {
        let mut book = AttendanceBook::new();
        book.save(key("2024-06-03", "cls-1"), set(&["stu-1", "stu-2"]));
        book.save(key("2024-06-03", "cls-1"), set(&["stu-3"]));
        assert_eq!(book.get(&key("2024-06-03", "cls-1")), set(&["stu-3"]));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn saving_empty_set_keeps_a_record() {
        let mut book = AttendanceBook::new();
        book.save(key("2024-06-03", "cls-1"), set(&["stu-1"]));
        book.save(key("2024-06-03", "cls-1"), PresentSet::new());
        assert!(book.get(&key("2024-06-03", "cls-1")).is_empty());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn keys_differ_by_date_and_class() {
        let mut book = AttendanceBook::new();
        book.save(key("2024-06-03", "cls-1"), set(&["stu-1"]));
        book.save(key("2024-06-03", "cls-2"), set(&["stu-2"]));
        book.save(key("2024-06-04", "cls-1"), set(&["stu-3"]));
        assert_eq!(book.len(), 3);
        assert_eq!(book.get(&key("2024-06-03", "cls-2")), set(&["stu-2"]));

        let order: Vec<(String, String)> = book
            .records()
            .into_iter()
            .map(|r| (r.key.date.to_string(), r.key.class_id))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2024-06-03".to_string(), "cls-1".to_string()),
                ("2024-06-03".to_string(), "cls-2".to_string()),
                ("2024-06-04".to_string(), "cls-1".to_string()),
            ]
        );
    }

    #[test]
    fn dangling_student_ids_are_kept() {
        let mut book = AttendanceBook::new();
        book.save(key("2024-06-03", "cls-9"), set(&["stu-gone"]));
        assert_eq!(book.get(&key("2024-06-03", "cls-9")), set(&["stu-gone"]));
    }
}
