// crates/lcec-configgen/src/pins.rs

//! HAL pin naming: normalization and per-slave de-duplication.

use crate::types::{PdoEntry, SyncManager};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Turns free text into a HAL pin name: lower-cases it and replaces every run
/// of characters other than `a-z`/`0-9` with a single `-`.
///
/// `"Status Word 1"` becomes `"status-word-1"`.
pub fn normalize_pin_name(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

/// The disambiguating tag of a PDO: the last word of a multi-word label.
fn label_tag(label: Option<&str>) -> Option<&str> {
    let words: Vec<&str> = label?.split_whitespace().collect();
    if words.len() > 1 { words.last().copied() } else { None }
}

fn entries_mut(sync_managers: &mut [SyncManager]) -> impl Iterator<Item = &mut PdoEntry> {
    sync_managers
        .iter_mut()
        .flat_map(|sm| sm.pdos.iter_mut())
        .flat_map(|pdo| pdo.entries.iter_mut())
}

fn count_pin_names(sync_managers: &[SyncManager]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entry in sync_managers
        .iter()
        .flat_map(|sm| &sm.pdos)
        .flat_map(|pdo| &pdo.entries)
    {
        *counts.entry(entry.pin_name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Makes every pin name within one slave unique.
///
/// Names that occur more than once are prefixed with their PDO's tag (the
/// last word of the PDO label, e.g. `1` for `"Status Word 1"`) or, failing
/// that, with the sync manager direction, and re-normalized. Collisions that
/// survive the prefixing get a numeric suffix (`-2`, `-3`, ...) on every
/// occurrence after the first.
pub fn deduplicate_pin_names(sync_managers: &mut [SyncManager]) {
    let counts = count_pin_names(sync_managers);
    if counts.values().all(|&n| n < 2) {
        return;
    }

    for sm in sync_managers.iter_mut() {
        let direction = sm.direction;
        for pdo in &mut sm.pdos {
            let tag = label_tag(pdo.label.as_deref())
                .unwrap_or(direction.as_str())
                .to_string();
            for entry in &mut pdo.entries {
                if counts.get(&entry.pin_name).copied().unwrap_or(0) > 1 {
                    let renamed = normalize_pin_name(&format!("{} {}", tag, entry.pin_name));
                    debug!(
                        "[Pins] Renaming duplicate pin {} to {}",
                        entry.pin_name, renamed
                    );
                    entry.pin_name = renamed;
                }
            }
        }
    }

    suffix_remaining_duplicates(sync_managers);
}

fn suffix_remaining_duplicates(sync_managers: &mut [SyncManager]) {
    let taken: HashSet<String> = count_pin_names(sync_managers).into_keys().collect();
    let mut seen = HashSet::new();
    for entry in entries_mut(sync_managers) {
        if seen.insert(entry.pin_name.clone()) {
            continue;
        }
        let mut n = 2;
        let renamed = loop {
            let candidate = format!("{}-{}", entry.pin_name, n);
            if !taken.contains(&candidate) && !seen.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        debug!(
            "[Pins] Pin {} still collides, using {}",
            entry.pin_name, renamed
        );
        seen.insert(renamed.clone());
        entry.pin_name = renamed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Pdo, PinType};

    fn entry(pin: &str) -> PdoEntry {
        PdoEntry {
            index: 0x6000,
            sub_index: 1,
            bit_len: 16,
            pin_name: pin.to_string(),
            pin_type: PinType::U32,
            label: None,
        }
    }

    fn pdo(label: Option<&str>, pins: &[&str]) -> Pdo {
        Pdo {
            index: 0x1a00,
            label: label.map(str::to_string),
            entries: pins.iter().map(|p| entry(p)).collect(),
        }
    }

    fn pin_names(sms: &[SyncManager]) -> Vec<String> {
        sms.iter()
            .flat_map(|sm| &sm.pdos)
            .flat_map(|p| &p.entries)
            .map(|e| e.pin_name.clone())
            .collect()
    }

    #[test]
    fn test_normalize_pin_name() {
        assert_eq!(normalize_pin_name("Status Word 1"), "status-word-1");
        assert_eq!(normalize_pin_name("Input  --  Value"), "input-value");
        assert_eq!(normalize_pin_name("Position.Actual_Value"), "position-actual-value");
        assert_eq!(normalize_pin_name(" Ümlaut"), "-mlaut");
        assert_eq!(normalize_pin_name("already-ok-9"), "already-ok-9");
    }

    #[test]
    fn test_label_tag() {
        assert_eq!(label_tag(Some("Status Word 1")), Some("1"));
        assert_eq!(label_tag(Some("Inputs")), None);
        assert_eq!(label_tag(None), None);
    }

    #[test]
    fn test_duplicates_use_pdo_label_tag() {
        let mut sms = vec![SyncManager {
            index: 3,
            direction: Direction::In,
            pdos: vec![
                pdo(Some("Status Word 1"), &["status", "position"]),
                pdo(Some("Status Word 2"), &["status"]),
            ],
        }];
        deduplicate_pin_names(&mut sms);
        assert_eq!(pin_names(&sms), vec!["1-status", "position", "2-status"]);
    }

    #[test]
    fn test_duplicates_fall_back_to_direction() {
        let mut sms = vec![
            SyncManager {
                index: 2,
                direction: Direction::Out,
                pdos: vec![pdo(Some("Outputs"), &["value"])],
            },
            SyncManager {
                index: 3,
                direction: Direction::In,
                pdos: vec![pdo(None, &["value"])],
            },
        ];
        deduplicate_pin_names(&mut sms);
        assert_eq!(pin_names(&sms), vec!["out-value", "in-value"]);
    }

    #[test]
    fn test_duplicates_within_one_pdo_get_suffixes() {
        let mut sms = vec![SyncManager {
            index: 3,
            direction: Direction::In,
            pdos: vec![pdo(Some("Channel 1"), &["value", "value", "value"])],
        }];
        deduplicate_pin_names(&mut sms);
        assert_eq!(pin_names(&sms), vec!["1-value", "1-value-2", "1-value-3"]);
    }

    #[test]
    fn test_unique_names_untouched() {
        let mut sms = vec![SyncManager {
            index: 2,
            direction: Direction::Out,
            pdos: vec![pdo(Some("Outputs A"), &["a", "b"])],
        }];
        deduplicate_pin_names(&mut sms);
        assert_eq!(pin_names(&sms), vec!["a", "b"]);
    }
}
