//! Tests for trigger inventory loading and maintenance

use prepfex::triggers::{TriggerSet, DEFAULT_PREPOSITIONS};
use std::env;
use std::fs;
use std::io;

#[test]
fn can_load_the_bundled_inventory() {
  let set = TriggerSet::load("tests/resources/prepositions.txt").unwrap();
  assert_eq!(set.len(), 8);
  for word in &DEFAULT_PREPOSITIONS {
    assert!(set.contains(word));
  }
  assert!(set.contains("On"));
  assert!(!set.contains("over"));
}

#[test]
fn can_skip_blank_lines_and_fold_duplicates() {
  let path = env::temp_dir().join("prepfex_blank_inventory.txt");
  let path = path.to_str().unwrap();
  fs::write(path, "On\n\n  of \nON\n").unwrap();
  let set = TriggerSet::load(path).unwrap();
  assert_eq!(set.len(), 2);
  assert!(set.contains("on"));
  assert!(set.contains("of"));
  fs::remove_file(path).unwrap();
}

#[test]
fn can_build_sets_from_word_lists() {
  let set = TriggerSet::from_words(&["Under", "OVER"]);
  assert_eq!(set.len(), 2);
  assert!(set.contains("under"));
  assert!(set.contains("over"));
  assert!(TriggerSet::from_words(&[]).is_empty());
}

#[test]
fn can_seed_and_append_an_inventory() {
  let path = env::temp_dir().join("prepfex_seeded_inventory.txt");
  let path = path.to_str().unwrap();
  TriggerSet::seed(path).unwrap();
  let seeded = TriggerSet::load(path).unwrap();
  assert_eq!(seeded.len(), 8);

  let added = TriggerSet::append(path, &["near", "OF", "under", "near"]).unwrap();
  assert_eq!(added, 2);
  let extended = TriggerSet::load(path).unwrap();
  assert_eq!(extended.len(), 10);
  assert!(extended.contains("near"));
  assert!(extended.contains("under"));
  fs::remove_file(path).unwrap();
}

#[test]
fn can_append_after_an_unterminated_final_line() {
  let path = env::temp_dir().join("prepfex_unterminated_inventory.txt");
  let path = path.to_str().unwrap();
  fs::write(path, "on\nfor").unwrap();

  let added = TriggerSet::append(path, &["near"]).unwrap();
  assert_eq!(added, 1);
  assert_eq!(fs::read_to_string(path).unwrap(), "on\nfor\nnear\n");
  let extended = TriggerSet::load(path).unwrap();
  assert_eq!(extended.len(), 3);
  assert!(extended.contains("for"));
  assert!(extended.contains("near"));

  // nothing to add leaves the file untouched, even without the final "\n"
  fs::write(path, "on\nfor").unwrap();
  assert_eq!(TriggerSet::append(path, &["FOR"]).unwrap(), 0);
  assert_eq!(fs::read_to_string(path).unwrap(), "on\nfor");
  fs::remove_file(path).unwrap();
}

#[test]
fn can_report_missing_inventory_files() {
  match TriggerSet::load("tests/resources/no_such_inventory.txt") {
    Err(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
    Ok(_) => panic!("loading a missing inventory should fail"),
  }
}
