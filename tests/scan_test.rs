//! Tests for the trigger occurrence scan

use prepfex::annotation::AnnotatedSentence;
use prepfex::pos::{Coarse, Pos};
use prepfex::scan;
use prepfex::triggers::{TriggerSet, DEFAULT_PREPOSITIONS};

fn default_triggers() -> TriggerSet { TriggerSet::from_words(&DEFAULT_PREPOSITIONS) }

#[test]
fn can_match_triggers_case_insensitively() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("On", Pos::IN),
    ("Monday", Pos::NNP),
    ("it", Pos::PRP),
    ("rained", Pos::VBD),
    (".", Pos::SentFinal),
  ]);
  let triggers = default_triggers();
  assert!(scan::is_occurrence(&sentence, 0, &triggers));
  let records = scan::scan_sentence(&sentence, "42", &triggers).unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].id, "42_0");
  assert_eq!(records[0].prep, "On");
}

#[test]
fn can_exclude_infinitival_to() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("I", Pos::PRP),
    ("want", Pos::VBP),
    ("to", Pos::TO),
    ("go", Pos::VB),
    (".", Pos::SentFinal),
  ]);
  let triggers = default_triggers();
  assert!(!scan::is_occurrence(&sentence, 2, &triggers));
  assert!(scan::scan_sentence(&sentence, "3", &triggers)
    .unwrap()
    .is_empty());
}

#[test]
fn can_keep_prepositional_to() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("She", Pos::PRP),
    ("went", Pos::VBD),
    ("to", Pos::TO),
    ("the", Pos::DT),
    ("park", Pos::NN),
    (".", Pos::SentFinal),
  ]);
  assert!(scan::is_occurrence(&sentence, 2, &default_triggers()));
}

#[test]
fn can_keep_to_before_auxiliaries() {
  let mut sentence = AnnotatedSentence::from_tagged(&[
    ("I", Pos::PRP),
    ("want", Pos::VBP),
    ("to", Pos::TO),
    ("be", Pos::VB),
    ("here", Pos::RB),
    (".", Pos::SentFinal),
  ]);
  sentence.tokens[3].coarse = Coarse::Aux;
  assert!(scan::is_occurrence(&sentence, 2, &default_triggers()));
}

#[test]
fn can_keep_sentence_final_to() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("where", Pos::WRB),
    ("she", Pos::PRP),
    ("went", Pos::VBD),
    ("to", Pos::TO),
  ]);
  assert!(scan::is_occurrence(&sentence, 3, &default_triggers()));
}

#[test]
fn can_scan_in_token_order_with_positional_ids() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("He", Pos::PRP),
    ("sat", Pos::VBD),
    ("on", Pos::IN),
    ("a", Pos::DT),
    ("chair", Pos::NN),
    ("in", Pos::IN),
    ("the", Pos::DT),
    ("hall", Pos::NN),
    (".", Pos::SentFinal),
  ]);
  let records = scan::scan_sentence(&sentence, "7", &default_triggers()).unwrap();
  let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
  assert_eq!(ids, vec!["7_2", "7_5"]);
  let preps: Vec<&str> = records.iter().map(|record| record.prep.as_str()).collect();
  assert_eq!(preps, vec!["on", "in"]);
  for record in &records {
    assert_eq!(record.features.len(), 12);
  }
}

#[test]
fn can_ignore_tokens_outside_the_inventory() {
  let sentence = AnnotatedSentence::from_tagged(&[
    ("jumped", Pos::VBD),
    ("over", Pos::IN),
    ("it", Pos::PRP),
  ]);
  let triggers = default_triggers();
  assert!(!scan::is_occurrence(&sentence, 1, &triggers));
  assert!(!scan::is_occurrence(&sentence, 99, &triggers));
}
