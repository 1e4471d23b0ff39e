//! Scanning annotated sentences for trigger occurrences, cutting a feature
//! window for each one.

use serde::{Deserialize, Serialize};

use crate::annotation::AnnotatedSentence;
use crate::features;
use crate::features::WindowError;
use crate::pos::Coarse;
use crate::triggers::TriggerSet;

/// One extracted occurrence: a trigger preposition in context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
  /// occurrence id, `<sentence id>_<token position>`
  pub id: String,
  /// the matched trigger word as it appeared in the sentence
  pub prep: String,
  /// the window feature strings, surface channel before tag channel
  pub features: Vec<String>,
}

/// Decides whether the token at `index` counts as a preposition occurrence.
/// It has to match the trigger inventory, and a "to" directly followed by a
/// verb is read as an infinitive marker rather than a preposition.
pub fn is_occurrence(sentence: &AnnotatedSentence, index: usize, triggers: &TriggerSet) -> bool {
  let token = match sentence.tokens.get(index) {
    Some(token) => token,
    None => return false,
  };
  let lower = token.text.to_lowercase();
  if !triggers.contains(&lower) {
    return false;
  }
  if lower == "to" && index + 1 < sentence.len() && sentence.tokens[index + 1].coarse == Coarse::Verb
  {
    return false;
  }
  true
}

/// Scans one sentence and returns a record for every trigger occurrence,
/// in token order
pub fn scan_sentence(
  sentence: &AnnotatedSentence,
  sentence_id: &str,
  triggers: &TriggerSet,
) -> Result<Vec<FeatureRecord>, WindowError> {
  let mut records = Vec::new();
  for index in 0..sentence.len() {
    if !is_occurrence(sentence, index, triggers) {
      continue;
    }
    records.push(FeatureRecord {
      id: format!("{}_{}", sentence_id, index),
      prep: sentence.tokens[index].text.clone(),
      features: features::extract(sentence, index)?,
    });
  }
  Ok(records)
}
