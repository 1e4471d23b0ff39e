//! Feature windows around a trigger token: fixed slot patterns over a
//! five-token neighbourhood, rendered once per channel (surface text,
//! then part-of-speech tags).

use std::error::Error;
use std::fmt;

use crate::annotation::AnnotatedSentence;

/// Slot patterns applied to the five-token window. Slots are numbered 0 to
/// 4 with the trigger fixed at slot 2; each pattern lists the slots whose
/// contents are joined into one feature string.
pub static WINDOW_PATTERNS: [&[usize]; 6] = [
  &[1, 2],
  &[2, 3],
  &[1, 2, 3],
  &[0, 1, 2],
  &[2, 3, 4],
  &[0, 1, 2, 3, 4],
];

/// Errors when cutting a window out of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
  /// the requested trigger position lies outside the sentence
  IndexOutOfRange {
    /// the requested token position
    index: usize,
    /// the sentence length
    len: usize,
  },
}

impl fmt::Display for WindowError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      WindowError::IndexOutOfRange { index, len } => {
        write!(f, "token position {} outside sentence of length {}", index, len)
      },
    }
  }
}

impl Error for WindowError {}

/// Extracts the feature strings of the window centered at token `index`.
///
/// The six patterns are applied to the surface channel first and the tag
/// channel second, in pattern order within each channel. Slots that fall
/// outside the sentence stay empty and are skipped when joining; a pattern
/// whose selected slots are all empty contributes nothing, so the result
/// holds between 0 and 12 strings.
pub fn extract(sentence: &AnnotatedSentence, index: usize) -> Result<Vec<String>, WindowError> {
  let len = sentence.len();
  if index >= len {
    return Err(WindowError::IndexOutOfRange { index, len });
  }
  let mut texts: [&str; 5] = [""; 5];
  let mut tags: [&str; 5] = [""; 5];
  for slot in 0..5 {
    let position = index + slot;
    if position < 2 || position - 2 >= len {
      continue;
    }
    let token = &sentence.tokens[position - 2];
    texts[slot] = &token.text;
    tags[slot] = token.tag.to_str();
  }

  let mut features = Vec::with_capacity(2 * WINDOW_PATTERNS.len());
  for channel in &[texts, tags] {
    for pattern in &WINDOW_PATTERNS {
      if let Some(feature) = join_present(channel, pattern) {
        features.push(feature);
      }
    }
  }
  Ok(features)
}

/// Joins the non-empty slots a pattern selects with single spaces,
/// `None` when nothing is left
fn join_present(slots: &[&str; 5], pattern: &[usize]) -> Option<String> {
  let present: Vec<&str> = pattern
    .iter()
    .map(|slot| slots[*slot])
    .filter(|content| !content.is_empty())
    .collect();
  let joined = present.join(" ");
  let feature = joined.trim();
  if feature.is_empty() {
    None
  } else {
    Some(feature.to_string())
  }
}
