//! Provides word and punctuation tokenization for raw sentence strings
use std::collections::HashSet;

/// Splits sentences into surface tokens: alphanumeric runs, standalone
/// punctuation marks, and apostrophe contractions from a closed suffix set.
pub struct Tokenizer {
  /// apostrophe suffixes which stay attached to their apostrophe, forming a
  /// contraction token such as `'t` or `'ll`; all other apostrophes detach
  /// as standalone punctuation
  pub contraction_suffixes: HashSet<&'static str>,
}

impl Default for Tokenizer {
  fn default() -> Tokenizer {
    Tokenizer {
      contraction_suffixes: ["t", "s", "un", "th", "ll", "d", "ve", "il", "re", "m"]
        .iter()
        .cloned()
        .collect(),
    }
  }
}

impl Tokenizer {
  /// Returns the words and punctuation of a sentence as slices of the input,
  /// in order of appearance. Whitespace is skipped over; every other
  /// non-alphanumeric character completes the word being accumulated.
  #[allow(unused_assignments)]
  pub fn words_and_punct<'a>(&self, text: &'a str) -> Vec<&'a str> {
    let mut start = 0usize;
    let mut end = 0usize;
    let mut result: Vec<&'a str> = Vec::new();
    let mut apostrophe_len = 0usize;
    macro_rules! complete_word {
      () => {
        if start < end {
          if apostrophe_len > 0 {
            match &text[start + apostrophe_len..end] {
              // Handle closed set of apostrophe cases, detach from all other cases
              suffix if self.contraction_suffixes.contains(suffix) => {},
              _ => {
                result.push(&text[start..start + apostrophe_len]);
                start += apostrophe_len;
              },
            }
          }
          if start < end {
            result.push(&text[start..end]);
          }
          apostrophe_len = 0;
          start = end;
        }
      };
    }

    for c in text.chars() {
      // letters, numbers can accumulate
      if c.is_alphanumeric() {
        end += c.len_utf8();
      } else {
        // everything else completes a word and starts a new one
        complete_word!();
        // except that whitespace can be skipped over
        if c.is_whitespace() {
          end += c.len_utf8();
          start = end;
        }
        // non-alphanum chars are standalone words EXCEPT when connectors such as apostrophes
        else {
          end += c.len_utf8();
          if c == '\'' || c == '’' {
            apostrophe_len = c.len_utf8();
          } else {
            // standalone char word case
            complete_word!();
          }
        }
      }
    }
    complete_word!();
    result
  }
}
