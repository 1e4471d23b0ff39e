//! Tests for the surface tokenizer

use prepfex::tokenizer::Tokenizer;

#[test]
fn can_tokenize_words_and_punct() {
  let tokenizer = Tokenizer::default();
  let tokens = tokenizer.words_and_punct("Deciphering isn't easy, is it?");
  assert_eq!(
    tokens,
    vec!["Deciphering", "isn", "'t", "easy", ",", "is", "it", "?"]
  );
}

#[test]
fn can_keep_contraction_suffixes_attached() {
  let tokenizer = Tokenizer::default();
  assert_eq!(
    tokenizer.words_and_punct("they'll we've I'm you're he'd"),
    vec!["they", "'ll", "we", "'ve", "I", "'m", "you", "'re", "he", "'d"]
  );
}

#[test]
fn can_detach_apostrophes_outside_the_suffix_set() {
  let tokenizer = Tokenizer::default();
  assert_eq!(
    tokenizer.words_and_punct("the foxes' den"),
    vec!["the", "foxes", "'", "den"]
  );
}

#[test]
fn can_handle_curly_apostrophes() {
  let tokenizer = Tokenizer::default();
  assert_eq!(
    tokenizer.words_and_punct("don’t stop"),
    vec!["don", "’t", "stop"]
  );
}

#[test]
fn can_split_punctuation_runs_into_standalone_tokens() {
  let tokenizer = Tokenizer::default();
  assert_eq!(
    tokenizer.words_and_punct("Wait... (really?!)"),
    vec!["Wait", ".", ".", ".", "(", "really", "?", "!", ")"]
  );
}

#[test]
fn can_tokenize_numbers_and_hyphens() {
  let tokenizer = Tokenizer::default();
  assert_eq!(
    tokenizer.words_and_punct("a well-known 3.14 approximation"),
    vec!["a", "well", "-", "known", "3", ".", "14", "approximation"]
  );
}

#[test]
fn can_return_nothing_for_blank_input() {
  let tokenizer = Tokenizer::default();
  assert!(tokenizer.words_and_punct("").is_empty());
  assert!(tokenizer.words_and_punct("   \t  ").is_empty());
}
