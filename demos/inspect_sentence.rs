use prepfex::annotation::{Annotator, LexiconAnnotator};
use prepfex::features;
use prepfex::scan;
use prepfex::triggers;
use prepfex::triggers::TriggerSet;
use std::env;
use std::error::Error;

/// Annotate a single sentence and display every trigger preposition with
/// the feature strings of its window
pub fn main() -> Result<(), Box<dyn Error>> {
  let mut input_args = env::args();
  let _ = input_args.next(); // skip process name
  let sentence_text = match input_args.next() {
    Some(text) => text,
    None => "The quick brown fox jumps over the lazy dog.".to_string(),
  };
  let triggers = match input_args.next() {
    Some(path) => TriggerSet::load(&path)?,
    None => TriggerSet::from_words(&triggers::DEFAULT_PREPOSITIONS),
  };

  let annotator = LexiconAnnotator::default();
  let sentence = annotator.annotate(&sentence_text)?;

  println!("-- tokens:");
  for (index, token) in sentence.tokens.iter().enumerate() {
    println!(
      "{:>3}  {:<16} {:<5} {}",
      index,
      token.text,
      token.tag.to_str(),
      token.coarse
    );
  }

  let mut occurrence_count = 0;
  for index in 0..sentence.len() {
    if !scan::is_occurrence(&sentence, index, &triggers) {
      continue;
    }
    occurrence_count += 1;
    println!("---");
    println!("\"{}\" (position {}):", sentence.tokens[index].text, index);
    for feature in features::extract(&sentence, index)? {
      println!("  {}", feature);
    }
  }
  if occurrence_count == 0 {
    println!("No trigger prepositions identified.");
  }
  Ok(())
}
