use prepfex::annotation::LexiconAnnotator;
use prepfex::parallel;
use prepfex::pipeline;
use std::env;
use std::error::Error;
use std::time::Instant;

/// Given a trigger inventory and a CSV sentence file, extract the window
/// features around every preposition occurrence into a JSON Lines file
pub fn main() -> Result<(), Box<dyn Error>> {
  let start = Instant::now();
  // Read input arguments
  let mut input_args = env::args();
  let _ = input_args.next(); // skip process name
  let triggers_filepath = match input_args.next() {
    Some(path) => path,
    None => "prepositions.txt".to_string(),
  };
  let sentences_filepath = match input_args.next() {
    Some(path) => path,
    None => "sentences.csv".to_string(),
  };
  let output_filepath = match input_args.next() {
    Some(path) => path,
    None => "output.jsonl".to_string(),
  };
  let parallel_run = match input_args.next() {
    Some(value) => match value.as_str() {
      "parallel" => true, // should eventually become a --parallel flag
      _ => false,
    },
    None => false,
  };

  let annotator = LexiconAnnotator::default();
  let catalog = if parallel_run {
    parallel::extract_corpus(
      &annotator,
      &triggers_filepath,
      &sentences_filepath,
      &output_filepath,
    )?
  } else {
    pipeline::extract_corpus(
      &annotator,
      &triggers_filepath,
      &sentences_filepath,
      &output_filepath,
    )?
  };

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Feature extraction finished in {:?}s, gathered: ", duration_sec);
  println!(
    "{:?} sentences;",
    catalog.get("sentence_count").unwrap_or(&0)
  );
  println!(
    "{:?} skipped sentences;",
    catalog.get("skipped_sentence_count").unwrap_or(&0)
  );
  println!(
    "{:?} occurrence records, written to {}",
    catalog.get("record_count").unwrap_or(&0),
    output_filepath
  );
  Ok(())
}
