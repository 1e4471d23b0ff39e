//! The sequential corpus runner: a CSV sentence file in, a JSON Lines
//! record file out, plus a catalog of run statistics.

use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};

use crate::annotation::Annotator;
use crate::features::WindowError;
use crate::scan;
use crate::scan::FeatureRecord;
use crate::triggers::TriggerSet;

static BUFFER_CAPACITY: usize = 10_485_760;

/// One row of the sentence file
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceRecord {
  /// corpus-assigned sentence id
  #[serde(rename = "Id")]
  pub id: String,
  /// the raw sentence text
  #[serde(rename = "Sentence")]
  pub text: String,
}

/// Anything that can interrupt a corpus run
#[derive(Debug)]
pub enum PipelineError {
  /// reading or writing one of the involved files failed
  Io(io::Error),
  /// the sentence file could not be parsed as CSV
  Csv(csv::Error),
  /// a record could not be serialized to JSON
  Json(serde_json::Error),
  /// a feature window was requested at an impossible position
  Window(WindowError),
}

impl fmt::Display for PipelineError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      PipelineError::Io(e) => write!(f, "i/o failure: {}", e),
      PipelineError::Csv(e) => write!(f, "sentence file failure: {}", e),
      PipelineError::Json(e) => write!(f, "record serialization failure: {}", e),
      PipelineError::Window(e) => write!(f, "window failure: {}", e),
    }
  }
}

impl Error for PipelineError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      PipelineError::Io(e) => Some(e),
      PipelineError::Csv(e) => Some(e),
      PipelineError::Json(e) => Some(e),
      PipelineError::Window(e) => Some(e),
    }
  }
}

impl From<io::Error> for PipelineError {
  fn from(error: io::Error) -> PipelineError { PipelineError::Io(error) }
}

impl From<csv::Error> for PipelineError {
  fn from(error: csv::Error) -> PipelineError { PipelineError::Csv(error) }
}

impl From<serde_json::Error> for PipelineError {
  fn from(error: serde_json::Error) -> PipelineError { PipelineError::Json(error) }
}

impl From<WindowError> for PipelineError {
  fn from(error: WindowError) -> PipelineError { PipelineError::Window(error) }
}

/// Reads the sentence file into memory, preserving file order
pub fn read_sentences(filepath: &str) -> Result<Vec<SentenceRecord>, PipelineError> {
  let file = File::open(filepath)?;
  let mut reader = csv::Reader::from_reader(BufReader::new(file));
  let mut sentences = Vec::new();
  for result in reader.deserialize() {
    let record: SentenceRecord = result?;
    sentences.push(record);
  }
  Ok(sentences)
}

/// Serializes one record onto the writer as a JSON line
pub fn write_record<W: Write>(writer: &mut W, record: &FeatureRecord) -> Result<(), PipelineError> {
  let line = serde_json::to_string(record)?;
  writer.write_all(line.as_bytes())?;
  writer.write_all(b"\n")?;
  Ok(())
}

/// Runs the full extraction sequentially. Sentences that fail annotation
/// are reported and skipped; everything else flows through the trigger scan
/// into the output file, one JSON record per line, in sentence order.
///
/// The returned catalog reports `sentence_count`, `skipped_sentence_count`
/// and `record_count`.
pub fn extract_corpus(
  annotator: &dyn Annotator,
  triggers_filepath: &str,
  sentences_filepath: &str,
  output_filepath: &str,
) -> Result<HashMap<String, u64>, PipelineError> {
  let triggers = TriggerSet::load(triggers_filepath)?;
  let sentences = read_sentences(sentences_filepath)?;
  let output_file = File::create(output_filepath)?;
  let mut record_writer = BufWriter::with_capacity(BUFFER_CAPACITY, output_file);

  let (mut sentence_count, mut skipped_sentence_count, mut record_count) = (0u64, 0u64, 0u64);
  for sentence in &sentences {
    sentence_count += 1;
    if sentence_count % 10_000 == 0 {
      println!("-- processed {} sentences", sentence_count);
    }
    let annotated = match annotator.annotate(&sentence.text) {
      Ok(annotated) => annotated,
      Err(reason) => {
        eprintln!("-- skipping sentence {}: {}", sentence.id, reason);
        skipped_sentence_count += 1;
        continue;
      },
    };
    for record in scan::scan_sentence(&annotated, &sentence.id, &triggers)? {
      write_record(&mut record_writer, &record)?;
      record_count += 1;
    }
  }
  record_writer.flush()?;

  let mut catalog = HashMap::new();
  catalog.insert(String::from("sentence_count"), sentence_count);
  catalog.insert(String::from("skipped_sentence_count"), skipped_sentence_count);
  catalog.insert(String::from("record_count"), record_count);
  Ok(catalog)
}
