//! Trigger inventories: the prepositions whose occurrences open feature
//! windows. Inventories live in plain text files, one word per line, and
//! are matched case-insensitively.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// the prepositions covered by stock extraction runs
pub const DEFAULT_PREPOSITIONS: [&str; 8] = ["on", "for", "of", "to", "at", "in", "with", "by"];

/// A case-insensitive set of trigger words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
  words: HashSet<String>,
}

impl TriggerSet {
  /// Loads a trigger set from a one-word-per-line text file. Leading and
  /// trailing whitespace is dropped, blank lines are skipped and words are
  /// folded to lowercase.
  pub fn load(filepath: &str) -> io::Result<TriggerSet> {
    let file = File::open(filepath)?;
    let reader = BufReader::new(file);
    let mut words = HashSet::new();
    for line in reader.lines() {
      let line = line?;
      let word = line.trim();
      if word.is_empty() {
        continue;
      }
      words.insert(word.to_lowercase());
    }
    Ok(TriggerSet { words })
  }

  /// Builds a trigger set from an in-memory word list
  pub fn from_words(words: &[&str]) -> TriggerSet {
    TriggerSet {
      words: words.iter().map(|word| word.to_lowercase()).collect(),
    }
  }

  /// membership test on the lowercased form of a token
  pub fn contains(&self, word: &str) -> bool { self.words.contains(&word.to_lowercase()) }

  /// number of distinct trigger words
  pub fn len(&self) -> usize { self.words.len() }

  /// `true` when the inventory holds no words
  pub fn is_empty(&self) -> bool { self.words.is_empty() }

  /// Writes the default preposition inventory to a file, one word per line
  pub fn seed(filepath: &str) -> io::Result<()> {
    let file = File::create(filepath)?;
    let mut writer = BufWriter::new(file);
    for word in &DEFAULT_PREPOSITIONS {
      writeln!(writer, "{}", word)?;
    }
    writer.flush()
  }

  /// Appends trigger words to an existing inventory file, skipping any that
  /// are already present. Returns how many words were actually added.
  pub fn append(filepath: &str, additions: &[&str]) -> io::Result<usize> {
    let mut inventory = TriggerSet::load(filepath)?;
    // a final line missing its "\n" would fuse with the first appended word
    let mut unterminated = match fs::read(filepath)?.last() {
      Some(byte) => *byte != b'\n',
      None => false,
    };
    let mut file = OpenOptions::new().append(true).open(filepath)?;
    let mut added = 0;
    for word in additions {
      let word = word.trim().to_lowercase();
      if word.is_empty() || !inventory.words.insert(word.clone()) {
        continue;
      }
      if unterminated {
        writeln!(file)?;
        unterminated = false;
      }
      writeln!(file, "{}", word)?;
      added += 1;
    }
    Ok(added)
  }
}
