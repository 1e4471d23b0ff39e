//! The annotation capability: tokenized sentences with part-of-speech tags.
//! Pipelines depend only on the `Annotator` trait; the bundled
//! `LexiconAnnotator` covers everyday English with a closed-class lexicon
//! and suffix heuristics, and can be swapped for any heavier engine.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;
use unidecode::unidecode;
use whatlang::{detect, Lang, Script};

use crate::pos::{Coarse, Pos};
use crate::tokenizer::Tokenizer;

/// A single linguistic unit: surface form plus its tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
  /// the surface text, original casing preserved
  pub text: String,
  /// fine-grained part-of-speech tag
  pub tag: Pos,
  /// coarse category; usually `tag.coarse()`, but annotators may override
  /// it, e.g. for auxiliary uses of verb forms
  pub coarse: Coarse,
}

/// An ordered, position-indexable sequence of annotated tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSentence {
  /// the tokens, in sentence order
  pub tokens: Vec<AnnotatedToken>,
}

impl AnnotatedSentence {
  /// number of tokens in the sentence
  pub fn len(&self) -> usize { self.tokens.len() }

  /// `true` if the sentence holds no tokens
  pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

  /// Builds a sentence from `(text, tag)` pairs, deriving each coarse
  /// category from the tag. Convenient for fixed sequences in tests and
  /// annotator doubles.
  pub fn from_tagged(tagged: &[(&str, Pos)]) -> AnnotatedSentence {
    AnnotatedSentence {
      tokens: tagged
        .iter()
        .map(|(text, tag)| AnnotatedToken {
          text: (*text).to_string(),
          tag: *tag,
          coarse: tag.coarse(),
        })
        .collect(),
    }
  }
}

/// Reasons a sentence can fail annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
  /// the sentence contained no tokenizable content
  EmptySentence,
  /// the text does not look like Latin-script English; carries the name of
  /// the detected language
  ForeignText(&'static str),
}

impl fmt::Display for AnnotationError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      AnnotationError::EmptySentence => write!(f, "no tokenizable content"),
      AnnotationError::ForeignText(language) => write!(
        f,
        "text does not look like Latin-script English (detected {})",
        language
      ),
    }
  }
}

impl Error for AnnotationError {}

/// Turns raw sentence text into an `AnnotatedSentence`. Scans and pipelines
/// receive an implementation as an explicit parameter, so tests can
/// substitute one that returns fixed token/tag sequences.
pub trait Annotator {
  /// Annotate a single sentence
  fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError>;
}

/// Settings for the `LexiconAnnotator`
pub struct AnnotationSettings {
  /// replace unicode characters by their ascii transliteration before
  /// tokenizing, so curly apostrophes and accented spellings reach the
  /// ascii lexicon
  pub normalize_unicode: bool,
  /// reject sentences whose detected script or language is not
  /// Latin-script English
  pub require_latin: bool,
}

impl Default for AnnotationSettings {
  fn default() -> AnnotationSettings {
    AnnotationSettings {
      normalize_unicode: true,
      require_latin: true,
    }
  }
}

impl AnnotationSettings {
  /// warn about option combinations which degrade tagging quality
  pub fn check(&self) {
    if !self.normalize_unicode {
      eprintln!(
        "prepfex::annotation: Parameter option normalize_unicode is disabled, curly \
         apostrophes and accented spellings will not reach the ascii lexicon"
      );
    }
  }
}

/// A self-contained annotator driven by a closed-class lexicon, a numeral
/// pattern and suffix heuristics
pub struct LexiconAnnotator {
  tokenizer: Tokenizer,
  settings: AnnotationSettings,
}

impl Default for LexiconAnnotator {
  fn default() -> LexiconAnnotator { LexiconAnnotator::new(AnnotationSettings::default()) }
}

impl LexiconAnnotator {
  /// construct a new `LexiconAnnotator` with some settings
  pub fn new(settings: AnnotationSettings) -> LexiconAnnotator {
    settings.check();
    LexiconAnnotator {
      tokenizer: Tokenizer::default(),
      settings,
    }
  }
}

impl Annotator for LexiconAnnotator {
  fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError> {
    if self.settings.require_latin {
      if let Some(language) = foreign_language(text) {
        return Err(AnnotationError::ForeignText(language));
      }
    }
    let folded;
    let prepared = if self.settings.normalize_unicode {
      folded = unidecode(text);
      folded.as_str()
    } else {
      text
    };
    let words = self.tokenizer.words_and_punct(prepared);
    if words.is_empty() {
      return Err(AnnotationError::EmptySentence);
    }
    let mut tokens = Vec::with_capacity(words.len());
    for (position, word) in words.iter().enumerate() {
      let lower = word.to_lowercase();
      let tag = tag_word(word, &lower, position);
      let coarse = if AUX_WORDS.contains(lower.as_str()) {
        Coarse::Aux
      } else {
        tag.coarse()
      };
      tokens.push(AnnotatedToken {
        text: (*word).to_string(),
        tag,
        coarse,
      });
    }
    Ok(AnnotatedSentence { tokens })
  }
}

lazy_static! {
  // Integers, floats, subfigure numbers
  static ref IS_NUMERIC: Regex =
    Regex::new(r"^-?(?:\d+)(?:[a-k]|(?:\.\d+(?:[eE][+-]?\d+)?))?$").unwrap();

  /// tags for closed-class words, frequent irregular verb forms and the
  /// contraction tokens the tokenizer produces
  static ref TAG_LEXICON: HashMap<&'static str, Pos> = [
    // determiners and quantifiers
    ("the", Pos::DT), ("a", Pos::DT), ("an", Pos::DT), ("this", Pos::DT), ("that", Pos::DT),
    ("these", Pos::DT), ("those", Pos::DT), ("some", Pos::DT), ("any", Pos::DT), ("no", Pos::DT),
    ("every", Pos::DT), ("each", Pos::DT), ("either", Pos::DT), ("neither", Pos::DT),
    ("all", Pos::PDT), ("both", Pos::PDT), ("half", Pos::PDT),
    // prepositions and subordinators
    ("in", Pos::IN), ("on", Pos::IN), ("at", Pos::IN), ("by", Pos::IN), ("of", Pos::IN),
    ("for", Pos::IN), ("with", Pos::IN), ("from", Pos::IN), ("into", Pos::IN), ("onto", Pos::IN),
    ("over", Pos::IN), ("under", Pos::IN), ("about", Pos::IN), ("after", Pos::IN),
    ("before", Pos::IN), ("between", Pos::IN), ("through", Pos::IN), ("during", Pos::IN),
    ("against", Pos::IN), ("among", Pos::IN), ("around", Pos::IN), ("behind", Pos::IN),
    ("below", Pos::IN), ("beneath", Pos::IN), ("beside", Pos::IN), ("near", Pos::IN),
    ("off", Pos::IN), ("since", Pos::IN), ("until", Pos::IN), ("upon", Pos::IN),
    ("within", Pos::IN), ("without", Pos::IN), ("toward", Pos::IN), ("towards", Pos::IN),
    ("despite", Pos::IN), ("than", Pos::IN), ("because", Pos::IN), ("while", Pos::IN),
    ("although", Pos::IN), ("though", Pos::IN), ("if", Pos::IN), ("whether", Pos::IN),
    ("as", Pos::IN), ("like", Pos::IN), ("per", Pos::IN), ("via", Pos::IN),
    ("amid", Pos::IN), ("along", Pos::IN), ("across", Pos::IN),
    ("to", Pos::TO),
    // pronouns and wh-words
    ("i", Pos::PRP), ("you", Pos::PRP), ("he", Pos::PRP), ("she", Pos::PRP), ("it", Pos::PRP),
    ("we", Pos::PRP), ("they", Pos::PRP), ("me", Pos::PRP), ("him", Pos::PRP), ("her", Pos::PRP),
    ("us", Pos::PRP), ("them", Pos::PRP), ("myself", Pos::PRP), ("yourself", Pos::PRP),
    ("himself", Pos::PRP), ("herself", Pos::PRP), ("itself", Pos::PRP),
    ("ourselves", Pos::PRP), ("themselves", Pos::PRP),
    ("my", Pos::PRPS), ("your", Pos::PRPS), ("his", Pos::PRPS), ("its", Pos::PRPS),
    ("our", Pos::PRPS), ("their", Pos::PRPS),
    ("there", Pos::EX),
    ("which", Pos::WDT), ("who", Pos::WP), ("whom", Pos::WP), ("what", Pos::WP),
    ("whose", Pos::WPS), ("when", Pos::WRB), ("where", Pos::WRB), ("why", Pos::WRB),
    ("how", Pos::WRB),
    // conjunctions and modals
    ("and", Pos::CC), ("or", Pos::CC), ("but", Pos::CC), ("nor", Pos::CC),
    ("can", Pos::MD), ("could", Pos::MD), ("may", Pos::MD), ("might", Pos::MD),
    ("must", Pos::MD), ("shall", Pos::MD), ("should", Pos::MD), ("will", Pos::MD),
    ("would", Pos::MD),
    // be, have and do
    ("be", Pos::VB), ("am", Pos::VBP), ("is", Pos::VBZ), ("are", Pos::VBP), ("was", Pos::VBD),
    ("were", Pos::VBD), ("been", Pos::VBN), ("being", Pos::VBG),
    ("have", Pos::VBP), ("has", Pos::VBZ), ("had", Pos::VBD), ("having", Pos::VBG),
    ("do", Pos::VBP), ("does", Pos::VBZ), ("did", Pos::VBD), ("done", Pos::VBN),
    ("doing", Pos::VBG),
    // frequent irregular pasts
    ("went", Pos::VBD), ("sat", Pos::VBD), ("ran", Pos::VBD), ("saw", Pos::VBD),
    ("came", Pos::VBD), ("got", Pos::VBD), ("took", Pos::VBD), ("made", Pos::VBD),
    ("said", Pos::VBD), ("found", Pos::VBD), ("gave", Pos::VBD), ("told", Pos::VBD),
    ("left", Pos::VBD), ("put", Pos::VBD), ("kept", Pos::VBD), ("stood", Pos::VBD),
    ("sent", Pos::VBD), ("built", Pos::VBD), ("held", Pos::VBD), ("brought", Pos::VBD),
    ("thought", Pos::VBD), ("bought", Pos::VBD), ("caught", Pos::VBD), ("taught", Pos::VBD),
    ("felt", Pos::VBD), ("knew", Pos::VBD), ("grew", Pos::VBD), ("threw", Pos::VBD),
    ("flew", Pos::VBD), ("wrote", Pos::VBD), ("drove", Pos::VBD), ("rode", Pos::VBD),
    ("rose", Pos::VBD), ("chose", Pos::VBD), ("spoke", Pos::VBD), ("broke", Pos::VBD),
    ("woke", Pos::VBD), ("ate", Pos::VBD), ("fell", Pos::VBD), ("met", Pos::VBD),
    ("led", Pos::VBD), ("lost", Pos::VBD), ("paid", Pos::VBD), ("heard", Pos::VBD),
    ("began", Pos::VBD), ("sang", Pos::VBD), ("drank", Pos::VBD), ("swam", Pos::VBD),
    ("won", Pos::VBD), ("sold", Pos::VBD), ("slept", Pos::VBD), ("wore", Pos::VBD),
    // frequent base and present forms
    ("go", Pos::VB), ("run", Pos::VB), ("see", Pos::VB), ("get", Pos::VB),
    ("make", Pos::VB), ("know", Pos::VB), ("think", Pos::VB), ("take", Pos::VB),
    ("come", Pos::VB), ("give", Pos::VB), ("look", Pos::VB), ("use", Pos::VB),
    ("find", Pos::VB), ("tell", Pos::VB), ("ask", Pos::VB), ("seem", Pos::VB),
    ("feel", Pos::VB), ("try", Pos::VB), ("leave", Pos::VB), ("call", Pos::VB),
    ("keep", Pos::VB), ("let", Pos::VB), ("begin", Pos::VB), ("help", Pos::VB),
    ("talk", Pos::VB), ("turn", Pos::VB), ("start", Pos::VB), ("show", Pos::VB),
    ("hear", Pos::VB), ("play", Pos::VB), ("move", Pos::VB), ("live", Pos::VB),
    ("believe", Pos::VB), ("bring", Pos::VB), ("happen", Pos::VB), ("write", Pos::VB),
    ("sit", Pos::VB), ("stand", Pos::VB), ("lose", Pos::VB), ("pay", Pos::VB),
    ("meet", Pos::VB), ("learn", Pos::VB), ("lead", Pos::VB), ("understand", Pos::VB),
    ("watch", Pos::VB), ("follow", Pos::VB), ("stop", Pos::VB), ("create", Pos::VB),
    ("speak", Pos::VB), ("spend", Pos::VB), ("open", Pos::VB), ("walk", Pos::VB),
    ("win", Pos::VB), ("offer", Pos::VB), ("remember", Pos::VB), ("buy", Pos::VB),
    ("wait", Pos::VB), ("send", Pos::VB), ("build", Pos::VB), ("stay", Pos::VB),
    ("fall", Pos::VB), ("cut", Pos::VB), ("reach", Pos::VB), ("remain", Pos::VB),
    ("want", Pos::VBP), ("need", Pos::VBP),
    // adverbs, interjections
    ("not", Pos::RB), ("very", Pos::RB), ("too", Pos::RB), ("also", Pos::RB),
    ("just", Pos::RB), ("never", Pos::RB), ("always", Pos::RB), ("often", Pos::RB),
    ("here", Pos::RB), ("now", Pos::RB), ("then", Pos::RB), ("again", Pos::RB),
    ("still", Pos::RB), ("only", Pos::RB), ("quite", Pos::RB), ("rather", Pos::RB),
    ("soon", Pos::RB),
    ("yes", Pos::UH), ("oh", Pos::UH), ("hello", Pos::UH), ("hey", Pos::UH),
    ("please", Pos::UH),
    // contraction tokens produced by the tokenizer
    ("'t", Pos::RB), ("'s", Pos::POS), ("'ll", Pos::MD), ("'ve", Pos::VBP),
    ("'re", Pos::VBP), ("'d", Pos::MD), ("'m", Pos::VBP),
  ]
  .iter()
  .cloned()
  .collect();

  /// verb forms which act as auxiliaries rather than main verbs; their
  /// coarse category is `Aux`, so an infinitive reading is never assumed
  /// after "to"
  static ref AUX_WORDS: HashSet<&'static str> = [
    "be", "am", "is", "are", "was", "were", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "done", "doing",
    "'m", "'re", "'ve",
  ]
  .iter()
  .cloned()
  .collect();
}

/// Tags one token given its surface form, lowercase form and sentence
/// position. Falls through lexicon, numeral, capitalization and suffix
/// evidence, defaulting to a common noun.
fn tag_word(word: &str, lower: &str, position: usize) -> Pos {
  if let Some(tag) = punctuation_tag(word) {
    return tag;
  }
  if let Some(tag) = TAG_LEXICON.get(lower) {
    return *tag;
  }
  if IS_NUMERIC.is_match(lower) {
    return Pos::CD;
  }
  let capitalized = word.chars().next().map_or(false, char::is_uppercase);
  if capitalized && position > 0 {
    return Pos::NNP;
  }
  suffix_tag(lower)
}

fn punctuation_tag(word: &str) -> Option<Pos> {
  if word.chars().any(char::is_alphanumeric) {
    return None;
  }
  let tag = match word {
    "." | "!" | "?" => Pos::SentFinal,
    "," => Pos::Comma,
    ":" | ";" | "-" | "--" => Pos::Colon,
    "(" | "[" | "{" => Pos::Lrb,
    ")" | "]" | "}" => Pos::Rrb,
    "\"" | "'" | "`" | "``" | "''" => Pos::Quote,
    _ => Pos::SYM,
  };
  Some(tag)
}

fn suffix_tag(lower: &str) -> Pos {
  if lower.len() > 4 && lower.ends_with("ing") {
    Pos::VBG
  } else if lower.len() > 3 && lower.ends_with("ed") {
    Pos::VBD
  } else if lower.len() > 3 && lower.ends_with("ly") {
    Pos::RB
  } else if lower.len() > 4 && lower.ends_with("est") {
    Pos::JJS
  } else if lower.ends_with("ous")
    || lower.ends_with("ful")
    || lower.ends_with("ive")
    || lower.ends_with("able")
    || lower.ends_with("ible")
  {
    Pos::JJ
  } else if lower.ends_with("tion")
    || lower.ends_with("ment")
    || lower.ends_with("ness")
    || lower.ends_with("ity")
  {
    Pos::NN
  } else if lower.len() > 2
    && lower.ends_with('s')
    && !lower.ends_with("ss")
    && !lower.ends_with("us")
    && !lower.ends_with("is")
  {
    Pos::NNS
  } else {
    Pos::NN
  }
}

/// Check whether the given text fails the Latin-script English requirement,
/// returning the name of the detected language when it does
fn foreign_language(text: &str) -> Option<&'static str> {
  if let Some(info) = detect(text.trim()) {
    if info.script() != Script::Latin || (info.lang() != Lang::Eng && info.confidence() > 0.93) {
      return Some(info.lang().eng_name());
    }
  }
  None
}
