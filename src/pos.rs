//! Part-of-speech tag sets shared by annotators and the feature extractor:
//! fine-grained Penn Treebank tags for the feature channel, and the coarse
//! categories the occurrence scan needs to recognize verbs.

use std::fmt;

/// Fine-grained part-of-speech tags, following the Penn Treebank conventions
/// used by the common English taggers. `PRPS` and `WPS` stand in for the
/// possessive tags conventionally written `PRP$` and `WP$`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pos {
  CC,
  CD,
  DT,
  EX,
  FW,
  IN,
  JJ,
  JJR,
  JJS,
  LS,
  MD,
  NN,
  NNS,
  NNP,
  NNPS,
  PDT,
  POS,
  PRP,
  PRPS,
  RB,
  RBR,
  RBS,
  RP,
  SYM,
  TO,
  UH,
  VB,
  VBD,
  VBG,
  VBN,
  VBP,
  VBZ,
  WDT,
  WP,
  WPS,
  WRB,
  /// sentence-final punctuation (`.` `!` `?`)
  SentFinal,
  /// the comma tag
  Comma,
  /// colons, semicolons and dashes
  Colon,
  /// opening brackets
  Lrb,
  /// closing brackets
  Rrb,
  /// quotation marks
  Quote,
  /// tokens no annotator has classified yet
  NotSet,
}

/// Coarse part-of-speech categories, in the style of the universal tag sets.
/// The occurrence scan only ever inspects `Verb`, but annotators fill in the
/// full picture so that downstream consumers can filter on it.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coarse {
  Adj,
  Adp,
  Adv,
  Aux,
  CConj,
  Det,
  Intj,
  Noun,
  Num,
  Part,
  Pron,
  Propn,
  Punct,
  Sym,
  Verb,
  X,
}

impl Pos {
  /// The conventional string form of the tag, as it appears in tag-channel
  /// feature strings. `NotSet` renders empty and therefore contributes
  /// nothing to a feature window.
  pub fn to_str(self) -> &'static str {
    match self {
      Pos::CC => "CC",
      Pos::CD => "CD",
      Pos::DT => "DT",
      Pos::EX => "EX",
      Pos::FW => "FW",
      Pos::IN => "IN",
      Pos::JJ => "JJ",
      Pos::JJR => "JJR",
      Pos::JJS => "JJS",
      Pos::LS => "LS",
      Pos::MD => "MD",
      Pos::NN => "NN",
      Pos::NNS => "NNS",
      Pos::NNP => "NNP",
      Pos::NNPS => "NNPS",
      Pos::PDT => "PDT",
      Pos::POS => "POS",
      Pos::PRP => "PRP",
      Pos::PRPS => "PRP$",
      Pos::RB => "RB",
      Pos::RBR => "RBR",
      Pos::RBS => "RBS",
      Pos::RP => "RP",
      Pos::SYM => "SYM",
      Pos::TO => "TO",
      Pos::UH => "UH",
      Pos::VB => "VB",
      Pos::VBD => "VBD",
      Pos::VBG => "VBG",
      Pos::VBN => "VBN",
      Pos::VBP => "VBP",
      Pos::VBZ => "VBZ",
      Pos::WDT => "WDT",
      Pos::WP => "WP",
      Pos::WPS => "WP$",
      Pos::WRB => "WRB",
      Pos::SentFinal => ".",
      Pos::Comma => ",",
      Pos::Colon => ":",
      Pos::Lrb => "-LRB-",
      Pos::Rrb => "-RRB-",
      Pos::Quote => "''",
      Pos::NotSet => "",
    }
  }

  /// The tag named by its conventional string form, `None` for strings
  /// outside the tag set. Inverse of `to_str`, with the empty string
  /// naming `NotSet`.
  pub fn from_str(tag: &str) -> Option<Pos> {
    let pos = match tag {
      "CC" => Pos::CC,
      "CD" => Pos::CD,
      "DT" => Pos::DT,
      "EX" => Pos::EX,
      "FW" => Pos::FW,
      "IN" => Pos::IN,
      "JJ" => Pos::JJ,
      "JJR" => Pos::JJR,
      "JJS" => Pos::JJS,
      "LS" => Pos::LS,
      "MD" => Pos::MD,
      "NN" => Pos::NN,
      "NNS" => Pos::NNS,
      "NNP" => Pos::NNP,
      "NNPS" => Pos::NNPS,
      "PDT" => Pos::PDT,
      "POS" => Pos::POS,
      "PRP" => Pos::PRP,
      "PRP$" => Pos::PRPS,
      "RB" => Pos::RB,
      "RBR" => Pos::RBR,
      "RBS" => Pos::RBS,
      "RP" => Pos::RP,
      "SYM" => Pos::SYM,
      "TO" => Pos::TO,
      "UH" => Pos::UH,
      "VB" => Pos::VB,
      "VBD" => Pos::VBD,
      "VBG" => Pos::VBG,
      "VBN" => Pos::VBN,
      "VBP" => Pos::VBP,
      "VBZ" => Pos::VBZ,
      "WDT" => Pos::WDT,
      "WP" => Pos::WP,
      "WP$" => Pos::WPS,
      "WRB" => Pos::WRB,
      "." => Pos::SentFinal,
      "," => Pos::Comma,
      ":" => Pos::Colon,
      "-LRB-" => Pos::Lrb,
      "-RRB-" => Pos::Rrb,
      "''" => Pos::Quote,
      "" => Pos::NotSet,
      _ => return None,
    };
    Some(pos)
  }

  /// The coarse category a tag maps to when nothing else is known about the
  /// token. Annotators can override this per token, e.g. to mark auxiliary
  /// uses of verb forms.
  pub fn coarse(self) -> Coarse {
    match self {
      Pos::CC => Coarse::CConj,
      Pos::CD => Coarse::Num,
      Pos::DT | Pos::PDT | Pos::WDT => Coarse::Det,
      Pos::EX | Pos::PRP | Pos::PRPS | Pos::WP | Pos::WPS => Coarse::Pron,
      Pos::IN => Coarse::Adp,
      Pos::JJ | Pos::JJR | Pos::JJS => Coarse::Adj,
      Pos::MD => Coarse::Aux,
      Pos::NN | Pos::NNS => Coarse::Noun,
      Pos::NNP | Pos::NNPS => Coarse::Propn,
      Pos::POS | Pos::RP | Pos::TO => Coarse::Part,
      Pos::RB | Pos::RBR | Pos::RBS | Pos::WRB => Coarse::Adv,
      Pos::SYM => Coarse::Sym,
      Pos::UH => Coarse::Intj,
      Pos::VB | Pos::VBD | Pos::VBG | Pos::VBN | Pos::VBP | Pos::VBZ => Coarse::Verb,
      Pos::SentFinal | Pos::Comma | Pos::Colon | Pos::Lrb | Pos::Rrb | Pos::Quote => Coarse::Punct,
      Pos::FW | Pos::LS | Pos::NotSet => Coarse::X,
    }
  }
}

impl fmt::Display for Pos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.to_str()) }
}

impl fmt::Display for Coarse {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let name = match self {
      Coarse::Adj => "ADJ",
      Coarse::Adp => "ADP",
      Coarse::Adv => "ADV",
      Coarse::Aux => "AUX",
      Coarse::CConj => "CCONJ",
      Coarse::Det => "DET",
      Coarse::Intj => "INTJ",
      Coarse::Noun => "NOUN",
      Coarse::Num => "NUM",
      Coarse::Part => "PART",
      Coarse::Pron => "PRON",
      Coarse::Propn => "PROPN",
      Coarse::Punct => "PUNCT",
      Coarse::Sym => "SYM",
      Coarse::Verb => "VERB",
      Coarse::X => "X",
    };
    write!(f, "{}", name)
  }
}
