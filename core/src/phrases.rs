use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text of a single bingo cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phrase(String);

impl Phrase {
    pub fn new(text: &str) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Phrase {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Ordered list of candidate phrases, always enough to fill a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phrase>", into = "Vec<Phrase>")]
pub struct PhrasePool {
    phrases: Vec<Phrase>,
}

impl PhrasePool {
    pub fn new(phrases: Vec<Phrase>) -> Result<Self> {
        if phrases.len() < CELL_COUNT {
            return Err(BingoError::PhrasePoolTooSmall {
                available: phrases.len(),
            });
        }
        Ok(Self { phrases })
    }

    /// Phrases of the podcast edition the game was made for.
    pub fn builtin() -> Self {
        Self {
            phrases: BUILTIN_PHRASES.iter().copied().map(Phrase::new).collect(),
        }
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl TryFrom<Vec<Phrase>> for PhrasePool {
    type Error = BingoError;

    fn try_from(phrases: Vec<Phrase>) -> Result<Self> {
        Self::new(phrases)
    }
}

impl From<PhrasePool> for Vec<Phrase> {
    fn from(pool: PhrasePool) -> Self {
        pool.phrases
    }
}

const BUILTIN_PHRASES: [&str; 24] = [
    "Wa ne schone vent is ...",
    "..., of zo.",
    "Andries heeft een docu gezien",
    "Alex wint \"het Leids\"",
    "de WC onder de trap",
    "Mijne papa is nen Engelsman",
    "Alex is geïrriteerd door woke",
    "Gunther Lamoot imitatie",
    "Bill Burr imitatie",
    "Sportpaleis uitverkocht",
    "Andries heeft niet opgelet",
    "Bro Science",
    "Alex en Andries krijgen drank",
    "Ik heb nog karate gedaan",
    "\"Als ge van slechte wil zijt\"",
    "Moeder is grootste fan",
    "Bazart komt aan bod",
    "\"Da's kei schattig\"",
    "Alex en Andries bromance",
    "Alex houdt van Davy Gillis",
    "Mekanik strip wordt vermeld",
    "Fokke van der Meulen",
    "\"Een gigantisch pak rammel\"",
    "Bij Vlaamse Opera gewerkt",
];
