use anyhow::{Context, Result};
use bingo_core as bingo;
use serde::Deserialize;

/// Phrase list shipped with the page.
const PHRASES_TOML: &str = include_str!("../phrases.toml");

#[derive(Debug, Deserialize)]
pub(crate) struct PhraseConfig {
    phrases: Vec<bingo::Phrase>,
}

impl PhraseConfig {
    pub(crate) fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("parsing phrase list")
    }

    pub(crate) fn into_pool(self) -> Result<bingo::PhrasePool> {
        Ok(bingo::PhrasePool::new(self.phrases)?)
    }
}

/// The phrase pool the page plays with. Too few phrases is fatal here, before anything renders.
pub(crate) fn load_pool() -> Result<bingo::PhrasePool> {
    PhraseConfig::parse(PHRASES_TOML)?.into_pool()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_list_matches_builtin_pool() {
        assert_eq!(load_pool().unwrap(), bingo::PhrasePool::builtin());
    }

    #[test]
    fn short_list_is_rejected() {
        let err = PhraseConfig::parse(r#"phrases = ["a", "b", "c"]"#)
            .unwrap()
            .into_pool()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<bingo::BingoError>(),
            Some(&bingo::BingoError::PhrasePoolTooSmall { available: 3 })
        );
    }

    #[test]
    fn malformed_list_is_an_error() {
        assert!(PhraseConfig::parse("phrases = 3").is_err());
        assert!(PhraseConfig::parse("").is_err());
    }
}
