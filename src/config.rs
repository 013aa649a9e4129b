use crate::text::Language;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`, if present).
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Fixes the role shuffle, for replaying a game.
    pub seed: Option<u64>,
    pub language: Language,
    /// Where to write the transcript of the finished game.
    pub transcript: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let seed = var("MAFIA_SEED").and_then(|s| match s.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring invalid MAFIA_SEED: {:?}", s);
                None
            }
        });

        let language = var("MAFIA_LANG")
            .map(|s| {
                Language::from_code(&s).unwrap_or_else(|| {
                    log::warn!("unsupported MAFIA_LANG {:?}, falling back to English", s);
                    Language::default()
                })
            })
            .unwrap_or_default();

        let transcript = var("MAFIA_TRANSCRIPT").filter(|s| !s.is_empty()).map(PathBuf::from);

        Self {
            seed,
            language,
            transcript,
        }
    }
}
