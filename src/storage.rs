//! Browser local storage for the two persisted flags: high score and theme.

use thiserror::Error;
use web_sys::Storage;

use crate::state::Theme;

pub const HIGH_SCORE_KEY: &str = "runnerHighScore";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("no global window")]
    NoWindow,
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("stored value {value:?} under `{key}` is not a valid score")]
    Corrupt { key: &'static str, value: String },
}

fn local_storage() -> Result<Storage, StorageError> {
    let win = web_sys::window().ok_or(StorageError::NoWindow)?;
    match win.local_storage() {
        Ok(Some(store)) => Ok(store),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Js(format!("{e:?}"))),
    }
}

fn get(key: &'static str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Js(format!("{e:?}")))
}

fn set(key: &'static str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| StorageError::Js(format!("{e:?}")))
}

/// Missing means no score yet.
pub fn parse_high_score(raw: Option<&str>) -> Result<u32, StorageError> {
    match raw {
        None => Ok(0),
        Some(v) => v.trim().parse::<u32>().map_err(|_| StorageError::Corrupt {
            key: HIGH_SCORE_KEY,
            value: v.to_string(),
        }),
    }
}

pub fn load_high_score() -> Result<u32, StorageError> {
    parse_high_score(get(HIGH_SCORE_KEY)?.as_deref())
}

pub fn save_high_score(score: u32) -> Result<(), StorageError> {
    set(HIGH_SCORE_KEY, &score.to_string())
}

/// Dark unless `light` was saved.
pub fn load_theme() -> Result<Theme, StorageError> {
    Ok(Theme::from_stored(get(THEME_KEY)?.as_deref()))
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    set(THEME_KEY, theme.as_stored())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_is_zero() {
        assert_eq!(parse_high_score(None), Ok(0));
    }

    #[test]
    fn stored_score_parses() {
        assert_eq!(parse_high_score(Some("42")), Ok(42));
        assert_eq!(parse_high_score(Some(" 7\n")), Ok(7));
    }

    #[test]
    fn garbage_score_is_reported() {
        assert_eq!(
            parse_high_score(Some("lots")),
            Err(StorageError::Corrupt {
                key: HIGH_SCORE_KEY,
                value: "lots".to_string()
            })
        );
        assert!(parse_high_score(Some("-3")).is_err());
    }
}
