//! Crate-wide error taxonomy.
//!
//! Coordinate conversions and input queries are total and never fail; the
//! errors here come from setup (config, assets, resolution) and from the
//! two things a running tick can trip over: a click handler and the renderer.

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::coords::ResolutionError;
use crate::ui::ClickError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Click(#[from] ClickError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("render error: {0}")]
    Render(String),
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_string() {
        let error: GameError = ResolutionError::ZeroResolution.into();
        let message: String = error.into();
        assert!(message.contains("resolution"));
    }

    #[test]
    fn test_render_message() {
        let message: String = GameError::Render("texture lost".to_string()).into();
        assert_eq!(message, "render error: texture lost");
    }
}
