//! Effect Errors
//!
//! Failures the orchestrator can hit while resolving effects. Each variant
//! carries the operator-facing wording verbatim; the reducer folds the
//! rendered string into the state's status message.

use thiserror::Error;

/// A failure while resolving an effect.
#[derive(Debug, Error)]
pub enum EffectError {
    /// The application version string was not pre-loaded.
    #[error("Application version is missing from AppMeta and the UI cannot display build information")]
    MissingAppVersion,

    /// The icon font library version string was not pre-loaded.
    #[error("Icon font library version is missing from AppMeta and icon metadata cannot be rendered correctly")]
    MissingFontLibVersion,

    /// No stage icon images were pre-loaded.
    #[error("Application stage icons are missing from AppMeta")]
    MissingStageIcons,

    /// The system clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_field() {
        assert!(EffectError::MissingAppVersion
            .to_string()
            .starts_with("Application version is missing"));
        assert!(EffectError::MissingFontLibVersion
            .to_string()
            .starts_with("Icon font library version is missing"));
        assert!(EffectError::MissingStageIcons
            .to_string()
            .starts_with("Application stage icons are missing"));
    }
}
