//! Effect Orchestrator
//!
//! Resolves the side effects behind request actions and reports outcomes as
//! result actions on a dedicated channel back into the engine. Only actions
//! dispatched from outside the engine reach the orchestrator; result actions
//! fold through the reducer but are never handed back here, so an effect can
//! never trigger another effect.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::action::Action;
use crate::catalog::IconEntry;
use crate::clipboard::Clipboard;
use crate::error::EffectError;
use crate::meta::AppMeta;

/// Resolves request actions into result actions.
pub struct EffectRunner {
    clipboard: Arc<dyn Clipboard>,
    meta: AppMeta,
    results: mpsc::UnboundedSender<Action>,
}

impl EffectRunner {
    /// Create an orchestrator that reports outcomes on `results`.
    #[must_use]
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        meta: AppMeta,
        results: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            clipboard,
            meta,
            results,
        }
    }

    /// Resolve the effect behind `action`, if it requests one.
    ///
    /// Non-request actions are ignored. Clipboard writes run on the blocking
    /// pool; everything else resolves inline.
    pub fn handle(&self, action: &Action) {
        match action {
            Action::CopyRequested(icon) => self.copy(icon.clone()),
            Action::AppVersionRequested => self.resolve_version(),
            Action::StageIconsRequested => self.resolve_stage_icons(),
            Action::FilterPanelRequested => self.send(Action::FilterPanelSucceeded),
            _ => {}
        }
    }

    fn copy(&self, icon: IconEntry) {
        let clipboard = Arc::clone(&self.clipboard);
        let results = self.results.clone();
        tokio::task::spawn_blocking(move || {
            debug!(glyph = %icon.glyph, "writing glyph to clipboard");
            let action = match clipboard.write_text(&icon.glyph) {
                Ok(()) => Action::CopySucceeded(icon),
                Err(error) => Action::CopyFailed {
                    icon,
                    error: error.to_string(),
                },
            };
            if results.send(action).is_err() {
                debug!("result channel closed, dropping clipboard outcome");
            }
        });
    }

    fn resolve_version(&self) {
        let action = match (self.meta.app_version(), self.meta.font_lib_version()) {
            (Some(app_version), Some(font_lib_version)) => Action::AppVersionResolved {
                app_version: app_version.to_owned(),
                font_lib_version: font_lib_version.to_owned(),
            },
            (None, _) => Action::AppVersionFailed {
                error: EffectError::MissingAppVersion.to_string(),
            },
            (_, None) => Action::AppVersionFailed {
                error: EffectError::MissingFontLibVersion.to_string(),
            },
        };
        self.send(action);
    }

    fn resolve_stage_icons(&self) {
        let icons = self.meta.stage_icons();
        let action = if icons.is_empty() {
            Action::StageIconsFailed {
                error: EffectError::MissingStageIcons.to_string(),
            }
        } else {
            Action::StageIconsResolved(icons.to_vec())
        };
        self.send(action);
    }

    fn send(&self, action: Action) {
        if self.results.send(action).is_err() {
            warn!("result channel closed, dropping effect outcome");
        }
    }
}
