//! Action Taxonomy
//!
//! Every intent and result that can flow through the state engine. The set
//! is closed and the reducer matches it exhaustively, so an unhandled
//! variant is a compile error rather than a silent gap.
//!
//! Three families share the one enum:
//!
//! - **User intents** dispatched by presentation handlers (search, toggles,
//!   copy, details).
//! - **Request actions** that additionally trigger an effect
//!   ([`Action::CopyRequested`], [`Action::AppVersionRequested`],
//!   [`Action::StageIconsRequested`], [`Action::FilterPanelRequested`]).
//! - **Result actions** emitted only by the effect orchestrator, never
//!   dispatched by the presentation layer.

use crate::catalog::{IconEntry, Pack, Style};
use crate::meta::StageIcon;

/// One intent or result flowing through the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // ============================================
    // Search
    // ============================================
    /// The search field text changed
    SearchChanged(String),
    /// The search field was cleared
    SearchCleared,

    // ============================================
    // Facet selection
    // ============================================
    /// A pack checkbox was toggled
    PackToggled(Pack),
    /// The select-all-packs control was toggled
    SelectAllPacksToggled,
    /// A style checkbox was toggled
    StyleToggled(Style),
    /// The select-all-styles control was toggled
    SelectAllStylesToggled,

    // ============================================
    // Icon interactions
    // ============================================
    /// An icon's favorite marker was toggled
    FavoriteToggled(IconEntry),
    /// The details panel was requested for an icon
    ViewDetailsRequested(IconEntry),
    /// The details panel was dismissed
    HideDetailsRequested,
    /// Showing the details panel failed
    DetailsFailed {
        /// Error description
        error: String,
    },

    // ============================================
    // Clipboard
    // ============================================
    /// Copying an icon's glyph identifier was requested
    CopyRequested(IconEntry),
    /// The clipboard write completed
    CopySucceeded(IconEntry),
    /// The clipboard write failed
    CopyFailed {
        /// The icon whose copy failed
        icon: IconEntry,
        /// Error description
        error: String,
    },

    // ============================================
    // View chrome
    // ============================================
    /// The grid/list density toggle was pressed
    ViewModeToggled,
    /// The filter panel was requested to open or close
    FilterPanelRequested,
    /// The filter panel transition completed
    FilterPanelSucceeded,
    /// The filter panel transition failed
    FilterPanelFailed {
        /// Error description
        error: String,
    },

    // ============================================
    // Startup resolution
    // ============================================
    /// Resolution of the version strings was requested
    AppVersionRequested,
    /// Version strings resolved
    AppVersionResolved {
        /// Application version
        app_version: String,
        /// Icon font library version
        font_lib_version: String,
    },
    /// Version resolution failed
    AppVersionFailed {
        /// Error description
        error: String,
    },
    /// Resolution of the stage icons was requested
    StageIconsRequested,
    /// Stage icons resolved
    StageIconsResolved(Vec<StageIcon>),
    /// Stage icon resolution failed
    StageIconsFailed {
        /// Error description
        error: String,
    },
}

impl Action {
    /// Whether this action is search input, which the engine debounces.
    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(self, Self::SearchChanged(_))
    }

    /// Whether this action requests an effect from the orchestrator.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::CopyRequested(_)
                | Self::AppVersionRequested
                | Self::StageIconsRequested
                | Self::FilterPanelRequested
        )
    }
}
