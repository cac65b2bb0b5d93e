//! View State
//!
//! One immutable snapshot of everything the presentation layer needs to
//! render. The reducer never mutates a snapshot in place; every transition
//! produces a successor, and the engine multicasts the chain to observers.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::catalog::{Catalog, IconEntry, Pack, Style};
use crate::meta::StageIcon;

/// Resolution state of the application version strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppVersion {
    /// Not yet resolved
    Unknown,
    /// Both version strings resolved
    Ready {
        /// Application version
        app_version: String,
        /// Icon font library version
        font_lib_version: String,
    },
    /// Resolution failed
    Failed(String),
}

/// Resolution state of the stage icon images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageIcons {
    /// Not yet resolved
    Unknown,
    /// Images resolved
    Ready(Vec<StageIcon>),
    /// Resolution failed
    Failed(String),
}

/// The current search query.
///
/// An explicitly cleared field is distinct from an empty search text; the
/// presentation layer renders the two differently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// The field was cleared (or never used)
    Clear,
    /// The user is searching for this text
    Searching(String),
}

impl Query {
    /// The effective search text; empty for [`Query::Clear`].
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Clear => "",
            Self::Searching(text) => text,
        }
    }
}

/// Details panel state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsDisplay {
    /// No details shown
    Hidden,
    /// Details requested for this icon
    ShowRequested(IconEntry),
    /// Showing details failed
    Failed(String),
}

/// Filter panel visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacksFilter {
    /// Panel closed
    Hidden,
    /// Panel open
    Shown,
}

/// Browser density toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Dense glyph grid
    Grid,
    /// One icon per row with metadata
    List,
}

impl ViewMode {
    /// Human-readable mode name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

/// Activity signal surfaced to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    /// Nothing happening
    Idle,
    /// An operation is in flight
    Loading,
    /// The last operation succeeded
    Success,
    /// The last operation failed
    Error,
}

/// One immutable snapshot of the browser's state.
///
/// Snapshots share the catalog by reference; equality compares the catalog
/// by identity and everything else by value, which is what the engine's
/// consecutive-duplicate suppression needs.
#[derive(Clone, Debug)]
pub struct ViewState {
    version: AppVersion,
    stage_icons: StageIcons,
    query: Query,
    catalog: Arc<Catalog>,
    selected_packs: BTreeSet<Pack>,
    selected_styles: BTreeSet<Style>,
    displayed: Vec<IconEntry>,
    favorites: HashSet<IconEntry>,
    recents: HashSet<IconEntry>,
    view_mode: ViewMode,
    filter_panel: PacksFilter,
    details: DetailsDisplay,
    activity: Activity,
    message: String,
}

impl ViewState {
    /// The state at session start: the first pack in name order selected,
    /// all of its icons displayed, no style restriction, activity idle.
    #[must_use]
    pub fn initial(catalog: Arc<Catalog>) -> Self {
        let first = catalog.first_pack();
        let displayed: Vec<IconEntry> = catalog.by_pack(first).to_vec();
        let message = format!("{} icons found", displayed.len());

        Self {
            version: AppVersion::Unknown,
            stage_icons: StageIcons::Unknown,
            query: Query::Clear,
            catalog,
            selected_packs: BTreeSet::from([first]),
            selected_styles: BTreeSet::from([Style::All]),
            displayed,
            favorites: HashSet::new(),
            recents: HashSet::new(),
            view_mode: ViewMode::Grid,
            filter_panel: PacksFilter::Hidden,
            details: DetailsDisplay::Hidden,
            activity: Activity::Idle,
            message,
        }
    }

    /// Version resolution state.
    #[must_use]
    pub fn version(&self) -> &AppVersion {
        &self.version
    }

    /// Stage icon resolution state.
    #[must_use]
    pub fn stage_icons(&self) -> &StageIcons {
        &self.stage_icons
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The shared catalog reference.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Currently selected packs.
    #[must_use]
    pub fn selected_packs(&self) -> &BTreeSet<Pack> {
        &self.selected_packs
    }

    /// Currently selected styles: either exactly `{All}` or a non-empty
    /// proper subset of concrete styles.
    #[must_use]
    pub fn selected_styles(&self) -> &BTreeSet<Style> {
        &self.selected_styles
    }

    /// The icons the browser currently displays, in catalog order.
    #[must_use]
    pub fn displayed(&self) -> &[IconEntry] {
        &self.displayed
    }

    /// Favorite icons.
    #[must_use]
    pub fn favorites(&self) -> &HashSet<IconEntry> {
        &self.favorites
    }

    /// Recently copied icons.
    #[must_use]
    pub fn recents(&self) -> &HashSet<IconEntry> {
        &self.recents
    }

    /// Grid/list density.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Filter panel visibility.
    #[must_use]
    pub fn filter_panel(&self) -> PacksFilter {
        self.filter_panel
    }

    /// Details panel state.
    #[must_use]
    pub fn details(&self) -> &DetailsDisplay {
        &self.details
    }

    /// Activity signal.
    #[must_use]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Status bar message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Successor with a new version state.
    #[must_use]
    pub fn with_version(mut self, version: AppVersion) -> Self {
        self.version = version;
        self
    }

    /// Successor with a new stage icon state.
    #[must_use]
    pub fn with_stage_icons(mut self, stage_icons: StageIcons) -> Self {
        self.stage_icons = stage_icons;
        self
    }

    /// Successor with a new query.
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Successor with a new pack selection.
    #[must_use]
    pub fn with_selected_packs(mut self, packs: BTreeSet<Pack>) -> Self {
        self.selected_packs = packs;
        self
    }

    /// Successor with a new style selection.
    #[must_use]
    pub fn with_selected_styles(mut self, styles: BTreeSet<Style>) -> Self {
        self.selected_styles = styles;
        self
    }

    /// Successor with a new displayed list.
    #[must_use]
    pub fn with_displayed(mut self, displayed: Vec<IconEntry>) -> Self {
        self.displayed = displayed;
        self
    }

    /// Successor with a new favorites set.
    #[must_use]
    pub fn with_favorites(mut self, favorites: HashSet<IconEntry>) -> Self {
        self.favorites = favorites;
        self
    }

    /// Successor with a new recents set.
    #[must_use]
    pub fn with_recents(mut self, recents: HashSet<IconEntry>) -> Self {
        self.recents = recents;
        self
    }

    /// Successor with a new view mode.
    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// Successor with a new filter panel visibility.
    #[must_use]
    pub fn with_filter_panel(mut self, filter_panel: PacksFilter) -> Self {
        self.filter_panel = filter_panel;
        self
    }

    /// Successor with a new details panel state.
    #[must_use]
    pub fn with_details(mut self, details: DetailsDisplay) -> Self {
        self.details = details;
        self
    }

    /// Successor with a new activity signal.
    #[must_use]
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = activity;
        self
    }

    /// Successor with a new status message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl PartialEq for ViewState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.version == other.version
            && self.stage_icons == other.stage_icons
            && self.query == other.query
            && self.selected_packs == other.selected_packs
            && self.selected_styles == other.selected_styles
            && self.displayed == other.displayed
            && self.favorites == other.favorites
            && self.recents == other.recents
            && self.view_mode == other.view_mode
            && self.filter_panel == other.filter_panel
            && self.details == other.details
            && self.activity == other.activity
            && self.message == other.message
    }
}

impl Eq for ViewState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconEntry;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                IconEntry::new(Pack::Feather, "fth-wind", Style::Line, "wind"),
                IconEntry::new(Pack::BoxIcons, "bx-home", Style::Regular, "home"),
                IconEntry::new(Pack::BoxIcons, "bx-tag", Style::Regular, "tag"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn initial_selects_first_pack_in_name_order() {
        let state = ViewState::initial(catalog());
        assert_eq!(
            state.selected_packs(),
            &BTreeSet::from([Pack::BoxIcons])
        );
        assert_eq!(state.selected_styles(), &BTreeSet::from([Style::All]));
        assert_eq!(state.displayed().len(), 2);
        assert_eq!(state.activity(), Activity::Idle);
        assert_eq!(state.message(), "2 icons found");
    }

    #[test]
    fn with_methods_produce_new_snapshots() {
        let state = ViewState::initial(catalog());
        let next = state.clone().with_activity(Activity::Loading);
        assert_ne!(state, next);
        assert_eq!(state.activity(), Activity::Idle);
    }

    #[test]
    fn equality_compares_catalog_by_identity() {
        let first = ViewState::initial(catalog());
        let second = ViewState::initial(catalog());
        // Same value, different catalog instances.
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
