//! Reducer
//!
//! The pure state transition function `(state, action) -> state`. No I/O,
//! no clocks, no channels: effects are requested through actions and their
//! results come back as actions. The match over [`Action`] is exhaustive,
//! so adding a variant without handling it fails to compile.
//!
//! The faceted filtering algorithm lives here because several transitions
//! share it: displayed icons are always a pure function of (selected packs,
//! selected styles, search text) against the catalog.

use std::collections::BTreeSet;

use crate::action::Action;
use crate::catalog::{Catalog, IconEntry, Pack, Style};
use crate::state::{
    Activity, AppVersion, DetailsDisplay, PacksFilter, Query, StageIcons, ViewMode, ViewState,
};

/// Default minimum search length; shorter queries are treated as empty to
/// avoid thrash on a single typed character.
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 2;

/// Pure state transition function.
#[derive(Clone, Debug)]
pub struct Reducer {
    min_search_length: usize,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer {
    /// Reducer with the default minimum search length.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
        }
    }

    /// Reducer with a custom minimum search length.
    #[must_use]
    pub fn with_min_search_length(min_search_length: usize) -> Self {
        Self { min_search_length }
    }

    /// Apply one action to a state, producing the successor state.
    #[must_use]
    pub fn apply(&self, state: ViewState, action: Action) -> ViewState {
        match action {
            Action::SearchChanged(text) => self.search(state, text),
            Action::SearchCleared => self.clear_search(state),
            Action::PackToggled(pack) => self.toggle_pack(state, pack),
            Action::SelectAllPacksToggled => self.toggle_all_packs(state),
            Action::StyleToggled(style) => self.toggle_style(state, style),
            Action::SelectAllStylesToggled => self.toggle_all_styles(state),
            Action::FavoriteToggled(icon) => Self::toggle_favorite(state, icon),
            Action::ViewDetailsRequested(icon) => Self::show_details(state, &icon),
            Action::HideDetailsRequested => Self::hide_details(state),
            Action::DetailsFailed { error } => Self::details_failed(state, error),
            Action::CopyRequested(icon) => Self::copy_requested(state, &icon),
            Action::CopySucceeded(icon) => Self::copy_succeeded(state, icon),
            Action::CopyFailed { icon, error } => Self::copy_failed(state, &icon, &error),
            Action::ViewModeToggled => Self::toggle_view_mode(state),
            Action::FilterPanelRequested => Self::filter_panel_requested(state),
            Action::FilterPanelSucceeded => Self::filter_panel_succeeded(state),
            Action::FilterPanelFailed { error } => Self::filter_panel_failed(state, &error),
            Action::AppVersionRequested | Action::StageIconsRequested => {
                state.with_activity(Activity::Loading)
            }
            Action::AppVersionResolved {
                app_version,
                font_lib_version,
            } => state
                .with_activity(Activity::Success)
                .with_version(AppVersion::Ready {
                    app_version,
                    font_lib_version,
                }),
            Action::AppVersionFailed { error } => state
                .with_activity(Activity::Error)
                .with_version(AppVersion::Failed(error.clone()))
                .with_message(error),
            Action::StageIconsResolved(icons) => state
                .with_activity(Activity::Success)
                .with_stage_icons(StageIcons::Ready(icons)),
            Action::StageIconsFailed { error } => state
                .with_activity(Activity::Error)
                .with_stage_icons(StageIcons::Failed(error.clone()))
                .with_message(error),
        }
    }

    // ============================================
    // Search
    // ============================================

    fn search(&self, state: ViewState, text: String) -> ViewState {
        let icons = self.filter_icons(
            state.catalog(),
            state.selected_packs(),
            state.selected_styles(),
            &text,
        );
        let message = format!("{} icons found", icons.len());
        state
            .with_query(Query::Searching(text))
            .with_displayed(icons)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    fn clear_search(&self, state: ViewState) -> ViewState {
        let icons = self.filter_icons(
            state.catalog(),
            state.selected_packs(),
            state.selected_styles(),
            "",
        );
        let message = format!("{} icons found", icons.len());
        state
            .with_query(Query::Clear)
            .with_displayed(icons)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    // ============================================
    // Facet selection
    // ============================================

    fn toggle_pack(&self, state: ViewState, pack: Pack) -> ViewState {
        let mut packs = state.selected_packs().clone();
        if !packs.remove(&pack) {
            packs.insert(pack);
        }
        if packs == *state.selected_packs() {
            // Membership did not change; the transition is a no-op.
            return state;
        }
        self.reselect_packs(state, packs)
    }

    fn toggle_all_packs(&self, state: ViewState) -> ViewState {
        let catalog = state.catalog();
        let packs: BTreeSet<Pack> =
            if state.selected_packs().len() == catalog.ordered_packs().len() {
                BTreeSet::from([catalog.first_pack()])
            } else {
                catalog.ordered_packs().iter().copied().collect()
            };
        self.reselect_packs(state, packs)
    }

    /// Shared tail of the pack transitions: recompute the style selection
    /// against the new pack set, then the displayed list.
    fn reselect_packs(&self, state: ViewState, packs: BTreeSet<Pack>) -> ViewState {
        let catalog = state.catalog();
        let reachable = reachable_styles(catalog, &packs);
        let chosen: BTreeSet<Style> = if state.selected_styles().contains(&Style::All) {
            reachable
        } else {
            state
                .selected_styles()
                .intersection(&reachable)
                .copied()
                .collect()
        };
        let styles = normalize_styles(catalog, chosen);

        let icons = self.filter_icons(catalog, &packs, &styles, state.query().text());
        let message = format!("{} icons found", icons.len());
        state
            .with_selected_packs(packs)
            .with_selected_styles(styles)
            .with_displayed(icons)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    fn toggle_style(&self, state: ViewState, style: Style) -> ViewState {
        let mut styles = state.selected_styles().clone();
        if !styles.remove(&style) {
            styles.insert(style);
        }
        // The sentinel itself is never a member of a toggled selection.
        styles.remove(&Style::All);
        let styles = normalize_styles(state.catalog(), styles);
        self.reselect_styles(state, styles)
    }

    fn toggle_all_styles(&self, state: ViewState) -> ViewState {
        let catalog = state.catalog();
        let styles = if state.selected_styles().contains(&Style::All) {
            normalize_styles(catalog, reachable_styles(catalog, state.selected_packs()))
        } else {
            BTreeSet::from([Style::All])
        };
        self.reselect_styles(state, styles)
    }

    fn reselect_styles(&self, state: ViewState, styles: BTreeSet<Style>) -> ViewState {
        let icons = self.filter_icons(
            state.catalog(),
            state.selected_packs(),
            &styles,
            state.query().text(),
        );
        let message = format!("{} icons found", icons.len());
        state
            .with_selected_styles(styles)
            .with_displayed(icons)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    // ============================================
    // Icon interactions
    // ============================================

    fn toggle_favorite(state: ViewState, icon: IconEntry) -> ViewState {
        let mut favorites = state.favorites().clone();
        let added = favorites.insert(icon.clone());
        if !added {
            favorites.remove(&icon);
        }
        let message = format!(
            "{} {} favorites",
            icon.description,
            if added { "added to" } else { "removed from" }
        );
        state
            .with_favorites(favorites)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    fn show_details(state: ViewState, icon: &IconEntry) -> ViewState {
        let message = format!("View '{}' details", icon.description);
        state
            .with_details(DetailsDisplay::ShowRequested(icon.clone()))
            .with_activity(Activity::Loading)
            .with_message(message)
    }

    fn hide_details(state: ViewState) -> ViewState {
        state
            .with_details(DetailsDisplay::Hidden)
            .with_activity(Activity::Success)
            .with_message("Viewed icon details")
    }

    fn details_failed(state: ViewState, error: String) -> ViewState {
        let message = format!("Failed to view icon details: {error}");
        state
            .with_details(DetailsDisplay::Failed(error))
            .with_activity(Activity::Error)
            .with_message(message)
    }

    // ============================================
    // Clipboard
    // ============================================

    fn copy_requested(state: ViewState, icon: &IconEntry) -> ViewState {
        let message = format!("Copying '{}' to clipboard", icon.description);
        state
            .with_activity(Activity::Loading)
            .with_message(message)
    }

    fn copy_succeeded(state: ViewState, icon: IconEntry) -> ViewState {
        let mut recents = state.recents().clone();
        let changed = recents.insert(icon.clone());
        let next = if changed {
            state.with_recents(recents)
        } else {
            state
        };
        let message = format!("Copied '{}' to clipboard", icon.description);
        next.with_activity(Activity::Success).with_message(message)
    }

    fn copy_failed(state: ViewState, icon: &IconEntry, error: &str) -> ViewState {
        let message = format!(
            "Failed to copy '{}' to clipboard: {error}",
            icon.description
        );
        state.with_activity(Activity::Error).with_message(message)
    }

    // ============================================
    // View chrome
    // ============================================

    fn toggle_view_mode(state: ViewState) -> ViewState {
        let mode = match state.view_mode() {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        };
        let message = format!(
            "Switched icon browser view to {}",
            mode.display_name().to_lowercase()
        );
        state
            .with_view_mode(mode)
            .with_activity(Activity::Success)
            .with_message(message)
    }

    fn filter_panel_requested(state: ViewState) -> ViewState {
        let panel = match state.filter_panel() {
            PacksFilter::Shown => PacksFilter::Hidden,
            PacksFilter::Hidden => PacksFilter::Shown,
        };
        state
            .with_filter_panel(panel)
            .with_activity(Activity::Loading)
            .with_message("Filtering icons")
    }

    fn filter_panel_succeeded(state: ViewState) -> ViewState {
        let message = format!("Filtered icons. {} shown.", state.displayed().len());
        state.with_activity(Activity::Success).with_message(message)
    }

    fn filter_panel_failed(state: ViewState, error: &str) -> ViewState {
        let message = format!("Failed to filter icons: {error}");
        state.with_activity(Activity::Error).with_message(message)
    }

    // ============================================
    // Filtering
    // ============================================

    /// The faceted filtering algorithm.
    ///
    /// An empty pack selection displays nothing. With the `All` sentinel
    /// the base list is the selected packs flattened in catalog order;
    /// otherwise it is every catalog entry whose style and pack are both
    /// selected. Search text shorter than the minimum is ignored; longer
    /// text filters by case-insensitive substring match on the description.
    /// The result keeps catalog declaration order; search never reorders.
    #[must_use]
    pub fn filter_icons(
        &self,
        catalog: &Catalog,
        packs: &BTreeSet<Pack>,
        styles: &BTreeSet<Style>,
        text: &str,
    ) -> Vec<IconEntry> {
        if packs.is_empty() {
            return Vec::new();
        }

        let base: Vec<IconEntry> = if styles.contains(&Style::All) {
            catalog
                .declared_packs()
                .iter()
                .filter(|pack| packs.contains(pack))
                .flat_map(|pack| catalog.by_pack(*pack))
                .cloned()
                .collect()
        } else {
            catalog
                .all()
                .iter()
                .filter(|entry| styles.contains(&entry.style) && packs.contains(&entry.pack))
                .cloned()
                .collect()
        };

        if !self.valid_search(text) {
            return base;
        }

        let needle = text.to_lowercase();
        base.into_iter()
            .filter(|entry| entry.description.to_lowercase().contains(&needle))
            .collect()
    }

    fn valid_search(&self, text: &str) -> bool {
        !text.trim().is_empty() && text.chars().count() >= self.min_search_length
    }
}

/// Concrete styles reachable from a pack selection.
fn reachable_styles(catalog: &Catalog, packs: &BTreeSet<Pack>) -> BTreeSet<Style> {
    packs
        .iter()
        .flat_map(|pack| catalog.by_pack(*pack))
        .map(|entry| entry.style)
        .collect()
}

/// Re-apply the All-collapse rule: an empty selection or one covering every
/// concrete style in the catalog collapses to `{All}`.
fn normalize_styles(catalog: &Catalog, styles: BTreeSet<Style>) -> BTreeSet<Style> {
    if styles.is_empty() || styles.len() == catalog.concrete_style_count() {
        BTreeSet::from([Style::All])
    } else {
        styles
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::ViewMode;

    /// Three packs, four concrete styles, arrows split across two packs.
    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                IconEntry::new(Pack::BoxIcons, "bx-arrow-up", Style::Regular, "arrow up"),
                IconEntry::new(Pack::BoxIcons, "bx-home", Style::Regular, "home"),
                IconEntry::new(Pack::BoxIcons, "bxs-home", Style::Solid, "home solid"),
                IconEntry::new(Pack::Feather, "fth-arrow-down", Style::Line, "arrow down"),
                IconEntry::new(Pack::Feather, "fth-wind", Style::Line, "wind"),
                IconEntry::new(
                    Pack::Material2,
                    "mat-delete-round",
                    Style::Round,
                    "delete round",
                ),
            ])
            .unwrap(),
        )
    }

    fn initial() -> ViewState {
        ViewState::initial(catalog())
    }

    fn entry(glyph: &str) -> IconEntry {
        catalog()
            .all()
            .iter()
            .find(|e| e.glyph == glyph)
            .cloned()
            .unwrap()
    }

    fn select_all_packs(reducer: &Reducer, state: ViewState) -> ViewState {
        reducer.apply(state, Action::SelectAllPacksToggled)
    }

    // ============================================
    // Search
    // ============================================

    #[test]
    fn short_search_does_not_filter() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());
        let all = state.displayed().to_vec();

        let next = reducer.apply(state, Action::SearchChanged("a".into()));

        assert_eq!(next.displayed(), all);
    }

    #[test]
    fn valid_search_filters_by_description() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());

        let next = reducer.apply(state, Action::SearchChanged("arrow".into()));

        assert!(!next.displayed().is_empty());
        assert!(next
            .displayed()
            .iter()
            .all(|e| e.description.contains("arrow")));
    }

    #[test]
    fn search_is_case_insensitive() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());

        let next = reducer.apply(state, Action::SearchChanged("ARROW".into()));

        assert_eq!(next.displayed().len(), 2);
    }

    #[test]
    fn search_shows_count_message() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());

        let next = reducer.apply(state, Action::SearchChanged("arrow".into()));

        assert_eq!(
            next.message(),
            format!("{} icons found", next.displayed().len())
        );
    }

    #[test]
    fn search_respects_selected_packs() {
        let reducer = Reducer::new();
        let state = initial(); // BoxIcons only

        let next = reducer.apply(state, Action::SearchChanged("arrow".into()));

        let packs: BTreeSet<Pack> = next.displayed().iter().map(|e| e.pack).collect();
        assert_eq!(packs, BTreeSet::from([Pack::BoxIcons]));
    }

    #[test]
    fn search_across_two_packs_finds_both_arrows() {
        let reducer = Reducer::new();
        // BoxIcons is the initial selection; add Feather.
        let state = reducer.apply(initial(), Action::PackToggled(Pack::Feather));

        let next = reducer.apply(state, Action::SearchChanged("arrow".into()));

        let glyphs: Vec<_> = next.displayed().iter().map(|e| e.glyph.as_str()).collect();
        assert_eq!(glyphs, ["bx-arrow-up", "fth-arrow-down"]);
        assert_eq!(next.message(), "2 icons found");
    }

    #[test]
    fn clear_search_resets_query_state() {
        let reducer = Reducer::new();
        let state = reducer.apply(initial(), Action::SearchChanged("ho".into()));

        let next = reducer.apply(state, Action::SearchCleared);

        assert_eq!(next.query(), &Query::Clear);
    }

    #[test]
    fn clear_search_restores_unfiltered_icons() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());
        let full = state.displayed().to_vec();

        let searched = reducer.apply(state, Action::SearchChanged("arrow".into()));
        let next = reducer.apply(searched, Action::SearchCleared);

        assert_eq!(next.displayed(), full);
        assert_eq!(next.activity(), Activity::Success);
        assert_eq!(next.message(), format!("{} icons found", full.len()));
    }

    #[test]
    fn short_search_equals_empty_search() {
        let reducer = Reducer::new();
        let catalog = catalog();
        let packs: BTreeSet<Pack> = catalog.ordered_packs().iter().copied().collect();
        let styles = BTreeSet::from([Style::All]);

        for text in ["", "a", "z", " "] {
            assert_eq!(
                reducer.filter_icons(&catalog, &packs, &styles, text),
                reducer.filter_icons(&catalog, &packs, &styles, ""),
            );
        }
    }

    #[test]
    fn search_only_filters_never_reorders() {
        let reducer = Reducer::new();
        let catalog = catalog();
        let packs: BTreeSet<Pack> = catalog.ordered_packs().iter().copied().collect();
        let styles = BTreeSet::from([Style::All]);

        let filtered = reducer.filter_icons(&catalog, &packs, &styles, "home");
        let positions: Vec<_> = filtered
            .iter()
            .map(|e| catalog.all().iter().position(|c| c == e).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filtered_icons_are_subset_of_selected_pack_flatten() {
        let reducer = Reducer::new();
        let catalog = catalog();
        let packs = BTreeSet::from([Pack::BoxIcons, Pack::Feather]);
        let flattened: Vec<IconEntry> = packs
            .iter()
            .flat_map(|p| catalog.by_pack(*p))
            .cloned()
            .collect();

        for styles in [
            BTreeSet::from([Style::All]),
            BTreeSet::from([Style::Regular]),
            BTreeSet::from([Style::Line, Style::Solid]),
        ] {
            for text in ["", "arrow", "home", "zzz"] {
                let filtered = reducer.filter_icons(&catalog, &packs, &styles, text);
                assert!(filtered.iter().all(|e| flattened.contains(e)));
            }
        }
    }

    #[test]
    fn empty_pack_selection_displays_nothing() {
        let reducer = Reducer::new();
        let catalog = catalog();
        let styles = BTreeSet::from([Style::All]);

        let filtered = reducer.filter_icons(&catalog, &BTreeSet::new(), &styles, "arrow");

        assert!(filtered.is_empty());
    }

    // ============================================
    // Pack selection
    // ============================================

    #[test]
    fn toggle_adds_pack() {
        let reducer = Reducer::new();
        let next = reducer.apply(initial(), Action::PackToggled(Pack::Feather));
        assert!(next.selected_packs().contains(&Pack::Feather));
    }

    #[test]
    fn toggle_removes_pack() {
        let reducer = Reducer::new();
        let state = reducer.apply(initial(), Action::PackToggled(Pack::Feather));
        let next = reducer.apply(state, Action::PackToggled(Pack::Feather));
        assert!(!next.selected_packs().contains(&Pack::Feather));
    }

    #[test]
    fn pack_toggle_round_trip_restores_selection() {
        let reducer = Reducer::new();
        let state = initial();
        let original = state.selected_packs().clone();

        let once = reducer.apply(state, Action::PackToggled(Pack::BoxIcons));
        let twice = reducer.apply(once, Action::PackToggled(Pack::BoxIcons));

        assert_eq!(twice.selected_packs(), &original);
    }

    #[test]
    fn select_all_selects_every_pack() {
        let reducer = Reducer::new();
        let next = reducer.apply(initial(), Action::SelectAllPacksToggled);
        assert_eq!(next.selected_packs().len(), catalog().ordered_packs().len());
    }

    #[test]
    fn select_all_collapses_to_first_pack_when_all_selected() {
        let reducer = Reducer::new();
        let all = select_all_packs(&reducer, initial());

        let next = reducer.apply(all, Action::SelectAllPacksToggled);

        assert_eq!(next.selected_packs(), &BTreeSet::from([Pack::BoxIcons]));
    }

    #[test]
    fn toggling_pack_recomputes_styles_from_selected_packs() {
        let reducer = Reducer::new();
        // Break {All} into the concrete breakdown, then change the pack set.
        let state = reducer.apply(initial(), Action::SelectAllStylesToggled);
        assert!(!state.selected_styles().contains(&Style::All));

        let next = reducer.apply(state, Action::PackToggled(Pack::Feather));

        // Only styles reachable from {BoxIcons, Feather} survive.
        assert!(next
            .selected_styles()
            .iter()
            .all(|s| matches!(s, Style::Regular | Style::Solid | Style::Line)));
    }

    #[test]
    fn deselecting_last_pack_displays_nothing() {
        let reducer = Reducer::new();
        let next = reducer.apply(initial(), Action::PackToggled(Pack::BoxIcons));
        assert!(next.selected_packs().is_empty());
        assert!(next.displayed().is_empty());
        assert_eq!(next.message(), "0 icons found");
    }

    // ============================================
    // Style selection
    // ============================================

    #[test]
    fn toggle_style_restricts_displayed() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());

        let next = reducer.apply(state, Action::StyleToggled(Style::Line));

        assert_eq!(next.selected_styles(), &BTreeSet::from([Style::Line]));
        assert!(next.displayed().iter().all(|e| e.style == Style::Line));
    }

    #[test]
    fn style_filter_respects_selected_packs() {
        let reducer = Reducer::new();
        // Only BoxIcons selected; Line icons exist only in Feather.
        let next = reducer.apply(initial(), Action::StyleToggled(Style::Line));
        assert!(next.displayed().is_empty());
    }

    #[test]
    fn style_collapse_law() {
        let reducer = Reducer::new();
        let mut state = select_all_packs(&reducer, initial());

        // The fixture has exactly four concrete styles; toggling each one
        // individually must end back at {All}.
        for style in [Style::Regular, Style::Solid, Style::Line, Style::Round] {
            state = reducer.apply(state, Action::StyleToggled(style));
        }

        assert_eq!(state.selected_styles(), &BTreeSet::from([Style::All]));
    }

    #[test]
    fn deselecting_only_style_collapses_to_all() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());
        let one = reducer.apply(state, Action::StyleToggled(Style::Line));

        let next = reducer.apply(one, Action::StyleToggled(Style::Line));

        assert_eq!(next.selected_styles(), &BTreeSet::from([Style::All]));
    }

    #[test]
    fn toggling_the_sentinel_is_state_preserving() {
        let reducer = Reducer::new();
        let state = select_all_packs(&reducer, initial());

        let next = reducer.apply(state.clone(), Action::StyleToggled(Style::All));

        assert_eq!(next, state);
    }

    #[test]
    fn select_all_styles_expands_to_reachable_breakdown() {
        let reducer = Reducer::new();
        // BoxIcons only: Regular and Solid are reachable, Line and Round not.
        let next = reducer.apply(initial(), Action::SelectAllStylesToggled);
        assert_eq!(
            next.selected_styles(),
            &BTreeSet::from([Style::Regular, Style::Solid])
        );
    }

    #[test]
    fn select_all_styles_toggles_back_to_all() {
        let reducer = Reducer::new();
        let expanded = reducer.apply(initial(), Action::SelectAllStylesToggled);
        let next = reducer.apply(expanded, Action::SelectAllStylesToggled);
        assert_eq!(next.selected_styles(), &BTreeSet::from([Style::All]));
    }

    // ============================================
    // Favorites, copy, recents
    // ============================================

    #[test]
    fn favorite_toggle_adds_then_removes() {
        let reducer = Reducer::new();
        let icon = entry("bx-home");

        let added = reducer.apply(initial(), Action::FavoriteToggled(icon.clone()));
        assert!(added.favorites().contains(&icon));
        assert_eq!(added.message(), "home added to favorites");

        let removed = reducer.apply(added, Action::FavoriteToggled(icon.clone()));
        assert!(!removed.favorites().contains(&icon));
        assert_eq!(removed.message(), "home removed from favorites");
    }

    #[test]
    fn copy_lifecycle_messages() {
        let reducer = Reducer::new();
        let icon = entry("bx-arrow-up");

        let requested = reducer.apply(initial(), Action::CopyRequested(icon.clone()));
        assert_eq!(requested.activity(), Activity::Loading);
        assert_eq!(requested.message(), "Copying 'arrow up' to clipboard");

        let done = reducer.apply(requested, Action::CopySucceeded(icon.clone()));
        assert_eq!(done.activity(), Activity::Success);
        assert_eq!(done.message(), "Copied 'arrow up' to clipboard");
        assert!(done.recents().contains(&icon));
    }

    #[test]
    fn repeated_copy_success_does_not_duplicate_recents() {
        let reducer = Reducer::new();
        let icon = entry("bx-arrow-up");

        let once = reducer.apply(initial(), Action::CopySucceeded(icon.clone()));
        let twice = reducer.apply(once.clone(), Action::CopySucceeded(icon));

        assert_eq!(twice.recents().len(), 1);
        // The repeated result is a fixed point.
        assert_eq!(twice, once);
    }

    #[test]
    fn copy_failed_reports_error() {
        let reducer = Reducer::new();
        let icon = entry("bx-arrow-up");

        let next = reducer.apply(
            initial(),
            Action::CopyFailed {
                icon,
                error: "clipboard unavailable".into(),
            },
        );

        assert_eq!(next.activity(), Activity::Error);
        assert_eq!(
            next.message(),
            "Failed to copy 'arrow up' to clipboard: clipboard unavailable"
        );
    }

    // ============================================
    // Details, view mode, filter panel
    // ============================================

    #[test]
    fn details_show_then_hide() {
        let reducer = Reducer::new();
        let icon = entry("fth-wind");

        let shown = reducer.apply(initial(), Action::ViewDetailsRequested(icon.clone()));
        assert_eq!(shown.details(), &DetailsDisplay::ShowRequested(icon));
        assert_eq!(shown.activity(), Activity::Loading);
        assert_eq!(shown.message(), "View 'wind' details");

        let hidden = reducer.apply(shown, Action::HideDetailsRequested);
        assert_eq!(hidden.details(), &DetailsDisplay::Hidden);
        assert_eq!(hidden.message(), "Viewed icon details");
    }

    #[test]
    fn details_failed_reports_error() {
        let reducer = Reducer::new();
        let next = reducer.apply(
            initial(),
            Action::DetailsFailed {
                error: "panel broke".into(),
            },
        );
        assert_eq!(next.details(), &DetailsDisplay::Failed("panel broke".into()));
        assert_eq!(next.activity(), Activity::Error);
        assert_eq!(next.message(), "Failed to view icon details: panel broke");
    }

    #[test]
    fn view_mode_toggle_is_idempotent_in_pairs() {
        let reducer = Reducer::new();
        let state = initial();
        assert_eq!(state.view_mode(), ViewMode::Grid);

        let list = reducer.apply(state, Action::ViewModeToggled);
        assert_eq!(list.view_mode(), ViewMode::List);
        assert_eq!(list.message(), "Switched icon browser view to list");

        let grid = reducer.apply(list, Action::ViewModeToggled);
        assert_eq!(grid.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn filter_panel_round_trip() {
        let reducer = Reducer::new();

        let shown = reducer.apply(initial(), Action::FilterPanelRequested);
        assert_eq!(shown.filter_panel(), PacksFilter::Shown);
        assert_eq!(shown.activity(), Activity::Loading);
        assert_eq!(shown.message(), "Filtering icons");

        let done = reducer.apply(shown, Action::FilterPanelSucceeded);
        assert_eq!(done.activity(), Activity::Success);
        assert_eq!(
            done.message(),
            format!("Filtered icons. {} shown.", done.displayed().len())
        );

        let hidden = reducer.apply(done, Action::FilterPanelRequested);
        assert_eq!(hidden.filter_panel(), PacksFilter::Hidden);
    }

    // ============================================
    // Startup resolution
    // ============================================

    #[test]
    fn version_lifecycle() {
        let reducer = Reducer::new();

        let loading = reducer.apply(initial(), Action::AppVersionRequested);
        assert_eq!(loading.activity(), Activity::Loading);

        let ready = reducer.apply(
            loading,
            Action::AppVersionResolved {
                app_version: "1.2.0".into(),
                font_lib_version: "12.4.0".into(),
            },
        );
        assert_eq!(ready.activity(), Activity::Success);
        assert_eq!(
            ready.version(),
            &AppVersion::Ready {
                app_version: "1.2.0".into(),
                font_lib_version: "12.4.0".into(),
            }
        );
    }

    #[test]
    fn version_failure_surfaces_message() {
        let reducer = Reducer::new();
        let next = reducer.apply(
            initial(),
            Action::AppVersionFailed {
                error: "version missing".into(),
            },
        );
        assert_eq!(next.activity(), Activity::Error);
        assert_eq!(next.version(), &AppVersion::Failed("version missing".into()));
        assert_eq!(next.message(), "version missing");
    }

    #[test]
    fn stage_icons_lifecycle() {
        use crate::meta::StageIcon;

        let reducer = Reducer::new();
        let icons = vec![StageIcon::new("icon-32.png", vec![0u8; 4])];

        let ready = reducer.apply(initial(), Action::StageIconsResolved(icons.clone()));
        assert_eq!(ready.stage_icons(), &StageIcons::Ready(icons));

        let failed = reducer.apply(
            ready,
            Action::StageIconsFailed {
                error: "no images".into(),
            },
        );
        assert_eq!(failed.stage_icons(), &StageIcons::Failed("no images".into()));
        assert_eq!(failed.message(), "no images");
    }
}
