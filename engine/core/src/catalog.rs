//! Icon Catalog
//!
//! The immutable index over every icon glyph the browser can show.
//! Icons are grouped by [`Pack`] (the font family they ship with) and by
//! [`Style`] (the visual rendering variant). The catalog is built once at
//! startup and never mutated; tests that need different contents construct
//! a fresh catalog from their own entries.
//!
//! # Design Philosophy
//!
//! The catalog is an explicitly constructed value owned by whoever assembles
//! the state engine. There is no process-wide singleton; the engine holds an
//! `Arc<Catalog>` and every [`ViewState`](crate::state::ViewState) snapshot
//! shares that same reference.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named family of icons sharing a font origin.
///
/// This is a closed set: adding a pack means adding a variant here and
/// entries to the bundled data, so the reducer and tests stay exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pack {
    /// Ant Design icons
    AntDesign,
    /// Bootstrap icons
    BootstrapIcons,
    /// BoxIcons
    BoxIcons,
    /// ByteDance icons
    ByteDance,
    /// Captain icon set
    CaptainIcon,
    /// Feather icons
    Feather,
    /// Fluent UI system icons
    FluentUi,
    /// Font Awesome 6
    FontAwesome6,
    /// Material Design 2
    Material2,
    /// GitHub Octicons
    Octicons,
    /// Remix icons
    RemixIcon,
    /// Simple Icons brand set
    SimpleIcons,
    /// Weather icons
    WeatherIcons,
    /// Windows 10 icons
    Win10,
}

impl Pack {
    /// Human-readable pack name, used for display and name-ordered listing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AntDesign => "Ant Design",
            Self::BootstrapIcons => "Bootstrap Icons",
            Self::BoxIcons => "BoxIcons",
            Self::ByteDance => "ByteDance",
            Self::CaptainIcon => "Captain Icon",
            Self::Feather => "Feather",
            Self::FluentUi => "Fluent UI",
            Self::FontAwesome6 => "Font Awesome 6",
            Self::Material2 => "Material Design 2",
            Self::Octicons => "Octicons",
            Self::RemixIcon => "Remix Icon",
            Self::SimpleIcons => "Simple Icons",
            Self::WeatherIcons => "Weather Icons",
            Self::Win10 => "Windows 10",
        }
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A visual rendering variant of a glyph.
///
/// `All` is a sentinel meaning "no style restriction" and never appears on a
/// concrete [`IconEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Regular weight
    Regular,
    /// Filled shapes
    Filled,
    /// Outlined shapes
    Outlined,
    /// Bold weight
    Bold,
    /// Extra bold weight
    ExtraBold,
    /// Solid fill
    Solid,
    /// Rounded corners
    Round,
    /// Sharp corners
    Sharp,
    /// Stroked paths
    Stroke,
    /// Squared corners
    Square,
    /// Logo glyphs
    Logo,
    /// Brand glyphs
    Brand,
    /// Monochrome rendering
    Monochrome,
    /// Thin line rendering
    Line,
    /// Alternate rendering
    Alternate,
    /// Sentinel: no style restriction
    All,
}

impl Style {
    /// Every concrete style, excluding the `All` sentinel.
    pub const CONCRETE: [Style; 15] = [
        Style::Regular,
        Style::Filled,
        Style::Outlined,
        Style::Bold,
        Style::ExtraBold,
        Style::Solid,
        Style::Round,
        Style::Sharp,
        Style::Stroke,
        Style::Square,
        Style::Logo,
        Style::Brand,
        Style::Monochrome,
        Style::Line,
        Style::Alternate,
    ];

    /// Human-readable style name, used for display and name-ordered listing.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Filled => "Filled",
            Self::Outlined => "Outlined",
            Self::Bold => "Bold",
            Self::ExtraBold => "Extra Bold",
            Self::Solid => "Solid",
            Self::Round => "Round",
            Self::Sharp => "Sharp",
            Self::Stroke => "Stroke",
            Self::Square => "Square",
            Self::Logo => "Logo",
            Self::Brand => "Brand",
            Self::Monochrome => "Monochrome",
            Self::Line => "Line",
            Self::Alternate => "Alt",
            Self::All => "All",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One concrete (pack, glyph, style) triple with a description.
///
/// Identity is by value; entries are used directly as set and map members
/// for favorites and recents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconEntry {
    /// The pack this glyph ships with
    pub pack: Pack,
    /// The copyable glyph identifier (e.g. `bx-arrow-up`)
    pub glyph: String,
    /// The rendering variant of this glyph
    pub style: Style,
    /// Human-readable description, matched by search
    pub description: String,
}

impl IconEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(
        pack: Pack,
        glyph: impl Into<String>,
        style: Style,
        description: impl Into<String>,
    ) -> Self {
        Self {
            pack,
            glyph: glyph.into(),
            style,
            description: description.into(),
        }
    }
}

/// Errors detected while building a [`Catalog`].
///
/// These are startup invariant violations and are surfaced to the caller
/// instead of being swallowed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog would contain no entries at all.
    #[error("catalog has no icon entries")]
    Empty,
    /// An entry carried the `All` sentinel instead of a concrete style.
    #[error("entry '{glyph}' uses the All sentinel as its style")]
    SentinelStyle {
        /// The offending glyph identifier
        glyph: String,
    },
    /// The bundled pack data failed to parse.
    #[error("bundled pack data is malformed: {0}")]
    Data(#[from] serde_json::Error),
}

/// The full immutable index over all icon entries.
pub struct Catalog {
    by_pack: HashMap<Pack, Vec<IconEntry>>,
    by_style: HashMap<Style, Vec<IconEntry>>,
    all: Vec<IconEntry>,
    declared_packs: Vec<Pack>,
    ordered_packs: Vec<Pack>,
    ordered_styles: Vec<Style>,
}

impl Catalog {
    /// Build a catalog from entries in declaration order.
    ///
    /// Entry order is preserved everywhere: `all()` and the per-pack and
    /// per-style indices keep the order entries were declared in.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when `entries` is empty and
    /// [`CatalogError::SentinelStyle`] when an entry carries [`Style::All`].
    pub fn new(entries: Vec<IconEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_pack: HashMap<Pack, Vec<IconEntry>> = HashMap::new();
        let mut by_style: HashMap<Style, Vec<IconEntry>> = HashMap::new();
        let mut declared_packs = Vec::new();

        for entry in &entries {
            if entry.style == Style::All {
                return Err(CatalogError::SentinelStyle {
                    glyph: entry.glyph.clone(),
                });
            }
            if !declared_packs.contains(&entry.pack) {
                declared_packs.push(entry.pack);
            }
            by_pack.entry(entry.pack).or_default().push(entry.clone());
            by_style.entry(entry.style).or_default().push(entry.clone());
        }

        // The sentinel indexes the full list, so style lookups never special-case it.
        by_style.insert(Style::All, entries.clone());

        let mut ordered_packs: Vec<Pack> = by_pack.keys().copied().collect();
        ordered_packs.sort_by_key(Pack::name);

        let mut ordered_styles: Vec<Style> = by_style.keys().copied().collect();
        ordered_styles.sort_by_key(Style::display_name);

        Ok(Self {
            by_pack,
            by_style,
            all: entries,
            declared_packs,
            ordered_packs,
            ordered_styles,
        })
    }

    /// Entries for one pack, in declaration order. Empty for unknown packs.
    #[must_use]
    pub fn by_pack(&self, pack: Pack) -> &[IconEntry] {
        self.by_pack.get(&pack).map_or(&[], Vec::as_slice)
    }

    /// Entries for one style, in declaration order. [`Style::All`] maps to
    /// the full list; empty for styles with no entries.
    #[must_use]
    pub fn by_style(&self, style: Style) -> &[IconEntry] {
        self.by_style.get(&style).map_or(&[], Vec::as_slice)
    }

    /// Every entry, in declaration order.
    #[must_use]
    pub fn all(&self) -> &[IconEntry] {
        &self.all
    }

    /// Packs present in the catalog, in declaration order.
    #[must_use]
    pub fn declared_packs(&self) -> &[Pack] {
        &self.declared_packs
    }

    /// Packs present in the catalog, sorted by name for stable enumeration.
    #[must_use]
    pub fn ordered_packs(&self) -> &[Pack] {
        &self.ordered_packs
    }

    /// Styles present in the catalog, sorted by name for stable enumeration.
    ///
    /// Includes the [`Style::All`] sentinel, so the number of concrete
    /// styles is [`Catalog::concrete_style_count`].
    #[must_use]
    pub fn ordered_styles(&self) -> &[Style] {
        &self.ordered_styles
    }

    /// Number of concrete styles present in the catalog.
    #[must_use]
    pub fn concrete_style_count(&self) -> usize {
        self.ordered_styles.len() - 1
    }

    /// First pack in name order; the initial selection at session start.
    #[must_use]
    pub fn first_pack(&self) -> Pack {
        self.ordered_packs[0]
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("packs", &self.ordered_packs)
            .field("entries", &self.all.len())
            .finish()
    }
}
