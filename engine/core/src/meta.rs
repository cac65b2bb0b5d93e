//! Application Metadata
//!
//! Pre-loaded data supplied by host start-up code: version strings and the
//! stage icon images. The effect orchestrator reads these when answering
//! version and stage-icon requests; the engine never loads them itself.

use std::sync::Arc;

/// One pre-loaded stage icon image.
///
/// The engine treats the image bytes as opaque; decoding and rendering is
/// the host's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageIcon {
    /// Resource name (e.g. `icon-32.png`)
    pub name: String,
    /// Raw image bytes
    pub bytes: Arc<[u8]>,
}

impl StageIcon {
    /// Create a stage icon from a resource name and its raw bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Pre-loaded application metadata.
///
/// Built once by the host and handed to the engine at assembly. Absent
/// fields are not defaulted; the version effect treats a missing string as
/// a hard failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppMeta {
    app_version: Option<String>,
    font_lib_version: Option<String>,
    stage_icons: Vec<StageIcon>,
}

impl AppMeta {
    /// Metadata with nothing pre-loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the application version string.
    #[must_use]
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    /// Set the icon font library version string.
    #[must_use]
    pub fn with_font_lib_version(mut self, version: impl Into<String>) -> Self {
        self.font_lib_version = Some(version.into());
        self
    }

    /// Set the pre-loaded stage icons.
    #[must_use]
    pub fn with_stage_icons(mut self, icons: Vec<StageIcon>) -> Self {
        self.stage_icons = icons;
        self
    }

    /// The application version, if pre-loaded.
    #[must_use]
    pub fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref()
    }

    /// The icon font library version, if pre-loaded.
    #[must_use]
    pub fn font_lib_version(&self) -> Option<&str> {
        self.font_lib_version.as_deref()
    }

    /// The pre-loaded stage icons; may be empty.
    #[must_use]
    pub fn stage_icons(&self) -> &[StageIcon] {
        &self.stage_icons
    }
}
