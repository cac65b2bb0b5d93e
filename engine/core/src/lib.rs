//! Iconflow Core - Headless State Engine for the Icon Catalog Browser
//!
//! This crate provides the unidirectional state engine behind the icon
//! browser, completely independent of any UI framework. It can drive a
//! desktop shell, a TUI, or run headless for testing and automation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Presentation Layer                       │
//! │          dispatch(Action)        subscribe() ──► ViewState   │
//! └───────────────┬──────────────────────────▲───────────────────┘
//!                 │                          │
//! ┌───────────────▼──────────────────────────┴───────────────────┐
//! │                        ICONFLOW CORE                         │
//! │   intake ──► debounce ──► Reducer ──► StateBus (replay-1)    │
//! │                 ▲             │                              │
//! │                 └─ results ◄──┴──► EffectRunner              │
//! │                               (clipboard, version, icons)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Engine`]: Assembles and runs the state engine
//! - [`EngineHandle`]: Dispatch actions in, subscribe to states out
//! - [`Action`]: The closed taxonomy of intents and effect results
//! - [`ViewState`]: One immutable snapshot of everything a view renders
//! - [`Reducer`]: The pure `(state, action) -> state` transition function
//! - [`Catalog`]: The immutable icon catalog with its facet indexes
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use iconflow_core::{Action, Engine, EngineConfig, SystemClipboard};
//! use iconflow_core::meta::AppMeta;
//! use tokio_stream::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = Arc::new(iconflow_core::packs::builtin_catalog()?);
//!     let meta = AppMeta::empty()
//!         .with_app_version("1.2.0")
//!         .with_font_lib_version("12.4.0");
//!
//!     let engine = Engine::start(
//!         EngineConfig::from_env(),
//!         catalog,
//!         meta,
//!         Arc::new(SystemClipboard::new()),
//!     );
//!
//!     let mut states = engine.subscribe();
//!     engine.dispatch(Action::SearchChanged("arrow".into()))?;
//!     while let Some(state) = states.next().await {
//!         println!("{}", state.message());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`action`]: The closed action taxonomy
//! - [`catalog`]: Packs, styles, icon entries, and the catalog indexes
//! - [`clipboard`]: Clipboard seam with a system and an in-memory impl
//! - [`config`]: Engine tuning knobs with environment overrides
//! - [`effects`]: The effect orchestrator
//! - [`engine`]: The serialized intake loop and the multicast state bus
//! - [`error`]: Effect failure types
//! - [`meta`]: Pre-loaded application metadata
//! - [`packs`]: The bundled pack data
//! - [`reducer`]: The pure state transition function
//! - [`state`]: View state snapshots and their sub-states
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on any UI framework. It's pure
//! state logic plus the clipboard seam, usable anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod meta;
pub mod packs;
pub mod reducer;
pub mod state;

// Re-exports for convenience
pub use action::Action;
pub use catalog::{Catalog, CatalogError, IconEntry, Pack, Style};
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::EngineConfig;
pub use effects::EffectRunner;
pub use engine::{Engine, EngineError, EngineHandle, StateBus, SubscriberId};
pub use error::EffectError;
pub use meta::{AppMeta, StageIcon};
pub use reducer::Reducer;
pub use state::{
    Activity, AppVersion, DetailsDisplay, PacksFilter, Query, StageIcons, ViewMode, ViewState,
};
