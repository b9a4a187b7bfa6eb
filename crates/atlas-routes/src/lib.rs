//! # atlas-routes
//!
//! The canonical route table of the catalog shell and the pieces that read it.
//!
//! ```text
//! /                  → redirect → /foreign-llm
//! /foreign-llm       → ForeignLLM
//! /domestic-llm      → DomesticLLM
//! /multimodal-llm    → MultimodalLLM
//! /ai-drawing        → AIDrawing
//! /video-creation    → VideoCreation
//! /audio-processing  → AudioProcessing
//! /design-tools      → DesignTools
//! /dev-tools         → DevTools
//! /prompts           → Prompts
//! /favorites         → Favorites
//! /preferences       → Preferences
//! /about             → About
//! ```
//!
//! - [`RouteTable`]: immutable lookup, exact and case-sensitive, with the
//!   root redirect as the only fallback
//! - [`Navigator`]: the active route of a shell and its back stack
//! - [`MenuCommand`]: shell menu entries that open pages in their own windows

pub mod error;
pub mod location;
pub mod menu;
pub mod navigator;
pub mod table;

pub use error::RouteError;
pub use location::APP_DOCUMENT;
pub use menu::{MenuCommand, MenuEffect, WindowRequest};
pub use navigator::Navigator;
pub use table::{ROOT_PATH, Redirect, RouteEntry, RouteTable, RouteTableBuilder};
