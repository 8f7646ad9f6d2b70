//! View-state engine for the product detail page.
//!
//! This crate provides:
//!
//! - **Description**: HTML description to tinted display rows
//! - **Resolver**: color value to variant lookup
//! - **Carousel**: auto-advancing image pager behind a `TickTimer` seam
//! - **Tabs**: tab selection and per-tab row content
//! - **Page**: `ProductPage`, the façade that publishes `ViewSnapshot`s
//! - **Runtime**: a tokio task per screen with a real interval timer
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_pdp::prelude::*;
//!
//! let screen = spawn_screen(EngineConfig::default(), logger)?;
//! screen.load_catalog(std::fs::read("response.json")?).await?;
//! screen.send(Intent::SelectColor(101))?;
//!
//! let mut updates = screen.subscribe();
//! while updates.changed().await.is_ok() {
//!     render(&updates.borrow());
//! }
//! ```

pub mod carousel;
pub mod config;
pub mod description;
pub mod error;
pub mod page;
pub mod resolver;
pub mod runtime;
pub mod tabs;

pub use carousel::{
    CarouselController, CarouselPhase, CarouselState, Direction, ManualTimer, TickOutcome,
    TickTimer, TimerToken,
};
pub use config::{EngineConfig, SpecEntry, TabContentSource, DEFAULT_CAROUSEL_INTERVAL_MS};
pub use description::{format_description, positional_tint, DisplayBlock, Tint, STRIPE_MARKER};
pub use error::EngineError;
pub use page::{ColorSwatch, Intent, ProductHeader, ProductPage, ViewSnapshot};
pub use resolver::{color_option, resolve_variant, resolve_variant_position};
pub use runtime::{spawn_screen, IntervalTimer, ScreenHandle};
pub use tabs::{
    AttributeDisplayRow, ReviewRow, SpecRow, Tab, TabContent, TabSet, TabState,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::carousel::{CarouselPhase, ManualTimer, TickTimer};
    pub use crate::config::EngineConfig;
    pub use crate::error::EngineError;
    pub use crate::page::{Intent, ProductPage, ViewSnapshot};
    pub use crate::runtime::{spawn_screen, ScreenHandle};
    pub use crate::tabs::{TabContent, TabSet};
}
