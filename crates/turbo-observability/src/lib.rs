//! Structured logging for the product detail page engine.
//!
//! This crate provides:
//! - `ScreenId` - Identifier of one engine instance, attached to every entry
//! - `StructuredLogger` - Structured logging with screen context, emitted through `tracing`
//! - `init_tracing` - Subscriber setup shared by binaries

mod logging;
mod screen;
mod subscriber;

pub use logging::*;
pub use screen::ScreenId;
pub use subscriber::init_tracing;
