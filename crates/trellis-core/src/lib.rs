//! Core primitives for Trellis.
//!
//! This crate provides the building blocks the widget tree is made of:
//!
//! - **Geometry**: [`Rect`], an axis-aligned rectangle with inclusive edges
//! - **Variant**: [`Variant`], a type-erased value used for drag payloads
//! - **Skins**: [`Skin`] and the [`SkinSource`] lookup contract
//! - **Errors**: typed failure reasons for tree, focus and drag operations
//! - **Logging**: tracing targets and span helpers
//!
//! # Example
//!
//! ```
//! use trellis_core::{Rect, Variant};
//!
//! let area = Rect::from_xywh(10.0, 10.0, 100.0, 40.0);
//! assert!(area.contains(109.0, 49.0));
//! assert!(!area.contains(110.0, 49.0));
//!
//! let payload = Variant::new("card #7".to_string());
//! assert_eq!(payload.get::<String>().unwrap(), "card #7");
//! ```

mod error;
pub mod logging;
mod rect;
pub mod skin;
mod variant;

pub use error::{DragError, FocusError, Result, TreeError, TreeResult, TrellisError};
pub use logging::PerfSpan;
pub use rect::Rect;
pub use skin::{Color, FontSpec, Skin, SkinError, SkinSource};
pub use variant::{Variant, VariantError};
