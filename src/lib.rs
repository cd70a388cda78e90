//! Gridsheet - pack a folder of images into one grid spritesheet
//!
//! This library provides functionality to:
//! - Find the supported images in a folder, in natural sort order
//! - Decode them to RGBA, skipping files that fail to load
//! - Lay them out in a square-ish grid of uniform cells and paste them
//! - Save the result as a PNG

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod natural;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod spritesheet;

pub use error::{DecodeError, SheetError};
pub use layout::GridLayout;
pub use loader::LoadedImage;
pub use pipeline::{run_batch, BatchReport, SheetOptions};
pub use spritesheet::Spritesheet;
