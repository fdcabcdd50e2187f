//! Rendering module
//!
//! Frames are built as plain draw commands and replayed onto a Canvas 2D
//! context in the browser.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{DrawCommand, Paint, build_frame};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
