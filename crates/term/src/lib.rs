//! Terminal rendering backend.
//!
//! Implements the render-adapter contract at one "pixel" per character
//! cell and flushes the resulting framebuffer to a real terminal with
//! crossterm. The grid and life crates never see any of this; they only
//! emit abstract drawing commands.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use canvas::CharCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
