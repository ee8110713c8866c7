//! Domain services: quote generation and image rendering.

pub mod providers;
pub mod quote;
pub mod renderer;

pub use quote::QuoteGenerator;
pub use renderer::QuoteRenderer;
