//! quote-service: inspirational quotes from a generative text model,
//! rendered onto fixed-size cards for download.
//!
//! Two stateless HTTP operations: `GET /api/get-quote` asks the model for a
//! fresh quote, `POST /api/create-image` renders a quote/author pair to PNG.
//! The two never call each other; composition is up to the client.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
