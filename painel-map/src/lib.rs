//! Browser scaffold for the Brazil administration and elections game.
//!
//! The Rust side owns only the immutable [`MapConfig`] and the HTTP serving of
//! the page; tiles, panning and zooming are handled in the browser by Leaflet
//! talking to the configured tile provider.

pub mod config;
pub mod error;
pub mod page;
pub mod server;

pub use config::{MapConfig, TileLayerConfig};
pub use error::MapError;
pub use page::render_page;
pub use server::{bind_listener, router, run_map_server, serve};
