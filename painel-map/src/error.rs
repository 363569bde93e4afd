use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MapError {
    #[error("Tile URL '{0}' must contain the {{z}}, {{x}} and {{y}} placeholders")]
    InvalidTileUrl(String),

    #[error("Invalid zoom bounds: min {min} is greater than max {max}")]
    InvalidZoomBounds { min: u8, max: u8 },

    #[error("Initial zoom {zoom} is outside {min}..={max}")]
    ZoomOutOfBounds { zoom: u8, min: u8, max: u8 },

    #[error("Invalid center [{lat}, {lon}]")]
    InvalidCenter { lat: f64, lon: f64 },

    #[error("Failed to serialize map configuration: {0}")]
    Serialize(String),
}
