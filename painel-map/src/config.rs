use crate::error::MapError;
use serde::Serialize;

pub const DEFAULT_TILE_URL: &str = "https://api.mapbox.com/styles/v1/mapbox/light-v10/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const DEFAULT_ATTRIBUTION: &str = "Mapbox";

/// Roughly the geographic middle of Brazil
pub const BRAZIL_CENTER: [f64; 2] = [-15.0, -50.0];
pub const DEFAULT_ZOOM: u8 = 4;

/// Options handed to `L.tileLayer`. Field names serialize to the option keys
/// Leaflet expects; `accessToken` fills the `{accessToken}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerConfig {
    pub url: String,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tile_size: u32,
    pub zoom_offset: i8,
    pub access_token: String,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            min_zoom: 0,
            max_zoom: 18,
            // Mapbox style tiles are 512px, so shift zoom by one to keep scale
            tile_size: 512,
            zoom_offset: -1,
            access_token: String::new(),
        }
    }
}

/// Everything the page needs to draw the map. Built once at startup and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub tile_layer: TileLayerConfig,
    /// `[latitude, longitude]`
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_layer: TileLayerConfig::default(),
            center: BRAZIL_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.tile_layer.access_token = token.into();
        self
    }

    pub fn with_tile_url(mut self, url: impl Into<String>) -> Self {
        self.tile_layer.url = url.into();
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.tile_layer.attribution = attribution.into();
        self
    }

    pub fn with_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.center = [latitude, longitude];
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_zoom_bounds(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.tile_layer.min_zoom = min_zoom;
        self.tile_layer.max_zoom = max_zoom;
        self
    }

    pub fn has_access_token(&self) -> bool {
        !self.tile_layer.access_token.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), MapError> {
        let tile = &self.tile_layer;

        if !["{z}", "{x}", "{y}"]
            .iter()
            .all(|placeholder| tile.url.contains(placeholder))
        {
            return Err(MapError::InvalidTileUrl(tile.url.clone()));
        }

        if tile.min_zoom > tile.max_zoom {
            return Err(MapError::InvalidZoomBounds {
                min: tile.min_zoom,
                max: tile.max_zoom,
            });
        }

        if self.zoom < tile.min_zoom || self.zoom > tile.max_zoom {
            return Err(MapError::ZoomOutOfBounds {
                zoom: self.zoom,
                min: tile.min_zoom,
                max: tile.max_zoom,
            });
        }

        let [lat, lon] = self.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(MapError::InvalidCenter { lat, lon });
        }

        Ok(())
    }

    /// JSON for embedding inside a `<script>` element. `<` is escaped so the
    /// payload can never close the element early.
    pub fn to_embedded_json(&self) -> Result<String, MapError> {
        let json = serde_json::to_string(self).map_err(|e| MapError::Serialize(e.to_string()))?;
        Ok(json.replace('<', "\\u003c"))
    }
}
