//! The single page of the map scaffold.

use crate::config::MapConfig;
use crate::error::MapError;

const CONFIG_PLACEHOLDER: &str = "__MAP_CONFIG__";

pub const PAGE_TITLE: &str = "Jogo de Administração e Eleições do Brasil";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="pt-BR">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Jogo de Administração e Eleições do Brasil</title>

  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" crossorigin="anonymous" />

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>

  <style>
    #map-loading {
      position: absolute;
      inset: 0;
      display: flex;
      align-items: center;
      justify-content: center;
      z-index: 500;
      pointer-events: none;
    }
  </style>
</head>

<body>
  <div class="container-fluid">
    <div class="row">
      <div class="col-12">
        <h1 class="text-center my-4">Jogo de Administração e Eleições do Brasil</h1>
        <p class="text-center">Versão em desenvolvimento - Mapa com Mapbox integrado</p>
        <hr />

        <div>
          <h3>Mapa do Brasil</h3>
          <p>Mapa interativo do Brasil usando Mapbox e Leaflet.</p>
          <div id="loading-map" class="position-relative">
            <div id="map-loading">
              <div class="spinner-border text-secondary" role="status">
                <span class="visually-hidden">Carregando...</span>
              </div>
            </div>
            <div id="map" style="width: 100%; height: 500px"></div>
          </div>
        </div>

        <div class="mt-4">
          <h3>Próximos Passos</h3>
          <p>Consulte o arquivo roadmap.txt para o plano de desenvolvimento.</p>
          <ul>
            <li>Baixar GeoJSON do IBGE para a pasta data/</li>
            <li>Carregar e exibir GeoJSON do mapa do Brasil</li>
            <li>Integrar dados CSV e interatividade</li>
          </ul>
        </div>
      </div>
    </div>
  </div>

  <script type="application/json" id="map-config">__MAP_CONFIG__</script>
  <script>
    (function () {
      const config = JSON.parse(document.getElementById('map-config').textContent);
      const loading = document.getElementById('map-loading');

      const map = L.map('map', {
        center: config.center,
        zoom: config.zoom,
        minZoom: config.tileLayer.minZoom,
        maxZoom: config.tileLayer.maxZoom
      });

      const basemap = L.tileLayer(config.tileLayer.url, config.tileLayer);
      basemap.once('load', function () { loading.remove(); });
      basemap.on('tileerror', function () { loading.remove(); });
      basemap.addTo(map);
    })();
  </script>
</body>

</html>
"#;

/// Render the page with `config` embedded as JSON for the map script.
pub fn render_page(config: &MapConfig) -> Result<String, MapError> {
    let json = config.to_embedded_json()?;
    Ok(PAGE_TEMPLATE.replacen(CONFIG_PLACEHOLDER, &json, 1))
}
