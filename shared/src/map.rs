use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Pin with the HTML shown in its popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub position: LatLng,
    pub popup_html: String,
}

/// Static reference map shown under the tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Id of the element the map is drawn into
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub stylesheet_url: String,
    pub script_url: String,
    pub markers: Vec<MapMarker>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: LatLng::new(43.6117, 3.8777),
            zoom: 10,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"Map data © <a href="https://openstreetmap.org">OpenStreetMap</a> contributors"#
                .to_string(),
            stylesheet_url: "https://unpkg.com/leaflet/dist/leaflet.css".to_string(),
            script_url: "https://unpkg.com/leaflet/dist/leaflet-src.js".to_string(),
            markers: vec![
                MapMarker {
                    position: LatLng::new(43.6117, 3.8777),
                    popup_html: r#"<b>Montpellier</b><br/><a href="http://localhost">Le Refuge vert.</a>"#
                        .to_string(),
                },
                MapMarker {
                    position: LatLng::new(42.6977, 2.8953),
                    popup_html: "<b>Perpignan</b><br/>Ville du sud de la France, près de la mer."
                        .to_string(),
                },
                MapMarker {
                    position: LatLng::new(43.5, 3.8),
                    popup_html: "<b>Autre lieu</b><br/>Localisation intermédiaire.".to_string(),
                },
            ],
        }
    }
}
