//! Minimal bindings to the global `L` object exposed by Leaflet's script.

use js_sys::{Array, Object, Reflect};
use shared::{LatLng, MapConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type TileLayer;
    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &Array, zoom: f64) -> Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(position: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;
}

/// Whether Leaflet's script has run and defined `L`
pub fn is_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn lat_lng(position: LatLng) -> Array {
    Array::of2(&position.lat.into(), &position.lng.into())
}

/// Draw the configured map and its markers into `config.container_id`
pub fn draw_map(config: &MapConfig) -> Result<Map, JsValue> {
    let map = create_map(&config.container_id)?;
    map.set_view(&lat_lng(config.center), config.zoom as f64);

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(&config.attribution),
    )?;
    tile_layer(&config.tile_url, &options)?.add_to(&map);

    for pin in &config.markers {
        marker(&lat_lng(pin.position))?
            .add_marker_to(&map)
            .bind_popup(&pin.popup_html);
    }

    Ok(map)
}
