use shared::MapConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom::{ensure_script, ensure_stylesheet};
use crate::leaflet;
use crate::services::logging::Logger;

const STYLESHEET_ID: &str = "leaflet-css";
const SCRIPT_ID: &str = "leaflet-js";

#[derive(Properties, PartialEq)]
pub struct MapPanelProps {
    pub config: MapConfig,
}

fn draw(config: &MapConfig) {
    match leaflet::draw_map(config) {
        Ok(_) => Logger::info_with_component(
            "map",
            &format!("Map ready with {} markers", config.markers.len()),
        ),
        Err(e) => Logger::error_with_component("map", &format!("Failed to draw map: {:?}", e)),
    }
}

/// Static reference map, drawn once Leaflet's script has loaded
#[function_component(MapPanel)]
pub fn map_panel(props: &MapPanelProps) -> Html {
    {
        let config = props.config.clone();

        use_effect_with((), move |_| {
            let mut listeners: Vec<(web_sys::Element, &'static str, Closure<dyn FnMut(web_sys::Event)>)> = Vec::new();

            if let Err(e) = ensure_stylesheet(STYLESHEET_ID, &config.stylesheet_url) {
                Logger::warn_with_component("map", &format!("Could not add Leaflet stylesheet: {:?}", e));
            }

            if leaflet::is_loaded() {
                draw(&config);
            } else {
                match ensure_script(SCRIPT_ID, &config.script_url) {
                    Ok((script, _)) => {
                        let on_load = {
                            let config = config.clone();
                            Closure::wrap(Box::new(move |_: web_sys::Event| draw(&config))
                                as Box<dyn FnMut(web_sys::Event)>)
                        };
                        let on_error = Closure::wrap(Box::new(|_: web_sys::Event| {
                            Logger::error_with_component("map", "Leaflet script failed to load");
                        }) as Box<dyn FnMut(web_sys::Event)>);

                        for (event, closure) in [("load", on_load), ("error", on_error)] {
                            let _ = script.add_event_listener_with_callback(
                                event,
                                closure.as_ref().unchecked_ref(),
                            );
                            listeners.push((script.clone(), event, closure));
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component("map", &format!("Could not add Leaflet script: {:?}", e));
                    }
                }
            }

            move || {
                for (target, event, closure) in listeners.iter() {
                    let _ = target.remove_event_listener_with_callback(
                        event,
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <div id={props.config.container_id.clone()} class="map"></div>
    }
}
