//! Browser tests for the viewer; run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use plant_growth::PlantGrowth;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(400);
    canvas.set_height(400);
    canvas
}

fn viewer(yaml: &str) -> PlantGrowth {
    PlantGrowth::new(canvas(), Some(yaml.to_string())).unwrap()
}

#[wasm_bindgen_test]
fn test_idle_until_started() {
    let mut plant = viewer("seed: 1");
    assert!(!plant.frame(0.016));
    assert_eq!(plant.progress(), 0.0);
    assert_eq!(plant.stage_name(), "Seed");
}

#[wasm_bindgen_test]
fn test_flower_grows_to_completion() {
    let mut plant = viewer("seed: 1");
    plant.start();

    let mut frames = 0;
    while plant.frame(0.016) {
        frames += 1;
        if frames == 50 {
            // 50 ticks of 0.5
            assert_eq!(plant.progress(), 25.0);
            assert_eq!(plant.stage_name(), "Sprouting");
        }
    }

    assert_eq!(frames, 199);
    assert_eq!(plant.progress(), 100.0);
    assert!(!plant.is_growing());
    assert!(!plant.frame(0.016));
}

#[wasm_bindgen_test]
fn test_reset_stops_growth() {
    let mut plant = viewer("seed: 1");
    plant.start();
    for _ in 0..10 {
        plant.frame(0.016);
    }
    plant.reset();

    assert_eq!(plant.progress(), 0.0);
    assert!(!plant.is_growing());
    assert!(!plant.frame(0.016));
    assert_eq!(plant.progress(), 0.0);
}

#[wasm_bindgen_test]
fn test_apple_tree_scene_export() {
    let mut plant = viewer("variant: apple_tree\nseed: 3\nclock:\n  step: 10\n");
    plant.start();
    for _ in 0..10 {
        plant.frame(0.016);
    }
    assert_eq!(plant.progress(), 100.0);
    assert_eq!(plant.stage_name(), "Fruiting Tree");

    let json = plant.scene_json().unwrap();
    assert!(json.contains("\"apples\""));
    // Keeps redrawing for sway after growth is done
    assert!(plant.frame(0.016));
}

#[wasm_bindgen_test]
fn test_flat_variant_has_no_scene() {
    assert!(viewer("").scene_json().is_err());
}

#[wasm_bindgen_test]
fn test_bad_config_rejected() {
    assert!(PlantGrowth::new(canvas(), Some("clock:\n  step: -1\n".to_string())).is_err());
}
