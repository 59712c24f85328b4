use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod animation;
pub mod canvas;
pub mod config;
pub mod growth;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;

use animation::GrowthSession;
use canvas::{CanvasSurface, draw_plant};
use config::ViewerConfig;
use growth::Variant;
use mesh::tessellate;
use render::{Camera, RenderPipeline};
use scene::{SceneNode, build_apple_tree_scene, build_flower_scene};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
}

/// Drawing target for the configured variant. `None` when the canvas could
/// not hand out a context; frames are then skipped.
enum Surface {
    Canvas(Option<CanvasSurface>),
    WebGl(Option<RenderPipeline>),
}

/// Plant growth viewer exposed to JavaScript.
///
/// The host calls `frame(dt)` from `requestAnimationFrame` and requests
/// another frame only while it returns `true`.
#[wasm_bindgen]
pub struct PlantGrowth {
    config: ViewerConfig,
    session: GrowthSession,
    surface: Surface,
    seed: u64,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl PlantGrowth {
    /// Create a viewer drawing into `canvas`, optionally configured by a
    /// YAML document
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_yaml: Option<String>) -> Result<PlantGrowth, JsValue> {
        let config = ViewerConfig::from_yaml(config_yaml.as_deref().unwrap_or("")).map_err(|e| {
            log::error!("Invalid viewer config: {}", e);
            JsValue::from_str(&e)
        })?;

        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let surface = match config.variant {
            Variant::Flower2d => Surface::Canvas(CanvasSurface::from_canvas(&canvas)),
            Variant::Flower3d | Variant::AppleTree => {
                let camera = if config.variant == Variant::AppleTree {
                    Camera::tree()
                } else {
                    Camera::flower()
                };
                let gl = canvas
                    .get_context("webgl2")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<WebGl2RenderingContext>().ok());
                let pipeline = gl
                    .map(|gl| RenderPipeline::new(gl, width, height, camera))
                    .transpose()
                    .map_err(|e| JsValue::from_str(&e))?;
                Surface::WebGl(pipeline)
            }
        };

        let seed = config.seed.unwrap_or_else(random_seed);
        log::info!(
            "Plant growth viewer created: {:?}, {}x{}, seed {}",
            config.variant,
            width,
            height,
            seed
        );

        let mut viewer = Self {
            session: GrowthSession::new(config.variant, config.clock),
            config,
            surface,
            seed,
            width: width as f32,
            height: height as f32,
        };
        viewer.draw(0.0, 0.0);
        Ok(viewer)
    }

    /// Grow from the seed
    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.session.start();
    }

    /// Stop growing and redraw the bare seed
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
        if self.config.seed.is_none() {
            self.seed = random_seed();
        }
        self.draw(0.0, self.session.elapsed());
    }

    /// Advance and draw one frame. Returns whether another frame is wanted.
    #[wasm_bindgen]
    pub fn frame(&mut self, dt: f32) -> bool {
        let outcome = self.session.step(dt);
        if let Some((progress, elapsed)) = outcome.draw {
            self.draw(progress, elapsed);
        }
        outcome.again
    }

    /// Resize the drawing area and redraw at the current progress
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        if let Surface::WebGl(Some(pipeline)) = &mut self.surface {
            pipeline.resize(width as i32, height as i32);
        }
        self.draw(self.session.progress(), self.session.elapsed());
    }

    /// Growth progress in [0, 100]
    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.session.progress()
    }

    #[wasm_bindgen]
    pub fn stage_name(&self) -> String {
        self.session.stage().name.to_string()
    }

    #[wasm_bindgen]
    pub fn stage_description(&self) -> String {
        self.session.stage().description.to_string()
    }

    #[wasm_bindgen]
    pub fn is_growing(&self) -> bool {
        self.session.is_growing()
    }

    /// Current 3D scene graph as JSON
    #[wasm_bindgen]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        compose_scene(&self.config, self.session.progress(), self.session.elapsed(), self.seed)
            .ok_or_else(|| JsValue::from_str("Scene export is only available for 3D variants"))?
            .to_json()
            .map_err(|e| JsValue::from_str(&e))
    }
}

impl PlantGrowth {
    fn draw(&mut self, progress: f32, elapsed: f32) {
        match &mut self.surface {
            Surface::Canvas(Some(surface)) => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                let commands = draw_plant(
                    progress,
                    self.width,
                    self.height,
                    self.config.variant.visibility(),
                    &self.config.canvas,
                    &mut rng,
                );
                if let Err(e) = surface.execute(&commands) {
                    log::warn!("Canvas draw failed: {}", e);
                }
            }
            Surface::WebGl(Some(pipeline)) => {
                if let Some(scene) = compose_scene(&self.config, progress, elapsed, self.seed) {
                    pipeline.upload_mesh(&tessellate(&scene));
                    pipeline.render();
                }
            }
            Surface::Canvas(None) | Surface::WebGl(None) => {
                log::debug!("No drawing context, skipping frame at {:.1}%", progress);
            }
        }
    }
}

/// Scene for the 3D variants; the flat variant has none
fn compose_scene(config: &ViewerConfig, progress: f32, elapsed: f32, seed: u64) -> Option<SceneNode> {
    let table = config.variant.visibility();
    match config.variant {
        Variant::Flower2d => None,
        Variant::Flower3d => Some(build_flower_scene(progress, elapsed, table)),
        Variant::AppleTree => {
            let mut rng = StdRng::seed_from_u64(seed);
            Some(build_apple_tree_scene(progress, elapsed, table, &config.tree, &mut rng))
        }
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> ViewerConfig {
        ViewerConfig::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_flat_variant_has_no_scene() {
        assert!(compose_scene(&config(""), 50.0, 0.0, 1).is_none());
    }

    #[test]
    fn test_scene_matches_variant() {
        let flower = compose_scene(&config("variant: flower3d"), 95.0, 0.0, 1).unwrap();
        assert_eq!(flower.name, "plant");
        assert!(flower.find("flower").is_some());

        let tree = compose_scene(&config("variant: apple_tree"), 95.0, 0.0, 1).unwrap();
        assert_eq!(tree.name, "tree");
        assert!(tree.find("apples").is_some());
    }

    #[test]
    fn test_same_seed_same_tree() {
        let cfg = config("variant: apple_tree");
        let a = compose_scene(&cfg, 100.0, 1.5, 42).unwrap();
        let b = compose_scene(&cfg, 100.0, 1.5, 42).unwrap();
        assert_eq!(a, b);
    }
}
