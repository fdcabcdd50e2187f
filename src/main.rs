//! Satellite Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_sketch {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use satellite_bounce::Settings;
    use satellite_bounce::renderer::{CanvasRenderer, build_frame};
    use satellite_bounce::sim::{ClickOutcome, Simulation};

    /// Sketch instance holding all state
    struct Sketch {
        sim: Simulation,
        renderer: CanvasRenderer,
        settings: Settings,
        canvas: HtmlCanvasElement,
        last_time: Option<f64>,
    }

    impl Sketch {
        /// Step the simulation and draw one frame
        fn frame(&mut self, time: f64) {
            let dt = self.last_time.map_or(0.0, |last| (time - last) as f32);
            self.last_time = Some(time);

            self.sim.advance(dt);

            let commands = build_frame(&self.sim.snapshot(), &self.settings);
            if let Err(e) = self.renderer.render(&commands) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Match the canvas to the window
        fn resize(&mut self) {
            let (width, height) = fit_to_window(&self.canvas);
            self.sim.set_bounds(width, height);
        }

        /// Convert a mouse event to canvas coordinates
        fn event_pos(&self, event: &MouseEvent) -> (f32, f32) {
            let rect = self.canvas.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            let y = event.client_y() as f64 - rect.top();
            (x as f32, y as f32)
        }

        fn set_cursor(&self, pointer: bool) {
            let cursor = if pointer { "pointer" } else { "default" };
            let _ = self.canvas.style().set_property("cursor", cursor);
        }
    }

    /// Size the canvas to the window's inner size
    fn fit_to_window(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (canvas.width() as f32, canvas.height() as f32);
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.width() as f64);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.height() as f64);

        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        (width as f32, height as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Satellite Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to get 2d context");

        let settings = Settings::load();

        let (width, height) = fit_to_window(&canvas);
        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::with_config(
            settings.sim.clone(),
            width,
            height,
            Pcg32::seed_from_u64(seed),
        );
        log::info!("Sketch initialized with seed: {}", seed);

        let sketch = Rc::new(RefCell::new(Sketch {
            sim,
            renderer,
            settings,
            canvas: canvas.clone(),
            last_time: None,
        }));

        setup_input_handlers(&canvas, sketch.clone());
        setup_resize(sketch.clone());

        request_animation_frame(sketch);

        log::info!("Satellite Bounce running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, sketch: Rc<RefCell<Sketch>>) {
        // Click - stop the circle or pick a satellite
        {
            let sketch = sketch.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut s = sketch.borrow_mut();
                let (x, y) = s.event_pos(&event);
                match s.sim.click(x, y) {
                    ClickOutcome::Ignored => {}
                    ClickOutcome::Stopped => log::info!("Circle stopped"),
                    ClickOutcome::Selected { index, color } => {
                        log::info!("Picked satellite {} ({})", index, color.to_css());
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - pointer cursor over clickable targets
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let s = sketch.borrow();
                if !s.settings.hover_cursor {
                    return;
                }
                let (x, y) = s.event_pos(&event);
                s.set_cursor(s.sim.hover(x, y).is_clickable());
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(sketch: Rc<RefCell<Sketch>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            sketch.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(sketch: Rc<RefCell<Sketch>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(sketch, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(sketch: Rc<RefCell<Sketch>>, time: f64) {
        sketch.borrow_mut().frame(time);
        request_animation_frame(sketch);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_sketch::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Satellite Bounce (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    run_headless(2024);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run: bounce for a few seconds, stop, reveal, pick a satellite
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64) {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use satellite_bounce::Settings;
    use satellite_bounce::renderer::build_frame;
    use satellite_bounce::sim::{ClickOutcome, Simulation};

    const FRAME_MS: f32 = 1000.0 / 60.0;
    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    let settings = Settings::load();
    let mut sim = Simulation::with_config(
        settings.sim.clone(),
        WIDTH,
        HEIGHT,
        Pcg32::seed_from_u64(seed),
    );
    log::info!("Seed {}, canvas {}x{}", seed, WIDTH, HEIGHT);

    for frame in 0..600 {
        let hit = sim.advance(FRAME_MS);
        if hit.any() {
            let c = sim.circle();
            log::info!(
                "Frame {}: bounce (x: {}, y: {}) at ({:.1}, {:.1})",
                frame,
                hit.x,
                hit.y,
                c.pos.x,
                c.pos.y
            );
        }
    }

    let center = sim.circle().pos;
    if sim.click(center.x, center.y) != ClickOutcome::Stopped {
        log::warn!("Click at circle center did not stop it");
        return;
    }
    log::info!("Stopped at ({:.1}, {:.1})", center.x, center.y);

    let mut reveal_frames = 0;
    while !sim.reveal().is_complete() && reveal_frames < 600 {
        sim.advance(FRAME_MS);
        reveal_frames += 1;
    }
    let frame = build_frame(&sim.snapshot(), &settings);
    log::info!(
        "Reveal finished after {} frames ({} draw commands)",
        reveal_frames,
        frame.len()
    );

    let Some(target) = sim.satellite_positions().next() else {
        log::warn!("No satellites to pick");
        return;
    };
    match sim.click(target.x, target.y) {
        ClickOutcome::Selected { index, color } => {
            log::info!("Picked satellite {} -> {}", index, color.to_css());
        }
        other => log::warn!("Unexpected click outcome: {:?}", other),
    }
    log::info!("Running again: {:?}", sim.run_state());
}
