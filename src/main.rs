//! Robot Arena entry point
//!
//! Browser: canvas drawing, arrow-key input, requestAnimationFrame pacing.
//! Native: headless scripted run paced at the tick rate, draw calls logged.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use robot_arena::consts::*;
    use robot_arena::platform::{ExternalPacing, KeyboardState};
    use robot_arena::renderer::CanvasSink;
    use robot_arena::sim::SimState;
    use robot_arena::{Settings, Simulation};

    type BrowserSimulation = Simulation<Rc<RefCell<KeyboardState>>, CanvasSink, ExternalPacing>;

    /// App instance holding the simulation and frame timing
    struct App {
        sim: BrowserSimulation,
        accumulator: f32,
        last_time: f64,
        running: bool,
    }

    impl App {
        /// Run as many fixed ticks as the elapsed time calls for
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                if !self.sim.step() {
                    self.running = false;
                    return;
                }
                self.accumulator -= TICK_DT;
                substeps += 1;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Robot Arena starting...");

        let settings = Settings::load();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let sink = CanvasSink::new(&canvas, ARENA_WIDTH, ARENA_HEIGHT, settings.canvas_scale)
            .expect("Failed to set up canvas");

        let keyboard = Rc::new(RefCell::new(KeyboardState::default()));
        setup_keyboard(&document, keyboard.clone());
        setup_focus_release(&window, keyboard.clone());

        let sim = Simulation::new(SimState::new(), keyboard, sink, ExternalPacing, settings);
        let app = Rc::new(RefCell::new(App {
            sim,
            accumulator: 0.0,
            last_time: 0.0,
            running: true,
        }));

        request_animation_frame(app);

        log::info!("Robot Arena running! Arrow keys move, Escape quits");
    }

    fn setup_keyboard(document: &web_sys::Document, keyboard: Rc<RefCell<KeyboardState>>) {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let keyboard = keyboard.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if keyboard.borrow_mut().handle_key(&event.key(), pressed) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keyup never arrives once the window loses focus
    fn setup_focus_release(window: &web_sys::Window, keyboard: Rc<RefCell<KeyboardState>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            keyboard.borrow_mut().release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            app_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn app_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            a.last_time = time;

            a.update(dt);
            if !a.running {
                log::info!("Robot Arena stopped");
                return;
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use robot_arena::consts::TICK_RATE;
    use robot_arena::platform::{ScriptedInput, SleepLimiter};
    use robot_arena::renderer::RecordingSink;
    use robot_arena::sim::SimState;
    use robot_arena::{Settings, Simulation};

    env_logger::init();
    log::info!("Robot Arena (native) starting...");

    let settings = Settings::load();
    let input = ScriptedInput::demo(settings.headless_ticks);
    log::info!(
        "Headless run: {} scripted ticks at {} Hz",
        input.remaining(),
        TICK_RATE
    );

    let mut sim = Simulation::new(
        SimState::new(),
        input,
        RecordingSink::new(),
        SleepLimiter::new(TICK_RATE),
        settings,
    );
    let ticks = sim.run();

    log::info!(
        "Finished after {} ticks, {} frames drawn",
        ticks,
        sim.sink().frames_presented()
    );
    match sim.state().snapshot() {
        Ok(json) => log::info!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
