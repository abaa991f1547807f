//! City Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, PageTransitionEvent};

    use city_runner::consts::PLAYER_DISPLAY_OFFSET;
    use city_runner::platform::{Display, HostEvent, Runner, signal_for};
    use city_runner::sim::{BoundingBox, GeometryProvider};
    use city_runner::{SceneConfig, ScenePlan, Settings};

    /// Timer fallback when requestAnimationFrame cannot be scheduled (~60 Hz)
    const FALLBACK_FRAME_MS: i32 = 16;

    /// Marks obstacles cloned for the current run
    const CLONE_ATTR: &str = "data-run-clone";

    type WebRunner = Runner<DomScene, DomDisplay>;

    fn element_by_class(document: &Document, class: &str) -> Option<Element> {
        document.get_elements_by_class_name(class).item(0)
    }

    fn rect_of(element: &Element) -> BoundingBox {
        let rect = element.get_bounding_client_rect();
        BoundingBox::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    /// Clone `template` into `layer` `count` times
    fn clone_into(template: &Element, layer: &Element, count: usize) {
        for _ in 0..count {
            match template.clone_node_with_deep(true) {
                Ok(node) => {
                    let _ = layer.append_child(&node);
                }
                Err(e) => log::warn!("Clone failed: {:?}", e),
            }
        }
    }

    /// Obstacle geometry read from the page
    struct DomScene {
        document: Document,
        player: Element,
        obstacles: Element,
        template: Element,
        config: SceneConfig,
        seed: u64,
    }

    impl DomScene {
        fn new(document: Document, config: SceneConfig, seed: u64) -> Option<Self> {
            let player = document.get_element_by_id("player")?;
            let obstacles = element_by_class(&document, "obstacles")?;
            let template = obstacles.first_element_child()?;
            Some(Self {
                document,
                player,
                obstacles,
                template,
                config,
                seed,
            })
        }

        fn remove_previous_clones(&self) {
            let stale = self.obstacles.query_selector_all(&format!("[{}]", CLONE_ATTR));
            if let Ok(stale) = stale {
                for i in 0..stale.length() {
                    if let Some(node) = stale.item(i) {
                        let _ = self.obstacles.remove_child(&node);
                    }
                }
            }
        }
    }

    impl GeometryProvider for DomScene {
        fn prepare_run(&mut self) {
            self.remove_previous_clones();

            self.seed = self.seed.wrapping_add(1);
            let plan = ScenePlan::generate(self.seed, &self.config);
            for (_, lane) in plan.placements() {
                let Ok(node) = self.template.clone_node_with_deep(true) else {
                    log::warn!("Obstacle clone failed");
                    continue;
                };
                let Ok(clone) = node.dyn_into::<Element>() else {
                    continue;
                };
                let _ = clone.set_attribute(CLONE_ATTR, "");
                if let Some(shape) = clone.first_element_child() {
                    let _ = shape.set_attribute("transform", &format!("translate({}, 0)", lane));
                }
                let _ = self.obstacles.append_child(&clone);
            }
            log::info!(
                "Placed {} obstacles (seed {})",
                plan.obstacle_count(),
                plan.seed
            );
        }

        fn player_box(&self) -> BoundingBox {
            rect_of(&self.player)
        }

        fn obstacle_boxes(&self) -> Vec<BoundingBox> {
            let all = self.document.get_elements_by_class_name("obstacle");
            (0..all.length())
                .filter_map(|i| all.item(i))
                .map(|el| rect_of(&el))
                .collect()
        }
    }

    /// Writes simulation output to the page
    struct DomDisplay {
        player: Element,
        layers: HtmlElement,
        message: HtmlElement,
    }

    impl DomDisplay {
        fn new(document: &Document) -> Option<Self> {
            Some(Self {
                player: document.get_element_by_id("player")?,
                layers: document
                    .get_element_by_id("layers-container")?
                    .dyn_into()
                    .ok()?,
                message: document
                    .get_element_by_id("start-message")?
                    .dyn_into()
                    .ok()?,
            })
        }
    }

    impl Display for DomDisplay {
        fn set_player_vertical_position(&mut self, y: f32) {
            let _ = self
                .player
                .set_attribute("cy", &(y - PLAYER_DISPLAY_OFFSET).to_string());
        }

        fn set_scroll_offset(&mut self, pixels: f32) {
            let _ = self.layers.style().set_property("left", &format!("{}px", pixels));
        }

        fn show_failure_message(&mut self, text: &str) {
            let _ = self.message.class_list().remove_1("fade-out");
            let _ = self.message.style().set_property("background", "red");
            if let Some(label) = self.message.first_element_child() {
                label.set_text_content(Some(text));
            }
        }

        fn hide_start_message(&mut self) {
            let _ = self.message.class_list().add_1("fade-out");
        }
    }

    /// Clone the decorative background layers once
    fn clone_decor(document: &Document, count: usize) {
        let layers = [("clouds", "layer-one"), ("buildings", "layer-two")];
        for (class, layer_id) in layers {
            match (
                element_by_class(document, class),
                document.get_element_by_id(layer_id),
            ) {
                (Some(template), Some(layer)) => clone_into(&template, &layer, count),
                _ => log::warn!("Missing decor layer .{} / #{}", class, layer_id),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("City Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        clone_decor(&document, settings.scene.decor_clones);

        let seed = js_sys::Date::now() as u64;
        let scene = DomScene::new(document.clone(), settings.scene.clone(), seed)
            .expect("missing #player or .obstacles template");
        let display = DomDisplay::new(&document).expect("missing #layers-container or #start-message");

        let runner = Rc::new(RefCell::new(Runner::new(scene, display, settings.tuning)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(runner.clone());
        setup_teardown(runner.clone());

        // Start game loop
        schedule_frame(runner);

        log::info!("City Runner running!");
    }

    fn setup_input_handlers(runner: Rc<RefCell<WebRunner>>) {
        let window = web_sys::window().expect("no window");

        // Click anywhere starts
        {
            let runner = runner.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let signal = signal_for(&HostEvent::PointerActivated);
                runner.borrow_mut().signal(signal);
            });
            let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Any key starts, up arrow jumps
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let signal = signal_for(&HostEvent::KeyPressed(event.key()));
                runner.borrow_mut().signal(signal);
            });
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop rescheduling when the page is unloaded.
    ///
    /// A page entering the back/forward cache (`persisted`) keeps its loop,
    /// which resumes when the page is shown again.
    fn setup_teardown(runner: Rc<RefCell<WebRunner>>) {
        let window = web_sys::window().expect("no window");
        let token = runner.borrow().cancel_token();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            if event.persisted() {
                log::info!("Page cached, frame loop kept");
                return;
            }
            token.cancel();
            log::info!("Page unloaded, frame loop cancelled");
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn schedule_frame(runner: Rc<RefCell<WebRunner>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(runner);
        });
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("requestAnimationFrame unavailable, falling back to a timer");
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                FALLBACK_FRAME_MS,
            );
        }
        closure.forget();
    }

    fn game_loop(runner: Rc<RefCell<WebRunner>>) {
        let keep_going = runner.borrow_mut().frame();
        if keep_going {
            schedule_frame(runner);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("City Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot - serve the wasm build for the web version");

    headless::run(headless::FRAMES);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use city_runner::Settings;
    use city_runner::platform::{RecordingDisplay, Runner, Signal};
    use city_runner::scene::PlannedGeometry;
    use city_runner::sim::{BoundingBox, GameEvent};

    /// One minute at 60 frames per second
    pub const FRAMES: u64 = 3600;

    /// Jump when the next obstacle is this close ahead of the player (pixels)
    const JUMP_LEAD: f32 = 40.0;

    pub fn run(frames: u64) {
        let settings = Settings::load();
        let player = BoundingBox::new(40.0, 100.0, 30.0, 36.0);
        let geometry = PlannedGeometry::new(settings.scene.clone(), player, settings.tuning.floor_y, 1);
        let mut runner = Runner::new(geometry, RecordingDisplay::new(), settings.tuning);

        let (mut runs, mut passed) = (0u32, 0u32);
        for _ in 0..frames {
            let world = runner.world();
            if !world.is_running() {
                runner.signal(Signal::Start);
            } else if let Some(head) = world.obstacles.head() {
                let gap = head.x - (world.player.x + world.player.width);
                if (0.0..=JUMP_LEAD).contains(&gap) {
                    runner.signal(Signal::Jump);
                }
            }

            let Some(events) = runner.frame_events() else {
                break;
            };
            for event in events {
                match event {
                    GameEvent::Started { .. } => runs += 1,
                    GameEvent::ObstacleEvicted { .. } => passed += 1,
                    GameEvent::Collided { .. } | GameEvent::Jumped => {}
                }
            }
        }

        log::info!(
            "Headless run finished: {} frames, {} runs, {} obstacles passed, {} collisions",
            runner.world().frame,
            runs,
            passed,
            runner.display().failures
        );
    }
}
