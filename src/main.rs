//! Love Wins entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use love_wins::renderer::{DrawCommand, TextAlign, colors, shapes};
    use love_wins::sim::{AvatarId, Game};
    use love_wins::input::{Button, KeyBindings};
    use love_wins::{GameConfig, InputLatch};

    /// Outline samples per heart lobe
    const HEART_SEGMENTS: u32 = 16;

    /// Game instance holding all state
    struct App {
        game: Game,
        latch: InputLatch,
        ctx: CanvasRenderingContext2d,
        /// Red (P1) and green (P2) avatar images
        images: [HtmlImageElement; 2],
    }

    fn css(color: &[f32; 4]) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (color[0] * 255.0).round(),
            (color[1] * 255.0).round(),
            (color[2] * 255.0).round(),
            color[3]
        )
    }

    impl App {
        /// One display frame: sample input, tick, draw
        fn frame(&mut self) {
            let input = self.latch.snapshot();
            let frame = self.game.tick(&input);
            for event in &frame.events {
                log::debug!("{:?}", event);
            }
            self.draw(&frame.commands);
        }

        fn draw(&self, commands: &[DrawCommand]) {
            let ctx = &self.ctx;
            let config = self.game.config();

            for command in commands {
                match command {
                    DrawCommand::Clear { color } => {
                        ctx.set_fill_style_str(&css(color));
                        ctx.fill_rect(0.0, 0.0, config.width as f64, config.height as f64);
                    }
                    DrawCommand::Sprite {
                        avatar,
                        pos,
                        rotation,
                        size,
                    } => {
                        self.draw_sprite(*avatar, pos.x, pos.y, *rotation, *size);
                    }
                    DrawCommand::Heart { pos, size, color } => {
                        let outline = shapes::heart_outline(*pos, *size, HEART_SEGMENTS);
                        ctx.set_fill_style_str(&css(color));
                        ctx.begin_path();
                        for (i, p) in outline.iter().enumerate() {
                            if i == 0 {
                                ctx.move_to(p.x as f64, p.y as f64);
                            } else {
                                ctx.line_to(p.x as f64, p.y as f64);
                            }
                        }
                        ctx.close_path();
                        ctx.fill();
                    }
                    DrawCommand::Text {
                        text,
                        pos,
                        size,
                        color,
                        align,
                    } => {
                        ctx.set_fill_style_str(&css(color));
                        ctx.set_font(&format!("{}px monospace", size));
                        ctx.set_text_align("center");
                        ctx.set_text_baseline(match align {
                            TextAlign::Center => "middle",
                            TextAlign::CenterBaseline => "alphabetic",
                        });
                        if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                            log::warn!("fill_text failed: {:?}", e);
                        }
                    }
                }
            }
        }

        fn draw_sprite(&self, avatar: AvatarId, x: f32, y: f32, rotation: f32, size: f32) {
            let ctx = &self.ctx;
            let image = &self.images[avatar.index()];
            let half = (size / 2.0) as f64;

            ctx.save();
            let placed = ctx
                .translate(x as f64, y as f64)
                .and_then(|_| ctx.rotate(rotation as f64));
            if placed.is_ok() {
                let drawn = if image.complete() && image.natural_width() > 0 {
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        image,
                        -half,
                        -half,
                        size as f64,
                        size as f64,
                    )
                    .is_ok()
                } else {
                    false
                };
                if !drawn {
                    // Image not loaded yet, draw a placeholder square
                    let color = match avatar {
                        AvatarId::One => colors::AVATAR_ONE,
                        AvatarId::Two => colors::AVATAR_TWO,
                    };
                    ctx.set_fill_style_str(&css(&color));
                    ctx.fill_rect(-half, -half, size as f64, size as f64);
                }
            }
            ctx.restore();
        }
    }

    fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        Ok(image)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Love Wins starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Write the active config back so it can be tuned in LocalStorage
        let config = GameConfig::load();
        config.save();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::with_config(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        // Enter doubles as a start button on keyboards
        let mut bindings = KeyBindings::default();
        bindings.bind("Enter", Button::TwoPlayerStart);

        let app = Rc::new(RefCell::new(App {
            game,
            latch: InputLatch::new(bindings),
            ctx,
            images: [load_image("/r.png")?, load_image("/g.png")?],
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Love Wins running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if app.borrow_mut().latch.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if app.borrow_mut().latch.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release everything on blur so no key sticks down
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().latch.release_all();
                log::info!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Love Wins (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    log::info!("Running a scripted round...");
    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Start, steer the avatars together, celebrate, restart
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use love_wins::renderer::{Vertex, tessellate};
    use love_wins::sim::{Game, RoundPhase};
    use love_wins::{GameConfig, TickInput};

    let mut game = match Game::with_config(GameConfig::load(), 0x10fe) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start demo: {}", e);
            return;
        }
    };

    let start = TickInput {
        two_player_start: true,
        ..Default::default()
    };
    let mut closing = TickInput::default();
    closing.players[0].right = true;
    closing.players[1].left = true;
    closing.players[0].action = true;

    game.tick(&start);
    let mut frames = 0u32;
    while game.phase() == RoundPhase::Playing && frames < 1000 {
        game.tick(&closing);
        frames += 1;
    }

    if game.phase() != RoundPhase::Won {
        log::warn!("Avatars never met after {} frames", frames);
        return;
    }

    // Let the hearts float for a second
    for _ in 0..59 {
        game.tick(&TickInput::default());
    }
    let last = game.tick(&TickInput::default());
    let vertices = tessellate(&last.commands, 16);

    log::info!(
        "Love wins after {} frames: {} hearts, {} vertices ({} bytes) in the last frame",
        frames,
        game.state().hearts.len(),
        vertices.len(),
        Vertex::as_bytes(&vertices).len()
    );

    game.tick(&start);
    log::info!(
        "Restarted: phase {:?}, hearts {}",
        game.phase(),
        game.state().hearts.len()
    );
}
