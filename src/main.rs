//! Capital Scramble entry point
//!
//! On the web this builds the page and wires DOM events to the game. Natively
//! it runs a line-based version in the terminal (progress is not saved).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

    use capital_scramble::platform::{LocalStorage, session_seed};
    use capital_scramble::ui::{RESTART_LABEL, TITLE, ViewModel};
    use capital_scramble::GameStateMachine;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Page elements updated on every render
    struct Page {
        points: Element,
        strikes: Element,
        feedback: Element,
        word: Element,
        input: HtmlInputElement,
        pass_btn: HtmlButtonElement,
        restart_btn: HtmlButtonElement,
    }

    /// Game instance holding all state
    struct Game {
        machine: GameStateMachine<LocalStorage, Pcg32>,
        page: Page,
    }

    impl Game {
        /// Push the current view model into the DOM
        fn render(&self) {
            let view = ViewModel::from_state(self.machine.state());
            let page = &self.page;

            page.points.set_text_content(Some(&view.points.to_string()));
            page.strikes.set_text_content(Some(&view.strikes.to_string()));
            page.word.set_text_content(Some(&view.display_word));

            match &view.banner {
                Some(banner) => {
                    page.feedback
                        .set_class_name(&format!("alert {} mt-3 fw-bold", banner.class));
                    page.feedback.set_text_content(Some(banner.message));
                }
                None => {
                    page.feedback.set_class_name("hidden");
                    page.feedback.set_text_content(None);
                }
            }

            // Only overwrite the input when the buffer was cleared, keeps the caret
            if page.input.value() != view.guess {
                page.input.set_value(&view.guess);
            }
            page.input.set_disabled(!view.input_enabled);

            page.pass_btn.set_text_content(Some(&view.pass_label()));
            page.pass_btn.set_disabled(!view.pass_enabled);
            page.restart_btn.set_hidden(!view.show_restart);
        }
    }

    fn create(document: &Document, tag: &str, id: &str, class: &str) -> Result<Element, JsValue> {
        let el = document.create_element(tag)?;
        el.set_id(id);
        el.set_class_name(class);
        Ok(el)
    }

    /// Build the page under `#root` (or `<body>`)
    fn build_page(document: &Document) -> Result<Page, JsValue> {
        let root: Element = match document.get_element_by_id("root") {
            Some(root) => root,
            None => document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .into(),
        };

        let card = create(document, "div", "scramble", "card shadow-lg text-center")?;
        let title = create(document, "h1", "title", "card-title")?;
        title.set_text_content(Some(TITLE));

        let score = create(document, "div", "score", "d-flex justify-content-between p-3")?;
        let points = create(document, "strong", "points", "fs-2")?;
        let points_label = create(document, "p", "points-label", "text-uppercase")?;
        points_label.set_text_content(Some("points"));
        let strikes = create(document, "strong", "strikes", "fs-2")?;
        let strikes_label = create(document, "p", "strikes-label", "text-uppercase")?;
        strikes_label.set_text_content(Some("strikes"));
        score.append_child(&points)?;
        score.append_child(&points_label)?;
        score.append_child(&strikes)?;
        score.append_child(&strikes_label)?;

        let feedback = create(document, "div", "feedback", "hidden")?;
        feedback.set_attribute("role", "alert")?;
        let word = create(document, "p", "word", "fs-1 text-uppercase")?;

        let input: HtmlInputElement = create(document, "input", "guess", "form-control text-uppercase")?
            .dyn_into()?;
        input.set_type("text");

        let pass_btn: HtmlButtonElement =
            create(document, "button", "pass-btn", "btn btn-danger")?.dyn_into()?;
        let restart_btn: HtmlButtonElement =
            create(document, "button", "restart-btn", "btn btn-primary")?.dyn_into()?;
        restart_btn.set_text_content(Some(RESTART_LABEL));

        card.append_child(&title)?;
        card.append_child(&score)?;
        card.append_child(&feedback)?;
        card.append_child(&word)?;
        card.append_child(&input)?;
        card.append_child(&pass_btn)?;
        card.append_child(&restart_btn)?;
        root.append_child(&card)?;

        Ok(Page {
            points,
            strikes,
            feedback,
            word,
            input,
            pass_btn,
            restart_btn,
        })
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let input = game.borrow().page.input.clone();

        // Typing updates the guess buffer
        {
            let game = game.clone();
            let input_el = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.machine.set_guess(&input_el.value());
            });
            input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Enter submits
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    let mut g = game.borrow_mut();
                    g.machine.submit_current_guess();
                    g.render();
                }
            });
            input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let (pass_btn, restart_btn) = {
            let g = game.borrow();
            (g.page.pass_btn.clone(), g.page.restart_btn.clone())
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.machine.skip();
                g.render();
            });
            pass_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.machine.restart();
                g.render();
                let _ = g.page.input.focus();
            });
            restart_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Capital Scramble starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let page = build_page(&document)?;
        let seed = session_seed();
        let machine = GameStateMachine::new(LocalStorage::open(), Pcg32::seed_from_u64(seed));
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game { machine, page }));
        setup_input_handlers(game.clone())?;
        setup_buttons(game.clone())?;
        game.borrow().render();

        log::info!("Capital Scramble running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Capital Scramble (native) starting...");
    log::info!("Progress is not saved natively - build for wasm32-unknown-unknown for the web version");

    if let Err(e) = terminal::run() {
        log::error!("Terminal error: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use capital_scramble::platform::session_seed;
    use capital_scramble::ui::{RESTART_LABEL, TITLE, ViewModel};
    use capital_scramble::{GameStateMachine, MemoryStore};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn draw(out: &mut impl Write, view: &ViewModel) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{} points | {} strikes", view.points, view.strikes)?;
        if let Some(banner) = &view.banner {
            writeln!(out, "{}", banner.message)?;
        }
        writeln!(out, "    {}", view.display_word)?;
        if view.game_over {
            write!(out, "{} [:restart / :quit] > ", RESTART_LABEL)?;
        } else if view.pass_enabled {
            write!(out, "guess [:pass - {}] > ", view.pass_label())?;
        } else {
            write!(out, "guess > ")?;
        }
        out.flush()
    }

    pub fn run() -> io::Result<()> {
        let seed = session_seed();
        let mut game = GameStateMachine::new(MemoryStore::new(), Pcg32::seed_from_u64(seed));
        log::info!("Game initialized with seed: {}", seed);

        let stdin = io::stdin();
        let mut out = io::stdout();
        writeln!(out, "{}", TITLE)?;
        draw(&mut out, &ViewModel::from_state(game.state()))?;

        for line in stdin.lock().lines() {
            let line = line?;
            match line.trim() {
                ":quit" | ":q" => break,
                ":pass" | ":p" => {
                    game.skip();
                }
                ":restart" | ":r" => {
                    game.restart();
                }
                _ => {
                    game.set_guess(&line);
                    game.submit_current_guess();
                }
            }
            draw(&mut out, &ViewModel::from_state(game.state()))?;
        }

        writeln!(out)?;
        Ok(())
    }
}
