//! Guess the Number entry point
//!
//! Handles platform-specific initialization and wires input to the game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

    use guess_the_number::App;
    use guess_the_number::game::SeededSecrets;
    use guess_the_number::platform::LocalStorage;
    use guess_the_number::ui::{self, FeedbackTone};

    type Game = App<SeededSecrets, LocalStorage>;

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn input_element(document: &Document) -> Option<HtmlInputElement> {
        document.get_element_by_id("guess-input")?.dyn_into().ok()
    }

    fn button_element(document: &Document, id: &str) -> Option<HtmlButtonElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    /// Push the HUD into the DOM
    fn render(game: &Game) {
        let Some(document) = document() else {
            log::error!("No document to render into");
            return;
        };
        let hud = game.hud();

        if let Some(el) = document.get_element_by_id("feedback") {
            el.set_text_content(Some(&hud.feedback));
            let classes = el.class_list();
            for tone in FeedbackTone::ALL {
                let _ = classes.remove_1(tone.css_class());
            }
            let _ = classes.add_1(hud.tone.css_class());
        }

        if let Some(el) = document.get_element_by_id("guess-count") {
            el.set_text_content(Some(&hud.guess_count.to_string()));
        }

        if let Some(el) = document.get_element_by_id("best-score") {
            el.set_text_content(Some(&hud.best_score));
        }

        let raw = match input_element(&document) {
            Some(input) => {
                input.set_disabled(!hud.input_enabled);
                input.value()
            }
            None => String::new(),
        };

        if let Some(btn) = button_element(&document, "submit-btn") {
            btn.set_disabled(!ui::submit_enabled(&raw, &game.state()));
            set_hidden(&btn, hud.show_play_again);
        }

        if let Some(btn) = button_element(&document, "play-again-btn") {
            set_hidden(&btn, !hud.show_play_again);
        }
    }

    fn set_hidden(el: &web_sys::Element, hidden: bool) {
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1("hidden")
        } else {
            classes.remove_1("hidden")
        };
    }

    fn focus_input() {
        if let Some(input) = document().as_ref().and_then(input_element) {
            let _ = input.focus();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Guess the Number starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(App::new(
            SeededSecrets::new(seed),
            LocalStorage::new(),
        )));
        log::info!("Game initialized with seed: {}", seed);

        setup_guess_form(game.clone());
        setup_input_change(game.clone());
        setup_play_again(game.clone());

        render(&game.borrow());
        focus_input();
    }

    fn setup_guess_form(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };
        let Some(form) = document.get_element_by_id("guess-form") else {
            log::error!("Missing #guess-form");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(input) = input_element(&document) else { return };

            let mut g = game.borrow_mut();
            let before = g.state();
            let after = g.submit(&input.value());
            if ui::clears_input(&before, &after) {
                input.set_value("");
            }
            render(&g);
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_change(game: Rc<RefCell<Game>>) {
        let Some(input) = document().as_ref().and_then(input_element) else {
            log::error!("Missing #guess-input");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            render(&game.borrow());
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_play_again(game: Rc<RefCell<Game>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("play-again-btn")) else {
            log::error!("Missing #play-again-btn");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            g.start();
            if let Some(input) = document().as_ref().and_then(input_element) {
                input.set_value("");
            }
            render(&g);
            focus_input();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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
    log::info!("Guess the Number (native) starting...");

    if let Err(e) = native_game::run() {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::io::{self, BufRead, Write};
    use std::time::{SystemTime, UNIX_EPOCH};

    use guess_the_number::App;
    use guess_the_number::game::{SecretSource, SeededSecrets};
    use guess_the_number::platform::{FileStorage, MemoryStorage, Storage};

    pub fn run() -> io::Result<()> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        log::info!("Game initialized with seed: {}", seed);

        match FileStorage::in_data_dir() {
            Some(storage) => {
                log::info!("Best score stored in {}", storage.dir().display());
                play(App::new(SeededSecrets::new(seed), storage))
            }
            None => {
                log::warn!("No data directory, best score will not persist");
                play(App::new(SeededSecrets::new(seed), MemoryStorage::new()))
            }
        }
    }

    fn play<S: SecretSource, T: Storage>(mut app: App<S, T>) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        loop {
            let hud = app.hud();
            writeln!(stdout, "{}", hud.feedback)?;
            writeln!(
                stdout,
                "Guesses: {}   Best: {}",
                hud.guess_count, hud.best_score
            )?;

            if hud.show_play_again {
                write!(stdout, "Play again? [y/N] ")?;
                stdout.flush()?;
                match lines.next().transpose()? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        app.start();
                        continue;
                    }
                    _ => return Ok(()),
                }
            }

            write!(stdout, "Your guess (q to quit): ")?;
            stdout.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            if line.trim().eq_ignore_ascii_case("q") {
                writeln!(stdout, "The number was {}.", app.session().secret())?;
                return Ok(());
            }
            app.submit(&line);
        }
    }
}
