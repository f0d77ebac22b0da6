mod app;
mod data;
mod fetch;
mod input;
mod router;
mod save;
mod screens;
mod session;
mod theme;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use app::App;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent, UiAction};
use router::DomHistory;
use time::FrameClock;

/// UI ticks per second; mock-load latencies are measured in these.
const TICKS_PER_SEC: u32 = 10;

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(
        f64::from(mouse_x) - rect.left(),
        rect.width(),
        cs.terminal_cols,
    )?;
    let row = pixel_y_to_row(
        f64::from(mouse_y) - rect.top(),
        rect.height(),
        cs.terminal_rows,
    )?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new(DomHistory)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new(TICKS_PER_SEC)));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Browser back/forward → resync the view from the URL.
    {
        let app = app.clone();
        let on_pop = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().on_popstate();
        });
        if let Some(window) = web_sys::window() {
            window.set_onpopstate(Some(on_pop.as_ref().unchecked_ref::<js_sys::Function>()));
        }
        // Leaked intentionally; the handler lives for the page lifetime.
        on_pop.forget();
    }

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Char(c.to_ascii_lowercase()),
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Esc => InputEvent::Esc,
                _ => return,
            };
            app.borrow_mut().handle_key(event);
        }
    });

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let action = cs.hit_test(col, row);
            drop(cs);

            if let Some(action) = action {
                if let UiAction::Go(view) = action {
                    web_sys::console::log_1(
                        &format!("akademi: tap → {}", router::path_for_view(view)).into(),
                    );
                }
                app.borrow_mut().dispatch(action);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map_or(0.0, |p| p.now());
            let ticks = clock.borrow_mut().advance(now);

            let mut app = app.borrow_mut();
            app.tick(ticks);

            let size = f.area();
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();

            app.render(f, size, &mut cs);
        }
    });

    Ok(())
}
