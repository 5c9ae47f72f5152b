pub mod clipboard;
pub mod runner;

pub use clipboard::{copy_text, TextAreaClipboard};
pub use runner::{EggRunner, HostTicks};

use std::cell::RefCell;

use burst_engine::{EggConfig, InputEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<EggRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut EggRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Easter egg not initialized. Call egg_init() first.");
        f(runner)
    })
}

/// Create the page session. `config_json` may be omitted or partial; a bad
/// document is logged and replaced by the defaults.
#[wasm_bindgen]
pub fn egg_init(config_json: Option<String>, width: f32, height: f32, now_ms: f64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = match config_json.as_deref().map(EggConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::error!("burst-web: {}; using default config", err);
            EggConfig::default()
        }
        None => EggConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = Some(js_sys::Date::now() as u64);
    }

    let runner = match EggRunner::new(config, width, height, now_ms) {
        Ok(runner) => runner,
        Err(err) => {
            log::error!("burst-web: {}; using default config", err);
            match EggRunner::new(EggConfig::default(), width, height, now_ms) {
                Ok(runner) => runner,
                Err(err) => {
                    log::error!("burst-web: default config rejected: {}", err);
                    return;
                }
            }
        }
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("burst-web: initialized");
}

/// Animation frame callback. Returns whether to request another frame.
#[wasm_bindgen]
pub fn egg_frame(now_ms: f64) -> bool {
    with_runner(|r| r.frame(now_ms))
}

/// Whether an input or timer asked for a frame since the last check.
#[wasm_bindgen]
pub fn egg_frame_requested() -> bool {
    with_runner(|r| r.take_frame_request())
}

// ---- Input ----

#[wasm_bindgen]
pub fn egg_click(now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::Click, now_ms));
}

#[wasm_bindgen]
pub fn egg_key_down(code: &str, key: &str, now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::key(code, key), now_ms));
}

#[wasm_bindgen]
pub fn egg_pointer_move(x: f32, y: f32, now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }, now_ms));
}

#[wasm_bindgen]
pub fn egg_touch_move(x: f32, y: f32, now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::TouchMove { x, y }, now_ms));
}

/// Returns true when the native context menu should be suppressed.
#[wasm_bindgen]
pub fn egg_context_menu(now_ms: f64) -> bool {
    with_runner(|r| r.push_input(InputEvent::ContextMenu, now_ms))
}

#[wasm_bindgen]
pub fn egg_device_motion(x: f32, y: f32, z: f32, now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::DeviceMotion { x, y, z }, now_ms));
}

#[wasm_bindgen]
pub fn egg_resize(width: f32, height: f32, now_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }, now_ms));
}

/// Activate from page code (`"click"`, `"konami"`, `"typing"`, `"shake"`).
#[wasm_bindgen]
pub fn egg_activate(source: &str, now_ms: f64) -> bool {
    with_runner(|r| r.activate(source, now_ms))
}

/// Copy the contact string. The clipboard promise settles later: the
/// outcome shows up as cues plus a frame request (see `egg_frame_requested`).
#[wasm_bindgen]
pub fn egg_copy_contact(now_ms: f64) {
    let contact = with_runner(|r| r.contact());
    let started = js_sys::Date::now();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = clipboard::copy_text(&contact).await;
        let settled_ms = now_ms + (js_sys::Date::now() - started);
        with_runner(|r| r.finish_copy(outcome, settled_ms));
    });
}

#[wasm_bindgen]
pub fn egg_stop() {
    with_runner(|r| r.stop());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_discs_ptr() -> *const f32 {
    with_runner(|r| r.discs_ptr())
}

#[wasm_bindgen]
pub fn get_disc_count() -> u32 {
    with_runner(|r| r.disc_count())
}

#[wasm_bindgen]
pub fn get_disc_floats() -> u32 {
    with_runner(|r| r.disc_floats())
}

#[wasm_bindgen]
pub fn get_cues_ptr() -> *const f32 {
    with_runner(|r| r.cues_ptr())
}

#[wasm_bindgen]
pub fn get_cue_count() -> u32 {
    with_runner(|r| r.cue_count())
}

#[wasm_bindgen]
pub fn egg_clear_cues() {
    with_runner(|r| r.clear_cues());
}

#[wasm_bindgen]
pub fn get_surface_width() -> f32 {
    with_runner(|r| r.surface_width())
}

#[wasm_bindgen]
pub fn get_surface_height() -> f32 {
    with_runner(|r| r.surface_height())
}

#[wasm_bindgen]
pub fn get_hint_text() -> String {
    with_runner(|r| r.hint_text())
}

#[wasm_bindgen]
pub fn get_toast_text() -> String {
    with_runner(|r| r.toast_text())
}

#[wasm_bindgen]
pub fn get_toast_visible(now_ms: f64) -> bool {
    with_runner(|r| r.toast_visible(now_ms))
}

#[wasm_bindgen]
pub fn get_contact() -> String {
    with_runner(|r| r.contact())
}

#[wasm_bindgen]
pub fn get_is_activated() -> bool {
    with_runner(|r| r.is_activated())
}
