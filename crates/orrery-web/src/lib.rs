pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use js_sys::Float32Array;
use orrery_engine::{FrameOutcome, InputEvent, Selection};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls before `orrery_init` are
/// ignored and return `None`.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => Some(f(runner)),
        None => {
            web_sys::console::warn_1(&JsValue::from_str(
                "orrery not initialized; call orrery_init() first",
            ));
            None
        }
    })
}

fn empty_array() -> Float32Array {
    Float32Array::new_with_length(0)
}

/// Build the orrery. Both arguments are optional JSON strings; omitted
/// ones use the built-in solar system and default settings.
#[wasm_bindgen]
pub fn orrery_init(catalog_json: Option<String>, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = OrreryRunner::new(catalog_json.as_deref(), config_json.as_deref())
        .map_err(|e| {
            log::error!("orrery: init failed: {e}");
            JsValue::from_str(&e.to_string())
        })?;
    let bodies = runner.orrery().scene().len();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized with {bodies} bodies");
    Ok(())
}

/// Called from `requestAnimationFrame` with its timestamp (ms).
/// Returns true if the bodies advanced this frame.
#[wasm_bindgen]
pub fn orrery_tick(now_ms: f64) -> bool {
    with_runner(|r| r.tick(now_ms) == FrameOutcome::Advanced).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

/// Positive `notches` zoom in.
#[wasm_bindgen]
pub fn orrery_wheel(notches: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { notches }));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// Info panel close button. Applied immediately so the panel hides
/// without waiting a frame.
#[wasm_bindgen]
pub fn orrery_deselect() {
    with_runner(|r| r.deselect());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or_default()
}

/// `{"selected":false}` until the orrery is initialized.
#[wasm_bindgen]
pub fn get_selection_json() -> String {
    selection_json_or_deselected(with_runner(|r| r.selection_json()))
}

fn selection_json_or_deselected(json: Option<String>) -> String {
    json.unwrap_or_else(|| Selection::Deselected.to_json())
}

// ---- Static buffers (copied once at startup) ----

#[wasm_bindgen]
pub fn get_starfield() -> Float32Array {
    with_runner(|r| Float32Array::from(r.statics().starfield.as_slice()))
        .unwrap_or_else(empty_array)
}

#[wasm_bindgen]
pub fn get_orbit_paths() -> Float32Array {
    with_runner(|r| Float32Array::from(r.statics().orbit_paths.as_slice()))
        .unwrap_or_else(empty_array)
}

#[wasm_bindgen]
pub fn get_orbit_path_points() -> u32 {
    with_runner(|r| r.orbit_path_points()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_rings() -> Float32Array {
    with_runner(|r| Float32Array::from(r.statics().rings.as_slice()))
        .unwrap_or_else(empty_array)
}

#[wasm_bindgen]
pub fn get_lights() -> Float32Array {
    with_runner(|r| Float32Array::from(r.statics().lights.as_slice()))
        .unwrap_or_else(empty_array)
}

/// Starfield and orbit path styling from the active config, as JSON.
#[wasm_bindgen]
pub fn get_view_config_json() -> String {
    with_runner(|r| serde_json::to_string(&r.orrery().config().view).unwrap_or_default())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runner_reports_deselected_json() {
        let json = selection_json_or_deselected(None);
        assert_eq!(json, r#"{"selected":false}"#);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["selected"], false);
    }
}
