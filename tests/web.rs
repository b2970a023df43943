#![cfg(target_arch = "wasm32")]

use giveaway::wasm::GiveawayHandle;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn config(think_delay_ms: f64, computer_side: &str) -> JsValue {
    let config = Object::new();
    Reflect::set(&config, &"think_delay_ms".into(), &think_delay_ms.into()).unwrap();
    Reflect::set(&config, &"computer_side".into(), &computer_side.into()).unwrap();
    config.into()
}

fn kinds(batch: &JsValue) -> Vec<String> {
    Array::from(batch)
        .iter()
        .map(|effect| {
            Reflect::get(&effect, &"kind".into())
                .unwrap()
                .as_string()
                .unwrap()
        })
        .collect()
}

#[wasm_bindgen_test]
fn start_returns_reset_and_full_board() {
    let mut handle = GiveawayHandle::new(JsValue::UNDEFINED).unwrap();

    let batch = handle.start(false).unwrap();
    let kinds = kinds(&batch);

    assert_eq!(kinds[0], "reset");
    assert_eq!(kinds.iter().filter(|k| *k == "put").count(), 64);
    assert_eq!(kinds.last().map(String::as_str), Some("current_player"));
}

#[wasm_bindgen_test]
fn click_outside_board_is_an_error() {
    let mut handle = GiveawayHandle::new(JsValue::UNDEFINED).unwrap();
    handle.start(false).unwrap();

    assert!(handle.click(8, 0).is_err());
}

#[wasm_bindgen_test]
fn computer_as_black_schedules_its_opening_move() {
    let mut handle = GiveawayHandle::new(config(0.0, "black")).unwrap();
    handle.start(true).unwrap();

    assert!(handle.pending_delay_ms().is_some());
    let batch = handle.poll().unwrap();

    assert!(kinds(&batch).contains(&"current_player".to_string()));
    assert!(handle.pending_delay_ms().is_none());
}

#[wasm_bindgen_test]
fn custom_layout_is_validated() {
    let bad = r#"{"black":[{"row":9,"column":0}],"white":[]}"#;

    assert!(GiveawayHandle::with_layout(JsValue::UNDEFINED, bad).is_err());
}
