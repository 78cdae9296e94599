use crate::game::*;
use crate::moves::*;
use crate::Config;
use crate::Error;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Forwards every event to a JS callback as a plain object.
struct Callback(js_sys::Function);

impl Observer for Callback {
    fn notify(&self, event: &Event) {
        let Ok(json) = serde_json::to_string(event)
            .inspect_err(|e| log::warn!("failed to serialize {:?}: {}", event, e))
        else {
            return;
        };
        js_sys::JSON::parse(&json)
            .and_then(|object| self.0.call1(&JsValue::NULL, &object))
            .err()
            .inspect(|e| log::warn!("event callback failed: {:?}", e));
    }
}

fn reject(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmGame(Rc<Orchestrator>);

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(callback: js_sys::Function) -> Result<WasmGame, JsValue> {
        console_error_panic_hook::set_once();
        Orchestrator::new(Config::default(), Callback(callback))
            .map(Rc::new)
            .map(Self)
            .map_err(reject)
    }

    /// Resolves once the new model has produced its first guess.
    #[wasm_bindgen(js_name = setupGame)]
    pub fn setup_game(&self, k: usize) -> js_sys::Promise {
        let game = self.0.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            game.setup_game(k)
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(reject)
        })
    }

    /// Takes the clicked card's element id (`aCard`, `bCard`, `cCard`).
    /// Resolves to `true` if a round was played, `false` if the input was dropped.
    #[wasm_bindgen(js_name = chooseButton)]
    pub fn choose_button(&self, id: &str) -> js_sys::Promise {
        let game = self.0.clone();
        let card = Card::try_from(id);
        wasm_bindgen_futures::future_to_promise(async move {
            let card = card.map_err(|e| JsValue::from_str(&e))?;
            game.choose(card)
                .await
                .map(|round| JsValue::from_bool(round.is_some()))
                .map_err(reject)
        })
    }

    /// Raw one-hot entry point.
    #[wasm_bindgen(js_name = chooseVector)]
    pub fn choose_vector(&self, values: Vec<f32>) -> js_sys::Promise {
        let game = self.0.clone();
        let onehot = OneHot::from(values);
        wasm_bindgen_futures::future_to_promise(async move {
            game.choose_button(&onehot)
                .await
                .map(|round| JsValue::from_bool(round.is_some()))
                .map_err(reject)
        })
    }

    #[wasm_bindgen]
    pub fn busy(&self) -> bool {
        self.0.phase() != Phase::Idle
    }
}
