//! JS entry point. The page owns drawing and pointer translation; it hands
//! over integer cells and applies the returned effect batches.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::config::EngineConfig;
use crate::effects::{Effect, Recorder};
use crate::error::GiveawayError;
use crate::game::Giveaway;
use crate::layout::StartingPosition;
use crate::types::{BOARD_SIZE, GameMode, Position, Scores};

#[wasm_bindgen]
pub struct GiveawayHandle {
    engine: Giveaway,
    presenter: Recorder,
}

#[wasm_bindgen]
impl GiveawayHandle {
    /// `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GiveawayHandle, JsValue> {
        let config = decode_config(config).map_err(to_js_error)?;
        Ok(Self::from_engine(Giveaway::new_with_default_selector(config)))
    }

    /// Same as `new`, with a custom starting layout in JSON form.
    #[wasm_bindgen(js_name = withLayout)]
    pub fn with_layout(config: JsValue, layout_json: &str) -> Result<GiveawayHandle, JsValue> {
        let config = decode_config(config).map_err(to_js_error)?;
        let layout = StartingPosition::from_json(layout_json).map_err(to_js_error)?;
        Ok(Self::from_engine(Giveaway::new(
            config,
            layout,
            Box::new(crate::ai::MinCostSelector),
        )))
    }

    /// Starts (or restarts) a match. Returns the effect batch.
    pub fn start(&mut self, computer_mode: bool) -> Result<JsValue, JsValue> {
        let mode = if computer_mode {
            GameMode::HumanVsComputer
        } else {
            GameMode::HumanVsHuman
        };
        self.engine.start(mode, &mut self.presenter);
        self.flush()
    }

    pub fn click(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let at = position(row, col).map_err(to_js_error)?;
        self.engine.click(at, &mut self.presenter);
        self.flush()
    }

    /// Overrides the scores used to rank automated moves.
    #[wasm_bindgen(js_name = setScores)]
    pub fn set_scores(&mut self, black: i32, white: i32) {
        self.presenter.scores = Scores { black, white };
    }

    /// Commits the automated move if its think delay has passed.
    pub fn poll(&mut self) -> Result<JsValue, JsValue> {
        self.engine.poll(Instant::now(), &mut self.presenter);
        self.flush()
    }

    /// Milliseconds until the automated move is due, if one is scheduled.
    #[wasm_bindgen(js_name = pendingDelayMs)]
    pub fn pending_delay_ms(&self) -> Option<f64> {
        self.engine.pending_move().map(|pending| {
            pending
                .due_at
                .saturating_duration_since(Instant::now())
                .as_millis() as f64
        })
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.to_game_result())
    }
}

impl GiveawayHandle {
    fn from_engine(engine: Giveaway) -> Self {
        Self {
            engine,
            presenter: Recorder::new(),
        }
    }

    fn flush(&mut self) -> Result<JsValue, JsValue> {
        let effects: Vec<Effect> = self.presenter.drain();
        to_js(&effects)
    }
}

fn decode_config(config: JsValue) -> Result<EngineConfig, GiveawayError> {
    if config.is_undefined() || config.is_null() {
        return Ok(EngineConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|err| GiveawayError::Config(err.to_string()))
}

fn position(row: u8, col: u8) -> Result<Position, GiveawayError> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(GiveawayError::OutOfRange { row, col });
    }
    Ok(Position::new(row, col))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(err: GiveawayError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
