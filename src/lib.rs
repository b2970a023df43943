use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod effects;
pub mod error;
pub mod game;
pub mod layout;
pub mod types;
pub mod wasm;

pub use error::GiveawayError;
pub use game::Giveaway;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
