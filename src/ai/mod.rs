pub mod cost;

pub use cost::{MinCostSelector, Turn, best_move_index, move_cost};
