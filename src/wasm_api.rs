use crate::game;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct GameState {
    squares: Vec<Option<String>>,
    status: String,
    next_player: String,
    winner: Option<String>,
    game_over: bool,
    current_move: usize,
    history: Vec<String>,
}

fn build_game_state(game: &game::Game) -> GameState {
    let squares = game
        .current_board()
        .cells()
        .iter()
        .map(|cell| cell.map(|mark| mark.label().to_string()))
        .collect();
    let winner = game.winner();

    GameState {
        squares,
        status: game.status(),
        next_player: game.next_mark().label().to_string(),
        winner: winner.map(|mark| mark.label().to_string()),
        game_over: winner.is_some(),
        current_move: game.current_move(),
        history: (0..game.history_len()).map(game::move_label).collect(),
    }
}

#[wasm_bindgen]
pub struct Game {
    game: game::Game,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            game: game::Game::new(),
        }
    }

    pub fn get_state(&self) -> JsValue {
        let state = build_game_state(&self.game);
        serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
    }

    /// Click handler for square `cell`. Rejected clicks (occupied square,
    /// game already won, index out of range) return the unchanged state.
    pub fn play(&mut self, cell: usize) -> JsValue {
        self.game.play(cell);
        self.get_state()
    }

    /// History-list handler. Out-of-range indices leave the state unchanged.
    pub fn jump_to(&mut self, mv: usize) -> JsValue {
        if mv < self.game.history_len() {
            self.game.jump_to(mv);
        }
        self.get_state()
    }

    pub fn history_len(&self) -> usize {
        self.game.history_len()
    }
}
