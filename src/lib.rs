pub mod board;
pub mod game;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
