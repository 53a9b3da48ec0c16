use rand::Rng;
use serde::Serialize;

use tictactoe::board::Mark;
use tictactoe::game::Game;

const NUM_GAMES: usize = 10_000;
// A finished game is 5 moves at the shortest and 9 at the longest.
const MIN_MOVES: usize = 5;
const MAX_MOVES: usize = 9;

#[derive(Debug, Default, Serialize)]
struct Tally {
    games: usize,
    x_wins: usize,
    o_wins: usize,
    no_winner: usize,
}

fn play_random_game(rng: &mut impl Rng) -> (Option<Mark>, usize) {
    let mut game = Game::new();
    loop {
        if game.winner().is_some() {
            break;
        }
        let open = game.current_board().empty_cells();
        if open.is_empty() {
            break;
        }
        game.play(open[rng.gen_range(0..open.len())]);
    }
    (game.winner(), game.move_count())
}

fn main() {
    println!("=== Random playouts: {NUM_GAMES} games ===\n");

    let mut rng = rand::thread_rng();
    let mut tally = Tally {
        games: NUM_GAMES,
        ..Tally::default()
    };
    let mut lengths = [0usize; MAX_MOVES + 1];

    for _ in 0..NUM_GAMES {
        let (winner, moves) = play_random_game(&mut rng);
        match winner {
            Some(Mark::X) => tally.x_wins += 1,
            Some(Mark::O) => tally.o_wins += 1,
            None => tally.no_winner += 1,
        }
        lengths[moves] += 1;
    }

    println!("  X wins:    {:>6}", tally.x_wins);
    println!("  O wins:    {:>6}", tally.o_wins);
    println!("  no winner: {:>6}", tally.no_winner);

    println!("\n  moves per game:");
    for moves in MIN_MOVES..=MAX_MOVES {
        println!("    {moves}: {:>6}", lengths[moves]);
    }

    println!("\n{}", serde_json::to_string(&tally).unwrap_or_default());
}
