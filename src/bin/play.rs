use std::io::{self, BufRead, Write};

use tictactoe::game::{move_label, Game};

fn render(game: &Game) {
    let cells = game.current_board().cells();
    println!();
    for row in 0..3 {
        let at = |col: usize| cells[row * 3 + col].map_or(".", |mark| mark.label());
        println!("  {} | {} | {}", at(0), at(1), at(2));
        if row < 2 {
            println!(" ---+---+---");
        }
    }
    println!("\n  {}", game.status());
}

fn print_history(game: &Game) {
    for mv in 0..game.history_len() {
        let cursor = if mv == game.current_move() { "*" } else { " " };
        println!(" {cursor} {mv}: {}", move_label(mv));
    }
}

fn main() -> io::Result<()> {
    println!("tic-tac-toe");
    println!("  0-8        play the numbered cell (row-major from the top left)");
    println!("  history    list snapshots, the one on display starred");
    println!("  jump <k>   go to snapshot k");
    println!("  quit       exit");

    let mut game = Game::new();
    render(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = line.trim();

        if cmd.is_empty() {
            continue;
        }
        if cmd == "quit" || cmd == "q" {
            break;
        }
        if cmd == "history" {
            print_history(&game);
            continue;
        }
        if let Some(rest) = cmd.strip_prefix("jump") {
            match rest.trim().parse::<usize>() {
                Ok(mv) if mv < game.history_len() => {
                    game.jump_to(mv);
                    render(&game);
                }
                _ => println!("usage: jump <0-{}>", game.history_len() - 1),
            }
            continue;
        }
        match cmd.parse::<usize>() {
            // Occupied cells and finished games are absorbed silently, the
            // same as in the browser: the board re-renders unchanged.
            Ok(cell) if cell < 9 => {
                game.play(cell);
                render(&game);
            }
            _ => println!("unrecognized command: {cmd}"),
        }
    }

    Ok(())
}
