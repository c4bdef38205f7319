use crate::engine::board::*;
use crate::engine::search::*;
use anyhow::{Result, bail, ensure};
use clap::ArgMatches;

fn print_key(size: usize) {
    for row in 0..size {
        for col in 0..size {
            print!("{:3} ", row * size + col);
        }
        println!();
    }
    println!();
}

fn read_move(board: &Board) -> Result<(usize, usize)> {
    let size = board.size();
    loop {
        println!("Enter your move (0-{}):", size * size - 1);
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            bail!("stdin closed");
        }
        let index: usize = match line.trim().parse() {
            Ok(index) => index,
            Err(_) => {
                println!("Invalid move");
                continue;
            }
        };
        if index >= size * size {
            println!("Invalid move");
            continue;
        }
        let (row, col) = (index / size, index % size);
        if board.get(row, col).is_some() {
            println!("Cell is occupied");
            continue;
        }
        return Ok((row, col));
    }
}

pub fn play(matches: &ArgMatches) -> Result<()> {
    let size = *matches.get_one::<usize>("size").unwrap();
    let human_first = matches.get_one::<String>("first").unwrap() == "human";
    let mut board = Board::new(size)?;
    let mut searcher = Searcher::new(size);
    // X always moves first; whoever goes first plays X.
    let human = if human_first { Player::X } else { Player::O };
    let mut current = Player::X;
    loop {
        println!("{}", board);
        let (row, col) = if current == human {
            print_key(size);
            read_move(&board)?
        } else {
            println!("Thinking...");
            let mv = searcher.best_move(&mut board, current);
            eprintln!(
                "Expected outcome: {}, nodes: {}",
                mv.outcome, searcher.node_count
            );
            (mv.row, mv.col)
        };
        board.put(row, col, current);
        if board.has_won(current) {
            println!("{}", board);
            println!("Player {} has won!", current);
            return Ok(());
        }
        if board.is_full() {
            println!("{}", board);
            println!("Draw.");
            return Ok(());
        }
        current = current.opponent();
    }
}

pub fn self_play(matches: &ArgMatches) -> Result<()> {
    let size = *matches.get_one::<usize>("size").unwrap();
    let mut board = Board::new(size)?;
    let mut searcher = Searcher::new(size);
    let mut current = Player::X;
    loop {
        let mv = searcher.best_move(&mut board, current);
        println!("{}: {} ({})", current, mv, mv.outcome);
        board.put(mv.row, mv.col, current);
        println!("{}", board);
        if board.has_won(current) {
            println!("Player {} has won!", current);
            break;
        }
        if board.is_full() {
            println!("Draw.");
            break;
        }
        current = current.opponent();
    }
    eprintln!(
        "nodes: {}, cached positions: {}",
        searcher.node_count,
        searcher.table.len()
    );
    Ok(())
}

pub fn solve(matches: &ArgMatches) -> Result<()> {
    let board_str = matches.get_one::<String>("board").unwrap();
    let player_str = matches.get_one::<String>("player").unwrap();
    let mut board: Board = board_str.parse()?;
    let player: Player = player_str.parse()?;
    ensure!(!board.is_full(), "the board is already full");
    ensure!(!board.has_won(player), "{} has already won", player);
    ensure!(
        !board.has_won(player.opponent()),
        "{} has already won",
        player.opponent()
    );
    let mut searcher = Searcher::new(board.size());
    let mv = searcher.best_move(&mut board, player);
    print!("{}", board);
    println!(
        "Best move for {}: {} ({}, score {:+})",
        player,
        mv,
        mv.outcome,
        mv.outcome.score()
    );
    eprintln!(
        "nodes: {}, cached positions: {}",
        searcher.node_count,
        searcher.table.len()
    );
    Ok(())
}
