mod engine;
mod play;

use crate::play::*;
use anyhow::Result;
use clap::{Arg, Command, value_parser};

fn main() -> Result<()> {
    let arg_size = Arg::new("size")
        .short('s')
        .long("size")
        .value_parser(value_parser!(usize))
        .default_value("3");
    let matches = Command::new("marubatsu-rs")
        .subcommand(
            Command::new("play")
                .about("Interactive play against the engine")
                .arg(arg_size.clone())
                .arg(
                    Arg::new("first")
                        .short('f')
                        .long("first")
                        .value_parser(["human", "computer"])
                        .default_value("human"),
                ),
        )
        .subcommand(
            Command::new("self-play")
                .about("Engine plays both sides")
                .arg(arg_size.clone()),
        )
        .subcommand(
            Command::new("solve")
                .about("Print the best move for a position")
                .arg(Arg::new("board").short('b').required(true))
                .arg(Arg::new("player").short('p').required(true)),
        )
        .get_matches();
    match matches.subcommand() {
        Some(("play", matches)) => play(matches),
        Some(("self-play", matches)) => self_play(matches),
        Some(("solve", matches)) => solve(matches),
        Some(_) => {
            eprintln!("Unknown subcommand");
            Ok(())
        }
        None => {
            eprintln!("Need subcommand");
            Ok(())
        }
    }
}
