//! `musket`: find the musketeer closest to the diamond.

use std::io::Read;

use log::info;
use musket_app::args::{self, Command, USAGE};
use musket_app::report;
use musket_core::Board;
use musket_search::{SearchResult, Solver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match args::parse(std::env::args().skip(1)) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("musket: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    fast_log::init(
        fast_log::config::Config::new()
            .console()
            .level(opts.log_level()),
    )?;

    let text = if opts.board.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&opts.board)?
    };
    let board = Board::parse(&text)?;
    info!(
        "loaded {}x{} board from {} with {} musketeers",
        board.rows(),
        board.cols(),
        opts.board.display(),
        board.agents().len()
    );

    let winner = Solver::with_strategy(opts.strategy).best(&board);
    if opts.json {
        let result = winner.map(SearchResult::from).unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::summary(&board, opts.strategy, winner.as_ref()));
    }

    log::logger().flush();
    Ok(())
}
