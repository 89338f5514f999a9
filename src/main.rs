//! Command-line batch runner for the board generator. Generates the
//! requested number of random solution boards, prints them line by line to
//! standard output, and optionally reports timing statistics on standard
//! error.

use clap::{Parser, ValueEnum};

use log::error;

use std::process;
use std::time::Instant;

use sudoku_gen::PeerPolicy;
use sudoku_gen::generator::Generator;

/// Command-line selection of the peer policy. See [PeerPolicy] for the
/// semantics of each variant.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Consult only the already-assigned cells preceding each cell in scan
    /// order.
    ForwardScan,

    /// Consult all 20 cells sharing a row, column, or block with each cell.
    FullConstraint,
}

impl From<PolicyArg> for PeerPolicy {
    fn from(policy: PolicyArg) -> PeerPolicy {
        match policy {
            PolicyArg::ForwardScan => PeerPolicy::ForwardScan,
            PolicyArg::FullConstraint => PeerPolicy::FullConstraint,
        }
    }
}

/// Generates random, complete 9x9 Sudoku solution boards.
#[derive(Debug, Parser)]
#[command(name = "sudoku-gen", version, about)]
struct Cli {
    /// Number of boards to generate.
    count: usize,

    /// Which cells count as constraint peers during the fill.
    #[arg(long, value_enum, default_value = "forward-scan")]
    policy: PolicyArg,

    /// Print timing statistics to stderr after generation.
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Render each board as a terminal grid instead of a compact
    /// 81-character line.
    #[arg(short, long, default_value_t = false)]
    pretty: bool,
}

fn fail() -> ! {
    error!("unable to fill board");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let policy = PeerPolicy::from(cli.policy);
    let mut generator = Generator::new_default();
    let start = Instant::now();

    if cli.pretty {
        for _ in 0..cli.count {
            match generator.generate(policy) {
                Ok(board) => println!("{}", board),
                Err(_) => fail()
            }
        }
    }
    else {
        match generator.generate_serialized(cli.count, policy) {
            Ok(codes) =>
                for code in codes {
                    println!("{}", code);
                },
            Err(_) => fail()
        }
    }

    if cli.stats {
        let elapsed = start.elapsed();
        let boards_per_second = cli.count as f64 / elapsed.as_secs_f64();

        eprintln!("boards generated: {}", cli.count);
        eprintln!("elapsed: {} us", elapsed.as_micros());
        eprintln!("boards per second: {:.1}", boards_per_second);
    }
}
