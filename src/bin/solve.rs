use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::Rng;
use slidecargo::{
    apply_move, load_board_from_json, parse_board, rng_for_seed, solve_astar_with, solve_bfs_with,
    Board, Dir, SearchLimits, SearchReport, SolveResult,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgoOpt {
    Bfs,
    Astar,
}

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Slidecargo sliding-tile solver")]
struct Args {
    /// Board as a text grid: rows separated by '/', cells by ',', the
    /// blank written '_'. Example: --board "1,2,3/4,5,6/7,_,8"
    #[arg(long)]
    board: Option<String>,

    /// Board JSON file path: {"width":3,"height":3,"cells":[1,...,null]}
    #[arg(long)]
    file: Option<PathBuf>,

    /// With neither --board nor --file: scramble the solved board by
    /// this many legal random moves (never undoing the previous one)
    #[arg(long, default_value_t = 10)]
    scramble: u32,

    /// Scramble seed (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Board width used when scrambling
    #[arg(long, default_value_t = 3)]
    width: u8,

    /// Board height used when scrambling
    #[arg(long, default_value_t = 3)]
    height: u8,

    /// Search strategy
    #[arg(long, value_enum, default_value = "astar")]
    algo: AlgoOpt,

    /// Stop after this many node expansions instead of running to
    /// exhaustion
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Replay the solution, printing each intermediate board
    #[arg(long)]
    replay: bool,
}

/// Random walk from the solved board: legal moves only, never the
/// opposite of the previous move, so a slide is never undone on the
/// spot.
fn scramble_walk(width: u8, height: u8, steps: u32, seed: u64, stream: u64) -> Board {
    let mut rng = rng_for_seed(seed, stream);
    let mut board = Board::solved(width, height);
    let mut last: Option<Dir> = None;
    for _ in 0..steps {
        let moves: Vec<Dir> = board
            .legal_moves()
            .into_iter()
            .filter(|&m| last != Some(m.opposite()))
            .collect();
        if moves.is_empty() {
            break; // 1xN boards run out of non-undoing moves
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board = match apply_move(&board, mv) {
            Ok(b) => b,
            Err(_) => break,
        };
        last = Some(mv);
    }
    board
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let board = if let Some(spec) = &args.board {
        parse_board(spec).map_err(|e| format!("Board parse error: {e}"))?
    } else if let Some(path) = &args.file {
        load_board_from_json(path).map_err(|e| format!("Board load error: {e}"))?
    } else {
        println!(
            "[solve] Scrambling a {}x{} board with {} moves (seed {:#x}).",
            args.width, args.height, args.scramble, args.seed
        );
        scramble_walk(args.width, args.height, args.scramble, args.seed, 0)
    };

    println!("[solve] Initial board:\n{board}");

    let limits = SearchLimits {
        max_expansions: args.max_expansions,
    };
    let report: SearchReport = match args.algo {
        AlgoOpt::Bfs => solve_bfs_with(&board, limits, || false)?,
        AlgoOpt::Astar => solve_astar_with(&board, limits, || false)?,
    };

    println!(
        "[solve] Search finished: expanded={}, generated={}, max_depth={}.",
        report.stats.expanded, report.stats.generated, report.stats.max_depth
    );

    match report.result {
        SolveResult::Solved(moves) => {
            println!("[solve] Optimal solution in {} moves.", moves.len());
            let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
            println!("[solve] Moves: {}", rendered.join(", "));
            if args.replay {
                let mut replay = board.clone();
                for mv in &moves {
                    replay = apply_move(&replay, *mv)?;
                    println!("[solve] {mv}:\n{replay}");
                }
            }
        }
        SolveResult::NoSolution => println!("[solve] No solution: state space exhausted."),
        SolveResult::Limited => println!("[solve] Aborted: expansion budget exhausted."),
        SolveResult::Cancelled => println!("[solve] Aborted: cancelled."),
    }

    Ok(())
}
