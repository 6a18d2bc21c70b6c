use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use slidecargo::{
    apply_move, rng_for_seed, solve_astar_with, solve_bfs_with, Board, Dir, SearchLimits,
    SolveResult,
};

/// Batch sweep: scramble-and-solve many boards in parallel, checking
/// that BFS and A* agree on optimal length and comparing how much work
/// each strategy does.
#[derive(Debug, Parser)]
#[command(name = "bench", about = "Slidecargo BFS/A* comparison sweep")]
struct Args {
    /// Number of scrambled boards to solve
    #[arg(long, default_value_t = 32)]
    count: u64,

    /// Scramble walk length per board
    #[arg(long, default_value_t = 16)]
    depth: u32,

    /// Board width
    #[arg(long, default_value_t = 3)]
    width: u8,

    /// Board height
    #[arg(long, default_value_t = 3)]
    height: u8,

    /// Base seed; case i scrambles with (seed, i)
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Per-case expansion budget for either solver
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Emit the summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CaseOutcome {
    stream: u64,
    solution_len: Option<usize>,
    agreed: bool,
    replay_ok: bool,
    bfs_expanded: u64,
    astar_expanded: u64,
}

#[derive(Debug, Serialize)]
struct Summary {
    cases: u64,
    solved: u64,
    agreed: u64,
    replay_ok: u64,
    limited: u64,
    bfs_expanded: u64,
    astar_expanded: u64,
}

/// Same walk as the solve binary: legal moves only, never undoing the
/// previous one.
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
            break;
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

fn replays_to_goal(board: &Board, moves: &[Dir]) -> bool {
    let mut b = board.clone();
    for &mv in moves {
        match apply_move(&b, mv) {
            Ok(next) => b = next,
            Err(_) => return false,
        }
    }
    b.is_solved()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let limits = SearchLimits {
        max_expansions: args.max_expansions,
    };

    let pb = ProgressBar::new(args.count);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] cases {bar:40.cyan/blue} {pos}/{len}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcomes: Vec<CaseOutcome> = (0..args.count)
        .into_par_iter()
        .map(|stream| {
            let board = scramble_walk(args.width, args.height, args.depth, args.seed, stream);

            let bfs = solve_bfs_with(&board, limits, || false)
                .expect("scrambled boards satisfy the tile invariant");
            let astar = solve_astar_with(&board, limits, || false)
                .expect("scrambled boards satisfy the tile invariant");

            let bfs_len = bfs.result.solution_len();
            let astar_len = astar.result.solution_len();
            let agreed = bfs_len == astar_len;
            let replay_ok = match (&bfs.result, &astar.result) {
                (SolveResult::Solved(b_moves), SolveResult::Solved(a_moves)) => {
                    replays_to_goal(&board, b_moves) && replays_to_goal(&board, a_moves)
                }
                _ => false,
            };

            pb.inc(1);
            CaseOutcome {
                stream,
                solution_len: bfs_len,
                agreed,
                replay_ok,
                bfs_expanded: bfs.stats.expanded,
                astar_expanded: astar.stats.expanded,
            }
        })
        .collect();
    pb.finish_and_clear();

    let mut summary = Summary {
        cases: args.count,
        solved: 0,
        agreed: 0,
        replay_ok: 0,
        limited: 0,
        bfs_expanded: 0,
        astar_expanded: 0,
    };
    for case in &outcomes {
        if case.solution_len.is_some() {
            summary.solved += 1;
        } else {
            summary.limited += 1;
        }
        if case.agreed {
            summary.agreed += 1;
        } else {
            eprintln!(
                "[bench] Warning: optimal-length mismatch on case stream {}",
                case.stream
            );
        }
        if case.replay_ok {
            summary.replay_ok += 1;
        }
        summary.bfs_expanded += case.bfs_expanded;
        summary.astar_expanded += case.astar_expanded;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "[bench] {} cases ({}x{}, depth {}): {} solved, {} agreed, {} replayed, {} limited.",
            summary.cases,
            args.width,
            args.height,
            args.depth,
            summary.solved,
            summary.agreed,
            summary.replay_ok,
            summary.limited
        );
        let ratio = if summary.astar_expanded == 0 {
            0.0
        } else {
            summary.bfs_expanded as f64 / summary.astar_expanded as f64
        };
        println!(
            "[bench] Expansions: bfs={}, astar={} ({ratio:.2}x fewer for A*).",
            summary.bfs_expanded, summary.astar_expanded
        );
    }

    Ok(())
}
