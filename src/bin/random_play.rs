use plum_board::utils::random_play_harness::{run_random_play, RandomPlayConfig};
use std::env;
use std::process::ExitCode;

// Usage: random_play [max_moves] [seed|random] [pawns on|off]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let mut config = RandomPlayConfig::default();

    for (idx, name) in [(1, "MaxMoves"), (2, "Seed"), (3, "Pawns")] {
        if let Some(value) = args.get(idx) {
            if let Err(err) = config.set_option(name, value) {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "Random play: max_moves={} seed={} pawns={}",
        config.max_moves, config.seed, config.with_pawns
    );

    let report = run_random_play(&config);
    for (ply, line) in report.move_log.iter().enumerate() {
        println!("{:>3}. {}", ply + 1, line);
    }
    println!("{}", report.final_board);
    println!(
        "moves={} rejected={} stalled={}",
        report.moves_applied, report.rejected_drops, report.stalled
    );

    if report.rejected_drops > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
