//! AI Simulator CLI - Fast in-memory Age of War games for AI evaluation.
//!
//! Runs whole games against the engine with seeded dice, one AI per seat,
//! and writes per-game metrics plus a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use age_of_war::telemetry::init_tracing;
use age_of_war::{create_ai, AiPlayer};
use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use serde_json::json;
use simulator::{GameResult, Simulator, DEFAULT_MAX_MOVES};
use std::time::Instant;
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Age of War simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of players (2-6)
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u8).range(2..=6))]
    players: u8,

    /// AI type for all seats
    #[arg(long, conflicts_with = "ai")]
    seats: Option<AiType>,

    /// AI type per seat, comma-separated; a single value applies to every seat
    #[arg(long, value_delimiter = ',', default_value = "heuristic")]
    ai: Vec<AiType>,

    /// Aggression (0.0-1.0) for heuristic seats
    #[arg(long)]
    aggression: Option<f64>,

    /// Base seed; game N uses seed + N for its dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a game after this many moves
    #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
    max_moves: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(filter, args.json_logs);

    let seat_types = seat_types(&args)?;
    let ai_types: Vec<String> = seat_types.iter().map(|t| t.name().to_string()).collect();

    if args.show_output {
        info!(games = args.games, players = args.players, "Starting AI simulator");
        info!("AI types: {}", ai_types.join(", "));
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(s) => s.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        let game_res = create_ais(&seat_types, game_seed, args.aggression).and_then(|ais| {
            Simulator::new(args.players, game_seed, args.max_moves)?
                .simulate_game(&ais)
                .map_err(Into::into)
        });

        match game_res {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?} winners={:?}",
                        game_num, result.final_scores, result.winners
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (data_path, csv_path) = output_writer.output_paths();
    let (data_path, csv_path) = (data_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", data_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

fn seat_types(args: &Args) -> Result<Vec<AiType>, String> {
    let seats = usize::from(args.players);
    if let Some(all) = args.seats {
        return Ok(vec![all; seats]);
    }
    match args.ai.as_slice() {
        [one] => Ok(vec![*one; seats]),
        list if list.len() == seats => Ok(list.to_vec()),
        list => Err(format!(
            "--ai lists {} seats but the game has {} players",
            list.len(),
            seats
        )),
    }
}

/// Fresh AIs for one game. Random seats are seeded from the game seed so a
/// fixed `--seed` replays the whole run.
fn create_ais(
    seat_types: &[AiType],
    game_seed: u64,
    aggression: Option<f64>,
) -> Result<Vec<Box<dyn AiPlayer>>, Box<dyn std::error::Error>> {
    seat_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| {
            let mut config = json!({ "seed": game_seed.rotate_left(8) ^ seat as u64 });
            if let Some(a) = aggression {
                config["aggression"] = json!(a);
            }
            create_ai(ai_type.name(), Some(&config))
                .ok_or_else(|| format!("Unknown AI type: {}", ai_type.name()).into())
        })
        .collect()
}

fn print_summary(
    results: &[GameResult],
    ai_types: &[String],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let seats = ai_types.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0u64; seats];
    let mut max_scores = vec![u32::MIN; seats];
    let mut min_scores = vec![u32::MAX; seats];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate().take(seats) {
            total_scores[seat] += u64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        // Shared wins count for every winner
        for &w in &result.winners {
            if let Some(count) = wins.get_mut(usize::from(w)) {
                *count += 1;
            }
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, ai_types[seat], avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
