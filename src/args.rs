use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Leaderboard Engine",
    about = "In-memory ranked leaderboard with rank, top-N and neighbor-window queries",
    long_about = "Seeds an in-memory leaderboard from a simulated score feed and runs the \
    ranking queries against it. The engine itself never reads a clock; this binary plays \
    the caller and timestamps every update."
)]
pub struct Args {
    /// Number of simulated players to seed the board with
    #[arg(short, long, default_value_t = 10_000)]
    pub players: usize,

    /// Score submissions generated per player
    #[arg(short, long, default_value_t = 3)]
    pub updates: usize,

    /// Seed for the simulated score feed
    #[arg(short, long, env = "FEED_SEED", default_value_t = 42)]
    pub seed: u64,

    /// How many rows of the board to print
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: i64,

    /// Cap on `before + after` for rank-window queries
    #[arg(short = 'w', long, default_value_t = crate::leaderboard::constants::MAX_WINDOW)]
    pub max_window: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String
}
