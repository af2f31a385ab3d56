use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leaderboard_engine::{
    args::Args,
    leaderboard::LeaderboardService,
    utils::{progress_utils::progress_bar, test_utils::generate_player_id}
};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let service = LeaderboardService::with_max_window(args.max_window);
    seed_board(&service, &args);
    info!(players = service.player_count(), "board seeded");

    let top = service.get_top_n(args.top);
    println!("{}", serde_json::to_string_pretty(&top).expect("leaderboard rows serialize"));

    // The "show my rank" view around a mid-board player.
    let probe = generate_player_id(args.players / 2);
    match service.get_player_rank_range(&probe, 2, 2) {
        Ok(window) => {
            info!(player_id = %probe, "rank window");
            println!("{}", serde_json::to_string_pretty(&window).expect("window rows serialize"));
        }
        Err(e) => info!(player_id = %probe, error = %e, "no rank window")
    }
}

fn seed_board(service: &LeaderboardService, args: &Args) {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let bar = progress_bar((args.players * args.updates) as u64, "Seeding leaderboard".to_string());

    // The engine never generates timestamps; this binary owns the clock the
    // way a transport layer would.
    let mut timestamp = chrono::Utc::now().timestamp_millis();

    for _ in 0..args.updates {
        for player in 0..args.players {
            let score = rng.random_range(0..args.players.max(2) as i64) as f64;
            timestamp += rng.random_range(1..20);

            service
                .update_score(&generate_player_id(player), score, timestamp)
                .expect("seed updates are valid");
            bar.inc(1);
        }
    }

    bar.finish();
}
