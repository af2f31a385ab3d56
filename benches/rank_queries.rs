use std::fmt::Display;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use leaderboard_engine::{
    leaderboard::LeaderboardService,
    utils::test_utils::{generate_score_feed, naive_leaderboard, ScoreUpdate}
};

#[derive(Debug, Clone)]
struct TestInput {
    feed: Vec<ScoreUpdate>,
    players: usize
}

impl Display for TestInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Players: {}", self.players)
    }
}

fn seeded_service(feed: &[ScoreUpdate]) -> LeaderboardService {
    let service = LeaderboardService::new();
    for update in feed {
        service
            .update_score(&update.player_id, update.score, update.timestamp)
            .expect("generated updates are valid");
    }

    service
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for players in [1_000, 10_000] {
        let input = TestInput {
            feed: generate_score_feed(players, 2, 42),
            players
        };

        c.bench_with_input(BenchmarkId::new("seed_board", &input), &input, |b, i| {
            b.iter(|| seeded_service(&i.feed))
        });

        let service = seeded_service(&input.feed);
        let probe = input.feed[input.feed.len() / 2].player_id.clone();

        c.bench_with_input(BenchmarkId::new("rank_indexed", &input), &input, |b, _| {
            b.iter(|| service.get_player_rank(&probe).unwrap())
        });

        // The pre-index way: a full rebuild and scan per rank query.
        c.bench_with_input(BenchmarkId::new("rank_full_scan", &input), &input, |b, i| {
            b.iter(|| {
                let board = naive_leaderboard(&i.feed);
                board.iter().position(|(player_id, _)| player_id == &probe)
            })
        });

        c.bench_with_input(BenchmarkId::new("top_100", &input), &input, |b, _| {
            b.iter(|| service.get_top_n(100))
        });

        c.bench_with_input(BenchmarkId::new("rank_window", &input), &input, |b, _| {
            b.iter(|| service.get_player_rank_range(&probe, 10, 10).unwrap())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
