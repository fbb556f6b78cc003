//! Random Move Engine
//!
//! Picks uniformly among the moves its side can plan from its own fog.
//! Useful for:
//! - Driving self-play before a real engine is wired in
//! - Baseline comparisons (the alpha-beta engine should beat this easily)
//! - Stress testing move generation and the turn rules

use fog_core::{fog_view, generate_moves, BoardState, Engine, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that moves at random, except that it never passes up a king
/// it can see.
///
/// Seeded, so a game between two seeded engines replays exactly.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Moves planned on the fogged board that the true board also allows.
    fn candidates(state: &BoardState) -> Vec<Move> {
        let side = state.side_to_move;
        let truth = generate_moves(state, side);
        generate_moves(&fog_view(state, side), side)
            .into_iter()
            .filter_map(|c| {
                truth
                    .iter()
                    .find(|m| m.from == c.from && m.to == c.to && m.promo == c.promo)
                    .copied()
            })
            .collect()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &BoardState, _limits: SearchLimits) -> SearchResult {
        let moves = Self::candidates(state);
        self.nodes = moves.len() as u64;

        let best_move = match moves.iter().find(|m| m.captures_king()) {
            Some(mv) => Some(*mv),
            None => moves.choose(&mut self.rng).copied(),
        };

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.nodes = 0;
    }
}
