//! Popularity label for trending tokens.
//!
//! A linear points heuristic over liquidity, volume and upstream rank. It says
//! nothing about whether a token is safe.

const BASE_SCORE: u8 = 50;
const MAX_SCORE: u8 = 100;

const LIQUIDITY_THRESHOLD: f64 = 10_000.0;
const VOLUME_THRESHOLD: f64 = 50_000.0;
const TOP_RANK_CUTOFF: u32 = 10;

pub fn score(liquidity: f64, volume_24h: f64, rank: Option<u32>) -> u8 {
    let mut score = BASE_SCORE;
    if liquidity > LIQUIDITY_THRESHOLD {
        score += 20;
    }
    if volume_24h > VOLUME_THRESHOLD {
        score += 20;
    }
    if rank.is_some_and(|r| r < TOP_RANK_CUTOFF) {
        score += 10;
    }
    score.min(MAX_SCORE)
}
