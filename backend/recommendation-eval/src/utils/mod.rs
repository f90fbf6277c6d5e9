// Utility functions for recommendation-eval

/// Click-through rate; 0.0 when nothing was shown
pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        clicks as f64 / impressions as f64
    }
}
