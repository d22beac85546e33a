//! True Range derivation.

use voltick_types::Bar;

/// Computes the True Range sequence over an ordered bar slice.
///
/// For each index `i` in `1..bars.len()`:
///
/// ```text
/// TR[i] = max(high[i] - low[i], |high[i] - close[i-1]|, |low[i] - close[i-1]|)
/// ```
///
/// The first bar has no prior close and produces no value, so the
/// result has length `bars.len() - 1` and `result[i]` corresponds to
/// `bars[i + 1]`. Fewer than two bars produce an empty sequence. Every
/// value is non-negative for shape-valid bars.
#[must_use]
pub fn true_range(bars: &[Bar]) -> Vec<f64> {
    if bars.len() < 2 {
        return Vec::new();
    }

    bars.windows(2)
        .map(|pair| {
            let prev_close = pair[0].close;
            let bar = pair[1];
            let hl = bar.high - bar.low;
            let hc = (bar.high - prev_close).abs();
            let lc = (bar.low - prev_close).abs();
            hl.max(hc).max(lc)
        })
        .collect()
}
