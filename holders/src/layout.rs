//! Bubble sizing, spiral placement and palette lookup.
//!
//! Layout is a pure function of the holder set: nothing here is cached, and
//! bubbles are allowed to overlap.

use serde::Deserialize;
use serde::Serialize;

use crate::constants::BUBBLE_PALETTE;
use crate::constants::CANVAS_HEIGHT;
use crate::constants::CANVAS_PADDING;
use crate::constants::CANVAS_WIDTH;
use crate::constants::MAX_BUBBLE_SIZE;
use crate::constants::MIN_BUBBLE_SIZE;
use crate::constants::SPIRAL_ANGLE_STEP;
use crate::constants::SPIRAL_RADIUS_DIVISOR;
use crate::model::BubbleLayout;
use crate::model::BubblePosition;
use crate::model::HolderRecord;
use crate::model::PlacedBubble;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            padding: CANVAS_PADDING,
            min_size: MIN_BUBBLE_SIZE,
            max_size: MAX_BUBBLE_SIZE,
        }
    }
}

/// Smallest and largest balance in the set
pub fn balance_range(holders: &[HolderRecord]) -> Option<(f64, f64)> {
    holders.iter().map(|h| h.balance).fold(None, |acc, b| match acc {
        None => Some((b, b)),
        Some((min, max)) => Some((min.min(b), max.max(b))),
    })
}

/// Linear map of `balance` from `[min, max]` into `[min_size, max_size]`.
/// A degenerate range (all balances equal) sits at the midpoint.
pub fn bubble_size(
    balance: f64,
    min_balance: f64,
    max_balance: f64,
    config: &LayoutConfig,
) -> f64 {
    let span = max_balance - min_balance;
    let normalized = if span > 0.0 && span.is_finite() {
        ((balance - min_balance) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    config.min_size + normalized * (config.max_size - config.min_size)
}

/// Spiral placement: angle grows by a fixed step, radius by index share.
/// The centre is clamped so it stays `padding` away from every edge.
pub fn bubble_position(
    index: usize,
    total: usize,
    config: &LayoutConfig,
) -> BubblePosition {
    let total = total.max(1) as f64;
    let angle = index as f64 * SPIRAL_ANGLE_STEP;
    let radius = (index as f64 / total) * config.canvas_width.min(config.canvas_height) / SPIRAL_RADIUS_DIVISOR;

    let x = config.canvas_width / 2.0 + radius * angle.cos();
    let y = config.canvas_height / 2.0 + radius * angle.sin();

    BubblePosition {
        left: clamp_axis(x, config.padding, config.canvas_width - config.padding),
        top: clamp_axis(y, config.padding, config.canvas_height - config.padding),
    }
}

// Canvases narrower than twice the padding collapse onto the centre line
fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    if low > high {
        return (low + high) / 2.0;
    }
    value.max(low).min(high)
}

pub fn bubble_color(rank: u32) -> &'static str {
    let index = (rank.saturating_sub(1) as usize) % BUBBLE_PALETTE.len();
    BUBBLE_PALETTE[index]
}

pub fn compute_layout(holders: &[HolderRecord], config: &LayoutConfig) -> Vec<PlacedBubble> {
    let Some((min_balance, max_balance)) = balance_range(holders) else {
        return Vec::new();
    };

    holders
        .iter()
        .enumerate()
        .map(|(index, holder)| {
            let position = bubble_position(index, holders.len(), config);
            PlacedBubble {
                holder: holder.clone(),
                layout: BubbleLayout {
                    size: bubble_size(holder.balance, min_balance, max_balance, config),
                    left: position.left,
                    top: position.top,
                },
                color: bubble_color(holder.rank),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_size_bounds() {
        let config = LayoutConfig::default();
        assert_eq!(bubble_size(10.0, 10.0, 20.0, &config), 40.0);
        assert_eq!(bubble_size(20.0, 10.0, 20.0, &config), 180.0);
        assert_eq!(bubble_size(15.0, 10.0, 20.0, &config), 110.0);
    }

    #[test]
    fn test_bubble_size_equal_balances_is_finite() {
        let config = LayoutConfig::default();
        let size = bubble_size(5.0, 5.0, 5.0, &config);
        assert!(size.is_finite());
        assert_eq!(size, 110.0);
    }

    #[test]
    fn test_first_bubble_sits_at_centre() {
        let config = LayoutConfig::default();
        let position = bubble_position(0, 15, &config);
        assert_eq!(position, BubblePosition { left: 400.0, top: 300.0 });
    }

    #[test]
    fn test_positions_stay_inside_padding() {
        let config = LayoutConfig::default();
        for index in 0..15 {
            let p = bubble_position(index, 15, &config);
            assert!(p.left >= 100.0 && p.left <= 700.0, "left {} out of bounds", p.left);
            assert!(p.top >= 100.0 && p.top <= 500.0, "top {} out of bounds", p.top);
        }
    }

    #[test]
    fn test_bubble_position_follows_spiral() {
        let config = LayoutConfig::default();
        let p = bubble_position(1, 15, &config);
        let radius = (1.0 / 15.0) * 600.0 / 2.5;
        assert!((p.left - (400.0 + radius * 2.4f64.cos())).abs() < 1e-9);
        assert!((p.top - (300.0 + radius * 2.4f64.sin())).abs() < 1e-9);
    }

    #[test]
    fn test_bubble_color_wraps_by_rank() {
        assert_eq!(bubble_color(1), "#FF414C");
        assert_eq!(bubble_color(15), "#FFFCF4");
        assert_eq!(bubble_color(16), "#FF414C");
        assert_eq!(bubble_color(0), "#FF414C");
    }

    #[test]
    fn test_compute_layout_empty() {
        assert!(compute_layout(&[], &LayoutConfig::default()).is_empty());
    }
}
