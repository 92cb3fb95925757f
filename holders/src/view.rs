//! Render-ready description of the bubble map. Any front end (the browser
//! widget or the CLI) draws from this without recomputing anything.

use serde::Serialize;

use crate::acquisition::Acquisition;
use crate::constants::MAX_HOLDERS;
use crate::constants::SHADOW_ELEVATED;
use crate::constants::SHADOW_RESTING;
use crate::constants::TOKEN_SYMBOL;
use crate::interaction::BubbleState;
use crate::interaction::InteractionState;
use crate::layout::LayoutConfig;
use crate::layout::bubble_color;
use crate::layout::compute_layout;
use crate::model::HolderRecord;
use crate::model::PlacedBubble;
use crate::utils::format_balance;
use crate::utils::format_percentage;

pub const TITLE: &str = "Akash Network";
pub const SUBTITLE: &str = "Top Holders Distribution";
pub const TAGLINE: &str = "Bubble size represents token holdings";
pub const INSTRUCTIONS: &str =
    "Hover over bubbles to see details • Click to pin selection • Larger bubbles = more tokens";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderStats {
    pub total_holders: usize,
    pub largest_percentage: Option<f64>,
    pub top_control: f64,
}

impl HolderStats {
    pub fn from_holders(holders: &[HolderRecord]) -> Self {
        Self {
            total_holders: holders.len(),
            largest_percentage: holders.first().map(|h| h.percentage),
            top_control: holders.iter().take(MAX_HOLDERS).map(|h| h.percentage).sum(),
        }
    }

    pub fn largest_label(&self) -> String {
        match self.largest_percentage {
            Some(pct) => format!("{}%", format_percentage(pct)),
            None => "-".to_string(),
        }
    }

    pub fn top_control_label(&self) -> String {
        format!("{:.1}%", self.top_control)
    }
}

/// Visual treatment shared by a bubble and its legend row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleStyle {
    pub scale: f64,
    pub opacity: f64,
    pub z_index: u32,
    pub shadow: &'static str,
    pub tooltip_visible: bool,
}

impl BubbleStyle {
    pub fn for_state(state: BubbleState) -> Self {
        if state.is_highlighted() {
            Self {
                scale: 1.1,
                opacity: 1.0,
                z_index: 10,
                shadow: SHADOW_ELEVATED,
                tooltip_visible: true,
            }
        } else {
            Self {
                scale: 1.0,
                opacity: 0.85,
                z_index: 1,
                shadow: SHADOW_RESTING,
                tooltip_visible: false,
            }
        }
    }

    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub rank_label: String,
    pub address: String,
    pub balance_label: String,
    pub share_label: String,
}

impl Tooltip {
    pub fn for_holder(holder: &HolderRecord) -> Self {
        Self {
            rank_label: format!("Rank #{}", holder.rank),
            address: holder.address.clone(),
            balance_label: format!("{} {}", format_balance(holder.balance), TOKEN_SYMBOL),
            share_label: format!("{}% of supply", format_percentage(holder.percentage)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub bubble: PlacedBubble,
    pub state: BubbleState,
    pub style: BubbleStyle,
    pub label: String,
    pub percentage_label: String,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub address: String,
    pub color: &'static str,
    pub label: String,
    pub percentage_label: String,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleMapView {
    pub stats: HolderStats,
    pub bubbles: Vec<BubbleView>,
    pub legend: Vec<LegendRow>,
    pub advisory: Option<String>,
}

impl BubbleMapView {
    pub fn build(
        holders: &[HolderRecord],
        interaction: &InteractionState,
        layout: &LayoutConfig,
        advisory: Option<String>,
    ) -> Self {
        let bubbles = compute_layout(holders, layout)
            .into_iter()
            .map(|bubble| bubble_view(bubble, interaction))
            .collect();

        Self {
            stats: HolderStats::from_holders(holders),
            bubbles,
            legend: legend_rows(holders, interaction),
            advisory,
        }
    }

    pub fn from_acquisition(
        acquisition: &Acquisition,
        interaction: &InteractionState,
        layout: &LayoutConfig,
    ) -> Self {
        Self::build(&acquisition.holders, interaction, layout, acquisition.advisory.clone())
    }
}

pub fn bubble_view(bubble: PlacedBubble, interaction: &InteractionState) -> BubbleView {
    let state = interaction.state_of(&bubble.holder.address);
    BubbleView {
        state,
        style: BubbleStyle::for_state(state),
        label: format!("#{}", bubble.holder.rank),
        percentage_label: format!("{}%", format_percentage(bubble.holder.percentage)),
        tooltip: Tooltip::for_holder(&bubble.holder),
        bubble,
    }
}

pub fn legend_rows(holders: &[HolderRecord], interaction: &InteractionState) -> Vec<LegendRow> {
    holders
        .iter()
        .take(MAX_HOLDERS)
        .map(|holder| LegendRow {
            address: holder.address.clone(),
            color: bubble_color(holder.rank),
            label: format!("#{} {}", holder.rank, holder.address),
            percentage_label: format!("{}%", format_percentage(holder.percentage)),
            hovered: interaction.is_hovered(&holder.address),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::fallback_holders;

    #[test]
    fn test_stats_for_fallback() {
        let stats = HolderStats::from_holders(&fallback_holders());
        assert_eq!(stats.total_holders, 15);
        assert_eq!(stats.largest_label(), "15.5%");
        assert_eq!(stats.top_control_label(), "87.8%");
    }

    #[test]
    fn test_stats_for_empty_set() {
        let stats = HolderStats::from_holders(&[]);
        assert_eq!(stats.total_holders, 0);
        assert_eq!(stats.largest_label(), "-");
        assert_eq!(stats.top_control_label(), "0.0%");
    }

    #[test]
    fn test_tooltip_text() {
        let tooltip = Tooltip::for_holder(&HolderRecord::new("akash1abc...xyz1", 15_000_000.0, 15.5, 1));
        assert_eq!(tooltip.rank_label, "Rank #1");
        assert_eq!(tooltip.balance_label, "15.00M AKT");
        assert_eq!(tooltip.share_label, "15.5% of supply");
    }

    #[test]
    fn test_highlighted_bubble_style() {
        let mut interaction = InteractionState::new();
        interaction.click("akash1def...xyz2");
        let view = BubbleMapView::build(&fallback_holders(), &interaction, &LayoutConfig::default(), None);

        let selected = &view.bubbles[1];
        assert_eq!(selected.state, BubbleState::Selected);
        assert_eq!(selected.style.scale, 1.1);
        assert!(selected.style.tooltip_visible);
        assert_eq!(selected.style.transform(), "translate(-50%, -50%) scale(1.1)");

        let idle = &view.bubbles[0];
        assert_eq!(idle.style.opacity, 0.85);
        assert!(!idle.style.tooltip_visible);
        assert_eq!(idle.style.transform(), "translate(-50%, -50%) scale(1)");
    }

    #[test]
    fn test_legend_mirrors_hover() {
        let mut interaction = InteractionState::new();
        interaction.pointer_enter("akash1abc...xyz1");
        let rows = legend_rows(&fallback_holders(), &interaction);
        assert_eq!(rows.len(), 15);
        assert!(rows[0].hovered);
        assert!(!rows[1].hovered);
        assert_eq!(rows[0].label, "#1 akash1abc...xyz1");
        assert_eq!(rows[0].color, "#FF414C");
    }
}
