use std::sync::Arc;

use akash_holders::constants::AKASH_PRIMARY;
use akash_holders::view::HolderStats;
use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

use crate::state::BubbleMapState;

pub struct StatsBar;

impl StatsBar {
    pub fn render(state: Arc<BubbleMapState>) -> Dom {
        let stats = || state.holders.signal_ref(|holders| HolderStats::from_holders(holders));

        html!("div", {
            .class(["grid", "grid-cols-1", "md:grid-cols-3", "gap-6", "mb-12"])
            .children(&mut [
                stat_card("Total Holders", stats().map(|s| s.total_holders.to_string())),
                stat_card("Largest Holder", stats().map(|s| s.largest_label())),
                stat_card("Top 15 Control", stats().map(|s| s.top_control_label())),
            ])
        })
    }
}

fn stat_card<S>(label: &str, value: S) -> Dom
where
    S: Signal<Item = String> + 'static
{
    html!("div", {
        .class(["rounded-lg", "p-8"])
        .style("background-color", "rgba(255, 65, 76, 0.1)")
        .style("border", "1px solid rgba(255, 65, 76, 0.3)")
        .children(&mut [
            html!("p", {
                .class(["text-sm", "mb-1"])
                .style("color", "#9CA3AF")
                .text(label)
            }),
            html!("p", {
                .class(["text-3xl", "font-bold"])
                .style("color", AKASH_PRIMARY)
                .text_signal(value)
            }),
        ])
    })
}
