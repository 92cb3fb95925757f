use std::sync::Arc;

use akash_holders::constants::AKASH_PRIMARY;
use akash_holders::interaction::InteractionState;
use akash_holders::view::LegendRow;
use akash_holders::view::legend_rows;
use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use crate::state::BubbleMapState;

pub struct Legend;

impl Legend {
    pub fn render(state: Arc<BubbleMapState>) -> Dom {
        html!("div", {
            .class(["rounded-lg", "p-10"])
            .style("background-color", "rgba(255, 65, 76, 0.05)")
            .style("border", "1px solid rgba(255, 65, 76, 0.2)")
            .children(&mut [
                html!("h3", {
                    .class(["font-semibold", "text-lg", "mb-6"])
                    .style("color", "#FFFFFF")
                    .text("Top 15 Holders")
                }),
                html!("div", {
                    .class(["grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-4"])
                    .children_signal_vec(state.holders.signal_cloned()
                        .map(|holders| legend_rows(&holders, &InteractionState::new()))
                        .to_signal_vec()
                        .map(clone!(state => move |row| LegendItem::render(state.clone(), row))))
                }),
            ])
        })
    }
}

pub struct LegendItem;

impl LegendItem {
    pub fn render(state: Arc<BubbleMapState>, row: LegendRow) -> Dom {
        let address = row.address.clone();
        let hovered = state
            .interaction
            .signal_ref(clone!(address => move |interaction| interaction.is_hovered(&address)))
            .dedupe();

        html!("div", {
            .class(["flex", "items-center", "gap-4", "p-3", "rounded-md", "cursor-pointer"])
            .style("transition", "background-color 0.2s")
            .style_signal("background-color", hovered.map(|hovered| {
                if hovered { "rgba(255, 65, 76, 0.1)" } else { "transparent" }
            }))
            .event(clone!(state, address => move |_: events::MouseEnter| {
                state.pointer_enter(&address);
            }))
            .event(clone!(state => move |_: events::MouseLeave| {
                state.pointer_leave();
            }))
            .event(clone!(state, address => move |_: events::Click| {
                state.click(&address);
            }))
            .children(&mut [
                html!("span", {
                    .style("width", "16px")
                    .style("height", "16px")
                    .style("border-radius", "9999px")
                    .style("flex-shrink", "0")
                    .style("background-color", row.color)
                }),
                html!("span", {
                    .class(["flex-1", "font-mono", "text-sm", "truncate"])
                    .style("color", "#FFFFFF")
                    .text(&row.label)
                }),
                html!("span", {
                    .class(["text-sm", "font-semibold", "whitespace-nowrap"])
                    .style("color", AKASH_PRIMARY)
                    .text(&row.percentage_label)
                }),
            ])
        })
    }
}
