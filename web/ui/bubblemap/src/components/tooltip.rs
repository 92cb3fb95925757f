use akash_holders::constants::AKASH_PRIMARY;
use akash_holders::view::Tooltip;
use dominator::{html, Dom};

pub fn tooltip(tooltip: &Tooltip) -> Dom {
    html!("div", {
        .class("bubble-tooltip")
        .style("position", "absolute")
        .style("bottom", "100%")
        .style("margin-bottom", "8px")
        .style("background", "#1A1A1A")
        .style("color", "white")
        .style("padding", "12px")
        .style("border-radius", "8px")
        .style("white-space", "nowrap")
        .style("z-index", "20")
        .style("border", format!("1px solid {}", AKASH_PRIMARY))
        .children(&mut [
            html!("div", {
                .class(["text-xs", "font-semibold", "mb-1"])
                .style("color", AKASH_PRIMARY)
                .text(&tooltip.rank_label)
            }),
            html!("div", {
                .class(["text-sm", "font-mono", "mb-1"])
                .text(&tooltip.address)
            }),
            html!("div", {
                .class(["text-sm", "font-bold", "mb-1"])
                .text(&tooltip.balance_label)
            }),
            html!("div", {
                .class("text-xs")
                .style("color", "#9CA3AF")
                .text(&tooltip.share_label)
            }),
        ])
    })
}
