use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

/// Spinner plus caption while a live fetch is running
pub fn loading_indicator<S>(is_loading: S) -> Dom
where
    S: Signal<Item = bool> + 'static
{
    html!("div", {
        .class(["flex", "items-center", "justify-center", "gap-2", "mt-2"])
        .attr("aria-live", "polite")
        .class_signal("hidden", is_loading.map(|loading| !loading))
        .children(&mut [
            html!("span", {
                .class(["loading", "loading-spinner", "loading-sm"])
            }),
            html!("span", {
                .class("text-sm")
                .style("color", "#9CA3AF")
                .text("Fetching live holders...")
            }),
        ])
    })
}
