use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

/// Non-blocking notice shown above the stats when sample data is on screen
pub fn advisory_banner<S>(advisory: S) -> Dom
where
    S: Signal<Item = Option<String>> + 'static
{
    html!("div", {
        .child_signal(advisory.map(|advisory| {
            advisory.map(|message| {
                html!("div", {
                    .class(["alert", "alert-warning", "mb-6"])
                    .attr("role", "status")
                    .text(&message)
                })
            })
        }))
    })
}
