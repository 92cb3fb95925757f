use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;

use crate::state::BubbleMapState;

pub struct RefreshButton;

impl RefreshButton {
    pub fn render(state: Arc<BubbleMapState>) -> Dom {
        html!("button", {
            .class(["btn", "btn-outline", "mt-4", "gap-2"])
            .text("Refresh")
            .attr_signal("disabled", state.loading.signal().map(|loading| {
                if loading {
                    Some("true")
                } else {
                    None
                }
            }))
            .event(clone!(state => move |_: events::Click| {
                state.refresh();
            }))
        })
    }
}
