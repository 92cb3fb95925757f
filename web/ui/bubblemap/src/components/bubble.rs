use std::sync::Arc;

use akash_holders::layout::compute_layout;
use akash_holders::model::PlacedBubble;
use akash_holders::view::BubbleStyle;
use akash_holders::view::bubble_view;
use dominator::{clone, events, html, Dom};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::SignalVecExt;

use super::tooltip::tooltip;
use crate::state::BubbleMapState;

pub struct BubbleCanvas;

impl BubbleCanvas {
    pub fn render(state: Arc<BubbleMapState>) -> Dom {
        let layout = state.config.layout.clone();

        html!("div", {
            .class(["rounded-2xl", "p-12", "mb-12"])
            .style("background-color", "rgba(255, 65, 76, 0.05)")
            .style("border", "1px solid rgba(255, 65, 76, 0.2)")
            .children(&mut [
                html!("div", {
                    .style("position", "relative")
                    .style("width", format!("{}px", layout.canvas_width))
                    .style("height", format!("{}px", layout.canvas_height))
                    .style("margin", "0 auto")
                    .children_signal_vec(state.holders.signal_cloned()
                        .map(move |holders| compute_layout(&holders, &layout))
                        .to_signal_vec()
                        .map(clone!(state => move |bubble| Bubble::render(state.clone(), bubble))))
                })
            ])
        })
    }
}

pub struct Bubble;

impl Bubble {
    pub fn render(state: Arc<BubbleMapState>, bubble: PlacedBubble) -> Dom {
        let address = bubble.holder.address.clone();
        let view = bubble_view(bubble, &state.interaction.lock_ref());
        let size = format!("{}px", view.bubble.layout.size);

        html!("div", {
            .class("bubble")
            .attr("data-address", &address)
            .style("position", "absolute")
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("width", size.clone())
            .style("height", size)
            .style("left", format!("{}px", view.bubble.layout.left))
            .style("top", format!("{}px", view.bubble.layout.top))
            .style("background-color", view.bubble.color)
            .style("border-radius", "50%")
            .style("cursor", "pointer")
            .style("transition", "all 0.3s ease")
            .style_signal("transform", style_signal(&state, &address, |style| style.transform()))
            .style_signal("opacity", style_signal(&state, &address, |style| style.opacity.to_string()))
            .style_signal("z-index", style_signal(&state, &address, |style| style.z_index.to_string()))
            .style_signal("box-shadow", style_signal(&state, &address, |style| style.shadow.to_string()))
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
                html!("div", {
                    .class(["text-center", "font-bold"])
                    .style("color", "white")
                    .children(&mut [
                        html!("div", {
                            .class("text-sm")
                            .text(&view.label)
                        }),
                        html!("div", {
                            .class(["text-xs", "mt-1"])
                            .text(&view.percentage_label)
                        }),
                    ])
                }),
            ])
            .child_signal(style_signal(&state, &address, |style| style.tooltip_visible).dedupe().map(clone!(view => move |visible| {
                if visible {
                    Some(tooltip(&view.tooltip))
                } else {
                    None
                }
            })))
        })
    }
}

/// Follows the interaction state and projects this bubble's style through `f`
fn style_signal<T, F>(
    state: &Arc<BubbleMapState>,
    address: &str,
    f: F,
) -> impl Signal<Item = T>
where
    F: Fn(BubbleStyle) -> T + 'static,
{
    let address = address.to_string();
    state
        .interaction
        .signal_ref(move |interaction| f(BubbleStyle::for_state(interaction.state_of(&address))))
}
