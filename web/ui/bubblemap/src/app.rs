use std::sync::Arc;

pub use dominator::{clone, events, html, Dom};
pub use futures_signals::signal::{Mutable, Signal, SignalExt};

use akash_holders::view;

use crate::components::advisory::advisory_banner;
use crate::components::bubble::BubbleCanvas;
use crate::components::buttons::RefreshButton;
use crate::components::legend::Legend;
use crate::components::loading::loading_indicator;
use crate::components::stats::StatsBar;
use crate::state::BubbleMapState;

#[derive(Clone)]
pub struct App {
    pub state: Arc<BubbleMapState>,
}

impl App {
    pub fn new(state: Arc<BubbleMapState>) -> Arc<Self> {
        Arc::new(Self { state })
    }

    pub fn render(app: Arc<Self>) -> Dom {
        let state = app.state.clone();
        html!("div", {
            .class(["bubblemap", "min-h-screen"])
            .style("background", "linear-gradient(135deg, #000000 0%, #1a0505 50%, #000000 100%)")
            .style("padding", "3rem")
            .children(&mut [
                html!("div", {
                    .class(["mx-auto"])
                    .style("max-width", "1280px")
                    .children(&mut [
                        Self::render_header(&state),
                        advisory_banner(state.advisory.signal_cloned()),
                        StatsBar::render(state.clone()),
                        BubbleCanvas::render(state.clone()),
                        Legend::render(state.clone()),
                        html!("p", {
                            .class(["text-center", "text-sm", "mt-10"])
                            .style("color", "#9CA3AF")
                            .text(view::INSTRUCTIONS)
                        }),
                    ])
                })
            ])
        })
    }

    fn render_header(state: &Arc<BubbleMapState>) -> Dom {
        html!("header", {
            .class(["text-center", "mb-12"])
            .children(&mut [
                html!("h1", {
                    .class(["text-4xl", "font-bold"])
                    .style("color", "#FFFFFF")
                    .text(view::TITLE)
                }),
                html!("h2", {
                    .class(["text-2xl", "font-semibold", "mb-2"])
                    .style("color", akash_holders::constants::AKASH_PRIMARY)
                    .text(view::SUBTITLE)
                }),
                html!("p", {
                    .style("color", "#9CA3AF")
                    .text(view::TAGLINE)
                }),
            ])
            .apply_if(state.is_live(), clone!(state => move |dom| {
                dom.children(&mut [
                    RefreshButton::render(state.clone()),
                    loading_indicator(state.loading.signal()),
                ])
            }))
        })
    }
}
