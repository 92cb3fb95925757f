use serde::Deserialize;
use serde::Serialize;

use super::holder::HolderRecord;

/// Diameter and centre of a bubble on the logical canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleLayout {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubblePosition {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBubble {
    pub holder: HolderRecord,
    pub layout: BubbleLayout,
    pub color: &'static str,
}
