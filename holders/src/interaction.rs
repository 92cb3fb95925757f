use serde::Serialize;

/// Hover and pinned selection for the whole map. At most one address holds
/// each role; the two roles are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    pub hovered: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleState {
    Idle,
    Hovered,
    Selected,
    HoveredSelected,
}

impl BubbleState {
    pub fn is_highlighted(self) -> bool {
        !matches!(self, BubbleState::Idle)
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self, address: &str) {
        self.hovered = Some(address.to_string());
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Clicking the pinned address unpins it; any other address takes the pin
    pub fn click(&mut self, address: &str) {
        self.selected = match self.selected.as_deref() {
            Some(current) if current == address => None,
            _ => Some(address.to_string()),
        };
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    /// Drop roles that point at addresses no longer on the map
    pub fn retain_known<'a>(&mut self, mut known: impl Iterator<Item = &'a str> + Clone) {
        if let Some(hovered) = self.hovered.as_deref() {
            if !known.clone().any(|a| a == hovered) {
                self.hovered = None;
            }
        }
        if let Some(selected) = self.selected.as_deref() {
            if !known.any(|a| a == selected) {
                self.selected = None;
            }
        }
    }

    pub fn is_hovered(&self, address: &str) -> bool {
        self.hovered.as_deref() == Some(address)
    }

    pub fn is_selected(&self, address: &str) -> bool {
        self.selected.as_deref() == Some(address)
    }

    pub fn state_of(&self, address: &str) -> BubbleState {
        match (self.is_hovered(address), self.is_selected(address)) {
            (false, false) => BubbleState::Idle,
            (true, false) => BubbleState::Hovered,
            (false, true) => BubbleState::Selected,
            (true, true) => BubbleState::HoveredSelected,
        }
    }

    pub fn is_highlighted(&self, address: &str) -> bool {
        self.state_of(address).is_highlighted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_enter_and_leave() {
        let mut state = InteractionState::new();
        state.pointer_enter("a");
        assert_eq!(state.state_of("a"), BubbleState::Hovered);
        state.pointer_enter("b");
        assert_eq!(state.state_of("a"), BubbleState::Idle);
        state.pointer_leave();
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_click_toggles_and_moves_selection() {
        let mut state = InteractionState::new();
        state.click("a");
        assert!(state.is_selected("a"));

        state.click("b");
        assert!(state.is_selected("b"));
        assert!(!state.is_selected("a"));

        state.click("b");
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_hover_and_selection_are_independent() {
        let mut state = InteractionState::new();
        state.click("a");
        state.pointer_enter("a");
        assert_eq!(state.state_of("a"), BubbleState::HoveredSelected);
        state.pointer_leave();
        assert_eq!(state.state_of("a"), BubbleState::Selected);
        assert!(state.is_highlighted("a"));
    }

    #[test]
    fn test_retain_known_drops_stale_roles() {
        let mut state = InteractionState::new();
        state.pointer_enter("gone");
        state.click("kept");
        let known = ["kept", "other"];
        state.retain_known(known.iter().copied());
        assert_eq!(state.hovered, None);
        assert_eq!(state.selected.as_deref(), Some("kept"));
    }
}
