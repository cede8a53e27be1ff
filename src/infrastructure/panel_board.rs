// In-memory render surface holding the latest panel per target
use crate::application::render_surface::RenderSurface;
use crate::domain::panel::Panel;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct PanelBoard {
    panels: Mutex<BTreeMap<String, Panel>>,
}

impl PanelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self, target: &str) -> Option<Panel> {
        self.panels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(target)
            .cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, Panel> {
        self.panels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RenderSurface for PanelBoard {
    fn draw(&self, target: &str, panel: Panel) {
        self.panels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(target.to_string(), panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_replaces_target() {
        let board = PanelBoard::new();
        board.draw("netSalesMTD", Panel::tile("$1"));
        board.draw("netSalesMTD", Panel::tile("$2"));
        board.draw("aov", Panel::tile("$3"));

        assert_eq!(board.get("netSalesMTD"), Some(Panel::tile("$2")));
        let snapshot = board.snapshot();
        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["aov", "netSalesMTD"]);
    }

    #[test]
    fn test_panel_serialization() {
        let tile = serde_json::to_value(Panel::tile("12.5%")).unwrap();
        assert_eq!(tile, serde_json::json!({"kind": "tile", "text": "12.5%"}));

        let chart = serde_json::to_value(Panel::chart(serde_json::json!({"data": []}))).unwrap();
        assert_eq!(chart, serde_json::json!({"kind": "chart", "figure": {"data": []}}));
    }
}
