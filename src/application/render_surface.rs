// Port for drawing panels into named render targets
use crate::domain::panel::Panel;

pub trait RenderSurface: Send + Sync {
    /// Replace whatever `target` currently shows with `panel`
    fn draw(&self, target: &str, panel: Panel);
}
