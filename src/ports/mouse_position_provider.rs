use anyhow::Result;
use mouse_position::mouse_position::Mouse;

use crate::core::interfaces::ports::PointerLocator;
use crate::core::models::PointerLocation;

pub struct SystemPointerLocator;

impl SystemPointerLocator {
    pub fn initialize() -> Self {
        log::debug!("[MOUSE] initializing pointer locator");
        Self
    }

    fn convert_mouse_result(mouse_result: Mouse) -> Result<PointerLocation> {
        match mouse_result {
            Mouse::Position { x, y } => Ok(PointerLocation::at_coordinates(x, y)),
            Mouse::Error => anyhow::bail!("failed to get mouse position"),
        }
    }
}

impl PointerLocator for SystemPointerLocator {
    fn current_location(&self) -> Result<PointerLocation> {
        Self::convert_mouse_result(Mouse::get_mouse_position())
    }
}
