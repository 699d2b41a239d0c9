#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLocation {
    pub x_position: i32,
    pub y_position: i32,
}

impl PointerLocation {
    pub fn at_coordinates(x_position: i32, y_position: i32) -> Self {
        log::debug!(
            "[POINTER] locating pointer at ({}, {})",
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
        }
    }

    pub fn origin() -> Self {
        Self::at_coordinates(0, 0)
    }
}
