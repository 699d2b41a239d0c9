use anyhow::Result;

use crate::core::models::PointerLocation;

pub trait PointerLocator: Send + Sync {
    fn current_location(&self) -> Result<PointerLocation>;
}
