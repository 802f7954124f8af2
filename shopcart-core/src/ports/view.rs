//! Cart view port
//!
//! Anything that displays a cart implements [`CartView`]. The service
//! calls `redraw` once after every mutation with a freshly built table.

use crate::domain::result::Result;
use crate::domain::CartTable;

/// A display surface for the cart table
pub trait CartView {
    /// Replace whatever is shown with `table`
    fn redraw(&mut self, table: &CartTable) -> Result<()>;
}

/// View that draws nothing, for headless use
#[derive(Debug, Default)]
pub struct NullView;

impl CartView for NullView {
    fn redraw(&mut self, _table: &CartTable) -> Result<()> {
        Ok(())
    }
}
