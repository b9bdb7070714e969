use stockroom_inventory::{InventoryStats, Product};

use crate::feedback::StatusMessage;

/// Everything a view needs to draw the inventory.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub products: &'a [Product],
    pub stats: InventoryStats,
    /// The status message, if one is still visible.
    pub message: Option<&'a StatusMessage>,
}

/// Renderer invoked by the controller after every command.
pub trait InventoryView {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

impl<V: InventoryView + ?Sized> InventoryView for &mut V {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        (**self).render(snapshot)
    }
}
