//! The circular, ordered list of items a carousel cycles through.

use crate::item::CarouselItem;

/// Position of an item inside a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    items: Vec<CarouselItem>,
}

impl Track {
    /// Builds a track sorted by `order`.
    ///
    /// Returns `None` for an empty list. A single item is duplicated with
    /// `order + 1` (`order - 1` at `i64::MAX`) so every transition has two
    /// distinct endpoints.
    pub fn new(mut items: Vec<CarouselItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        items.sort_by_key(|item| item.order);

        if items.len() == 1 {
            let mut twin = items[0].clone();
            twin.order = twin.order.checked_add(1).unwrap_or(twin.order - 1);
            log::debug!("single item track, duplicating order {} as {}", items[0].order, twin.order);
            items.push(twin);
        }

        Some(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, slot: Slot) -> &CarouselItem {
        &self.items[slot.0]
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn slot_of(&self, order: i64) -> Option<Slot> {
        self.items.iter().position(|item| item.order == order).map(Slot)
    }

    pub fn first(&self) -> Slot {
        Slot(0)
    }

    pub fn prev(&self, slot: Slot) -> Slot {
        if slot.0 == 0 { Slot(self.items.len() - 1) } else { Slot(slot.0 - 1) }
    }

    pub fn next(&self, slot: Slot) -> Slot {
        if slot.0 + 1 >= self.items.len() { Slot(0) } else { Slot(slot.0 + 1) }
    }
}
