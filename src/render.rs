//! Card Renderer

use crate::models::{Card, Item};
use crate::surface::CardContainer;

pub struct Renderer<C> {
    container: C,
}

impl<C: CardContainer> Renderer<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    /// Replace the container's contents with one card per item, in order
    pub fn render(&self, items: &[Item]) {
        let cards = items.iter().map(Card::from).collect();
        self.container.replace(cards);
    }
}
