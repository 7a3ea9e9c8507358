//! Cart slice: a pure, total reducer over cart events.
//!
//! Both events are total functions of the state: there is no error path.
//! Removing an absent id is a benign no-op, and adding a product whose id
//! is already in the cart is a no-op too: the first add wins. The source
//! behavior had no quantity field, so repeat adds neither duplicate the
//! line nor increment anything; this keeps the at-most-one-line-per-id
//! invariant by construction.

use crate::model::{CartLine, Product, ProductId};

/// Cart mutation events.
#[derive(Debug, Clone)]
pub enum CartEvent {
    AddToCart(Product),
    RemoveFromCart(ProductId),
}

/// Applies one event to the cart, returning the new line sequence.
pub fn reduce(mut lines: Vec<CartLine>, event: CartEvent) -> Vec<CartLine> {
    match event {
        CartEvent::AddToCart(product) => {
            if lines.iter().all(|line| line.id != product.id) {
                lines.push(CartLine::from(product));
            }
            lines
        }
        CartEvent::RemoveFromCart(id) => {
            lines.retain(|line| line.id != id);
            lines
        }
    }
}
