use crate::models::cart::{Cart, CartLineItem};

/// Owns all cart mutation rules.
///
/// Pure business logic — no I/O. The facade persists the cart after every
/// call here, never batched, so storage always matches memory once any
/// single operation returns.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Add one unit of a product. A line already holding this id gets its
    /// quantity bumped; otherwise a new line is appended (insertion order
    /// is add order).
    pub fn add(&self, cart: &mut Cart, id: &str, name: &str, price: f64) {
        match cart.find_mut(id) {
            Some(item) => item.qty += 1,
            None => cart.items.push(CartLineItem::new(id, name, price)),
        }
    }

    /// Adjust a line's quantity by `delta`. Unknown ids are a no-op.
    /// A resulting quantity of zero or below removes the line entirely —
    /// quantities at or below zero are never stored.
    pub fn change_qty(&self, cart: &mut Cart, id: &str, delta: i64) {
        let Some(item) = cart.find_mut(id) else {
            return;
        };
        let new_qty = i64::from(item.qty) + delta;
        if new_qty <= 0 {
            self.remove(cart, id);
        } else {
            // new_qty is positive and bounded by u32::MAX + delta
            item.qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        }
    }

    /// Drop a line by id. Tolerates absent ids (still a mutation from the
    /// caller's point of view: the cart is persisted unconditionally).
    pub fn remove(&self, cart: &mut Cart, id: &str) {
        cart.items.retain(|i| i.id != id);
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
