use crate::models::cart::Cart;
use crate::models::order::PaymentBreakdown;

/// Deposit share of the order total required upfront.
pub const DEPOSIT_RATE: f64 = 0.25;

/// Derives display totals from a cart snapshot.
///
/// Pure arithmetic — no I/O, no error conditions. Callers guarantee the
/// total is non-negative (cart prices and quantities are non-negative by
/// construction).
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Split a total into total / deposit / balance, each rounded to
    /// 2 decimal places for display.
    ///
    /// deposit = 25% of total; balance = total − deposit.
    #[must_use]
    pub fn compute_payments(&self, total: f64) -> PaymentBreakdown {
        let deposit = total * DEPOSIT_RATE;
        let balance = total - deposit;
        PaymentBreakdown {
            total: format!("{total:.2}"),
            deposit: format!("{deposit:.2}"),
            balance: format!("{balance:.2}"),
        }
    }

    /// Breakdown for the current cart contents.
    #[must_use]
    pub fn cart_breakdown(&self, cart: &Cart) -> PaymentBreakdown {
        self.compute_payments(cart.total())
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new()
    }
}
