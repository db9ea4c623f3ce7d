use crate::errors::StoreError;
use crate::models::order::{OrderView, OrderViewLine, TimelineView, TrackedOrder};

/// Display color for a tracked order's status. Unknown statuses render
/// black rather than failing — the server may add statuses over time.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
    match status {
        "Processing" => "#f39c12",
        "Shipped" => "#3498db",
        "Delivered" => "#27ae60",
        "Cancelled" => "#e74c3c",
        _ => "#000",
    }
}

/// Turns a server-provided tracked order into a render-ready view.
pub struct TrackingService;

impl TrackingService {
    pub fn new() -> Self {
        Self
    }

    /// Both lookup keys are required (trimmed, non-blank) before any
    /// request is issued.
    pub fn validate(&self, order_number: &str, phone: &str) -> Result<(), StoreError> {
        if order_number.trim().is_empty() || phone.trim().is_empty() {
            return Err(StoreError::Validation(
                "Please enter both Order ID and phone number.".into(),
            ));
        }
        Ok(())
    }

    /// Compute per-line subtotals and the running total, resolve the
    /// status color, and format the timeline (server order preserved).
    #[must_use]
    pub fn build_view(&self, order: TrackedOrder) -> OrderView {
        let mut total = 0.0;
        let lines: Vec<OrderViewLine> = order
            .items
            .iter()
            .map(|item| {
                let subtotal = f64::from(item.qty) * item.price;
                total += subtotal;
                OrderViewLine {
                    name: item.product.name.clone(),
                    qty: item.qty,
                    price: item.price,
                    subtotal,
                }
            })
            .collect();

        let timeline: Vec<TimelineView> = order
            .tracking
            .iter()
            .map(|entry| TimelineView {
                status: entry.status.clone(),
                description: entry.description.clone(),
                date: entry.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            })
            .collect();

        OrderView {
            status_color: status_color(&order.status),
            status: order.status,
            lines,
            total,
            customer_name: order.customer_name,
            phone: order.phone,
            order_number: order.order_number,
            payment_method: order.payment.method,
            payment_status: order.payment.status,
            timeline,
        }
    }
}

impl Default for TrackingService {
    fn default() -> Self {
        Self::new()
    }
}
