//! Order entity.

use crate::{OrderId, OrderStatus, PaymentStatus, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line item within an order. The price is captured at order
/// time so later product updates do not change past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderItem {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Unit price at order time.
    pub price: f64,
    /// Quantity ordered.
    pub quantity: u32,
}

impl OrderItem {
    /// Line total for this item.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Order entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    /// Unique identifier for the order.
    pub id: OrderId,

    /// User who placed the order.
    pub user_id: UserId,

    /// Line items.
    pub items: Vec<OrderItem>,

    /// Total amount across all items.
    pub total_amount: f64,

    /// Fulfillment status.
    pub order_status: OrderStatus,

    /// Payment status.
    pub payment_status: PaymentStatus,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order; the total is derived from the items.
    #[must_use]
    pub fn new(user_id: UserId, items: Vec<OrderItem>) -> Self {
        let total_amount = items.iter().map(OrderItem::subtotal).sum();
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            user_id,
            items,
            total_amount,
            order_status: OrderStatus::Placed,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the order as paid.
    pub fn mark_paid(&mut self) {
        self.payment_status = PaymentStatus::Paid;
        self.updated_at = Utc::now();
    }

    /// Cancels the order if it has not shipped yet.
    pub fn cancel(&mut self) -> bool {
        if self.order_status != OrderStatus::Placed {
            return false;
        }
        self.order_status = OrderStatus::Cancelled;
        self.updated_at = Utc::now();
        true
    }
}
