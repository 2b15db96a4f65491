use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lojista_core::{DomainError, DomainResult, OrderId, ProductId};

/// E-commerce order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Sent,
    Delivered,
    Cancelled,
}

/// One reserved line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// An online order, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcommerceOrder {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl EcommerceOrder {
    /// Pending orders still hold their reservations against stock.
    pub fn reserves_stock(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .filter(|i| i.product_id == product_id)
            .map(|i| i.quantity)
            .sum()
    }

    pub fn mark_sent(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(DomainError::invariant("only pending orders can be sent"));
        }
        self.status = OrderStatus::Sent;
        Ok(())
    }

    pub fn mark_delivered(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Sent {
            return Err(DomainError::invariant("only sent orders can be delivered"));
        }
        self.status = OrderStatus::Delivered;
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.status {
            OrderStatus::Pending | OrderStatus::Sent => {
                self.status = OrderStatus::Cancelled;
                Ok(())
            }
            OrderStatus::Delivered => Err(DomainError::invariant(
                "delivered orders cannot be cancelled",
            )),
            OrderStatus::Cancelled => Err(DomainError::conflict("order already cancelled")),
        }
    }
}
