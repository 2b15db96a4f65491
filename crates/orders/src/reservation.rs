//! Stock reservations and the oversell conflict protocol.
//!
//! Free stock is physical stock minus everything pending online orders have
//! promised. Selling into the reserved band is not an error; it is a
//! decision the operator makes with eyes open.

use serde::{Deserialize, Serialize};

use lojista_core::{DomainError, DomainResult, OrderId, ProductId};
use lojista_products::Product;

use crate::order::EcommerceOrder;

/// Quantity of `product_id` reserved by pending online orders.
pub fn reserved_quantity(orders: &[EcommerceOrder], product_id: ProductId) -> i64 {
    orders
        .iter()
        .filter(|o| o.reserves_stock())
        .map(|o| o.quantity_of(product_id))
        .sum()
}

/// Physical stock minus pending reservations. Can go negative when the
/// operator has accepted an oversell.
pub fn free_stock(product: &Product, orders: &[EcommerceOrder]) -> i64 {
    product.stock - reserved_quantity(orders, product.id)
}

/// Outcome of checking a point-of-sale quantity against reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum StockDecision {
    /// The quantity fits inside unreserved stock.
    Allowed { free_stock: i64 },
    /// The quantity fits physical stock but eats into online reservations.
    /// The operator resolves it: cancel the blocking orders, or proceed and
    /// accept a temporary gap between physical and promised stock.
    Conflict {
        free_stock: i64,
        reserved: i64,
        blocking_orders: Vec<OrderId>,
    },
    /// Not enough physical stock, conflict or not.
    Insufficient { stock: i64 },
}

/// Check whether a POS sale of `requested` units can proceed.
pub fn check_pos_sale(
    product: &Product,
    orders: &[EcommerceOrder],
    requested: i64,
) -> DomainResult<StockDecision> {
    if requested <= 0 {
        return Err(DomainError::validation("quantity must be positive"));
    }

    if requested > product.stock {
        return Ok(StockDecision::Insufficient {
            stock: product.stock,
        });
    }

    let reserved = reserved_quantity(orders, product.id);
    let free = product.stock - reserved;
    if requested > free {
        let blocking_orders = orders
            .iter()
            .filter(|o| o.reserves_stock() && o.quantity_of(product.id) > 0)
            .map(|o| o.id)
            .collect();
        return Ok(StockDecision::Conflict {
            free_stock: free,
            reserved,
            blocking_orders,
        });
    }

    Ok(StockDecision::Allowed { free_stock: free })
}
