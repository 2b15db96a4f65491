//! `lojista-orders` — e-commerce orders and their stock reservations.
//!
//! Orders live in their own status machine, linked to inventory only through
//! item quantities. The point of sale consults them to detect oversell
//! conflicts before committing a sale.

pub mod order;
pub mod reservation;

pub use order::{EcommerceOrder, OrderItem, OrderStatus};
pub use reservation::{StockDecision, check_pos_sale, free_stock, reserved_quantity};
