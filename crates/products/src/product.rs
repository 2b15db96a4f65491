use serde::{Deserialize, Serialize};

use lojista_core::{KpiGoals, ProductId};

/// Catalog product, as returned by the backend.
///
/// `stock` is expected to be non-negative; the client does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Sale price in smallest currency unit (cents).
    pub price: i64,
    /// Acquisition cost in smallest currency unit (cents).
    pub cost: i64,
    pub stock: i64,
}

/// Margin actually kept after cost, tax and the card fee, percent of price.
///
/// Zero-priced products report 0 rather than dividing by zero.
pub fn real_margin_pct(product: &Product, goals: &KpiGoals) -> f64 {
    if product.price <= 0 {
        return 0.0;
    }
    let price = product.price as f64;
    let cost = product.cost as f64;
    let deductions = price * (goals.tax_rate + goals.fees.max_card_fee()) / 100.0;
    (price - cost - deductions) / price * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use lojista_core::FeeSchedule;

    fn product(price: i64, cost: i64) -> Product {
        Product {
            id: ProductId::new(),
            name: "Cafe torrado 500g".to_string(),
            sku: "CAFE-500".to_string(),
            category: "mercearia".to_string(),
            price,
            cost,
            stock: 10,
        }
    }

    fn goals(tax_rate: f64, card_fee: f64) -> KpiGoals {
        KpiGoals {
            tax_rate,
            fees: FeeSchedule {
                credit_main: card_fee,
                ..FeeSchedule::default()
            },
            ..KpiGoals::default()
        }
    }

    #[test]
    fn margin_deducts_cost_tax_and_card_fee() {
        // price 100.00, cost 40.00, tax 10%, card fee 5%:
        // (100 - 40 - 10 - 5) / 100 = 45%.
        let pct = real_margin_pct(&product(10_000, 4_000), &goals(10.0, 5.0));
        assert!((pct - 45.0).abs() < 1e-9);
    }

    #[test]
    fn zero_priced_product_reports_zero_margin() {
        assert_eq!(real_margin_pct(&product(0, 4_000), &goals(10.0, 5.0)), 0.0);
        assert_eq!(real_margin_pct(&product(-100, 4_000), &goals(10.0, 5.0)), 0.0);
    }

    #[test]
    fn margin_can_go_negative() {
        let pct = real_margin_pct(&product(10_000, 12_000), &goals(0.0, 0.0));
        assert!((pct - -20.0).abs() < 1e-9);
    }

    #[test]
    fn margin_without_rates_is_plain_markup() {
        let pct = real_margin_pct(&product(10_000, 7_500), &goals(0.0, 0.0));
        assert!((pct - 25.0).abs() < 1e-9);
    }
}
