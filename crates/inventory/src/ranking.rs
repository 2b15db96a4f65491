//! Best-seller and slow-mover rankings over the assessed catalog.

use crate::turnover::ProductKpi;

/// Top `n` products by quantity sold in the look-back window.
///
/// Products that sold nothing are not best-sellers, whatever the catalog
/// looks like.
pub fn best_sellers(kpis: &[ProductKpi], n: usize) -> Vec<ProductKpi> {
    let mut ranked: Vec<ProductKpi> = kpis.iter().filter(|k| k.sold_qty > 0).cloned().collect();
    ranked.sort_by(|a, b| b.sold_qty.cmp(&a.sold_qty).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

/// Top `n` slowest movers: longest days of supply first, infinite supply
/// ahead of everything. Stockouts are excluded; there is nothing left to
/// move.
pub fn slowest_movers(kpis: &[ProductKpi], n: usize) -> Vec<ProductKpi> {
    let mut ranked: Vec<ProductKpi> = kpis.iter().filter(|k| k.stock > 0).cloned().collect();
    ranked.sort_by(|a, b| {
        b.days_of_supply
            .total_cmp(&a.days_of_supply)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(n);
    ranked
}
