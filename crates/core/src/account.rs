//! Settlement rails.

use serde::{Deserialize, Serialize};

/// Settlement rail a ledger record settles through.
///
/// The set is fixed by the backend contract; the client never sees any other
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialAccount {
    #[serde(rename = "cash-box")]
    CashBox,
    #[serde(rename = "bank-main")]
    BankMain,
    #[serde(rename = "credit-main")]
    CreditMain,
    #[serde(rename = "boleto")]
    Boleto,
}

impl FinancialAccount {
    /// True only for the credit-card rail. Card purchase lines belong to the
    /// card statement view, not the cash-flow view.
    pub fn is_card(&self) -> bool {
        matches!(self, FinancialAccount::CreditMain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialAccount::CashBox => "cash-box",
            FinancialAccount::BankMain => "bank-main",
            FinancialAccount::CreditMain => "credit-main",
            FinancialAccount::Boleto => "boleto",
        }
    }
}

impl core::fmt::Display for FinancialAccount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
