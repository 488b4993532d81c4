use std::collections::BTreeMap;

use tracing::debug;

use crate::models::account::Account;
use crate::models::liability::Liability;
use crate::models::summary::NetWorthSummary;

/// Sums assets against liabilities. Pure business logic, no clamping.
pub struct NetWorthService;

impl NetWorthService {
    pub fn new() -> Self {
        Self
    }

    /// Assets are every account's current balance, whatever its type;
    /// liabilities are every liability's current balance.
    pub fn calculate(&self, accounts: &[Account], liabilities: &[Liability]) -> NetWorthSummary {
        let mut assets_by_type = BTreeMap::new();
        let mut assets = 0.0;
        for account in accounts {
            *assets_by_type.entry(account.account_type).or_insert(0.0) += account.current_balance;
            assets += account.current_balance;
        }

        let mut liabilities_by_type = BTreeMap::new();
        let mut liabilities_total = 0.0;
        for liability in liabilities {
            *liabilities_by_type
                .entry(liability.liability_type)
                .or_insert(0.0) += liability.current_balance;
            liabilities_total += liability.current_balance;
        }

        let net_worth = assets - liabilities_total;
        debug!(assets, liabilities = liabilities_total, net_worth, "computed net worth");

        NetWorthSummary {
            assets,
            liabilities: liabilities_total,
            net_worth,
            assets_by_type,
            liabilities_by_type,
        }
    }
}

impl Default for NetWorthService {
    fn default() -> Self {
        Self::new()
    }
}
