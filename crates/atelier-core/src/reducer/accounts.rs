//! Account ledger: get-or-create records and income accumulation.

use tracing::debug;

use super::MarketIndexer;
use crate::model::Account;
use crate::store::EntityStore;
use crate::uri::TokenUriSource;

impl<S: EntityStore, U: TokenUriSource> MarketIndexer<S, U> {
    /// Looks up an account by address, creating it with zeroed
    /// accumulators on first reference.
    pub(super) fn get_or_create_account(&mut self, address: &str) -> Account {
        if let Some(account) = self.store.account(address) {
            return account;
        }
        let account = Account::new(address);
        self.store.put_account(account.clone());
        debug!("account created: {address}");
        account
    }

    /// Credits primary-sale income to an account.
    pub(super) fn credit_primary_income(&mut self, address: &str, amount: u128) {
        let mut account = self.get_or_create_account(address);
        account.total_primary_income += amount;
        debug!(
            "primary income credited: {address} +{amount} = {}",
            account.total_primary_income
        );
        self.store.put_account(account);
    }

    /// Credits a royalty to an account.
    pub(super) fn credit_royalty(&mut self, address: &str, amount: u128) {
        let mut account = self.get_or_create_account(address);
        account.total_royalty += amount;
        debug!(
            "royalty credited: {address} +{amount} = {}",
            account.total_royalty
        );
        self.store.put_account(account);
    }
}
