
use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::storage::Storage;
use crate::types::AccountId;

#[derive(Debug, Serialize)]
struct BalanceRow<'a> {
    account_id: AccountId,
    currency_code: &'a str,
    #[serde(serialize_with = "serialize_amount")]
    balance: Decimal,
    transactions: usize
}

fn serialize_amount<S: serde::Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&amount.normalize())
}

/// Writes one CSV row per account, ordered by account id.
pub fn write_balance_report<S: Storage, W: Write>(storage: &S, output: W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    for account in storage.accounts() {
        writer.serialize(BalanceRow {
            account_id: account.account_id,
            currency_code: account.currency(),
            balance: account.account_balance.amount,
            transactions: storage.transactions_for(account.account_id).len()
        })?;
    }

    writer.flush()?;

    Ok(())
}
