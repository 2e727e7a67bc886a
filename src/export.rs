use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use crate::models::WalletTransaction;

/// Writes the wallet statement as CSV: header row plus one row per
/// transaction.
pub fn write_transactions_csv<W: Write>(
    writer: W,
    transactions: &[WalletTransaction],
) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Type", "Amount", "Description", "Balance After"])?;

    for transaction in transactions {
        csv_writer.write_record([
            transaction
                .created_at()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            transaction.transaction_type().to_string(),
            format!("{:.2}", transaction.amount()),
            transaction.description().clone().unwrap_or_default(),
            format!("{:.2}", transaction.balance_after()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// CSV export to a file path, with `~` expanded.
pub fn export_transactions(path: &str, transactions: &[WalletTransaction]) -> Result<()> {
    let expanded = shellexpand::tilde(path);
    let file = File::create(expanded.as_ref())
        .with_context(|| format!("Failed to create CSV file at path: {}", expanded))?;

    write_transactions_csv(file, transactions)
}
