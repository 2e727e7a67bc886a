#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::export::{export_transactions, write_transactions_csv};
    use crate::models::{WalletTransaction, WalletTransactionType};

    fn statement() -> Vec<WalletTransaction> {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        vec![
            WalletTransaction::new(
                WalletTransactionType::Deposit,
                dec!(1000),
                Some("Opening deposit".to_string()),
                day.and_hms_opt(9, 30, 0).unwrap(),
                dec!(1000),
            ),
            WalletTransaction::new(
                WalletTransactionType::TradeBuy,
                dec!(400.50),
                None,
                day.and_hms_opt(11, 0, 0).unwrap(),
                dec!(599.50),
            ),
        ]
    }

    #[test]
    fn writes_header_and_one_row_per_transaction() {
        let mut buffer = Vec::new();
        write_transactions_csv(&mut buffer, &statement()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Type,Amount,Description,Balance After");
        assert_eq!(
            lines[1],
            "2024-03-01 09:30:00,DEPOSIT,1000.00,Opening deposit,1000.00"
        );
        assert_eq!(lines[2], "2024-03-01 11:00:00,TRADE_BUY,400.50,,599.50");
    }

    #[test]
    fn exports_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.csv");

        export_transactions(path.to_str().unwrap(), &statement()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Date,Type,Amount,Description,Balance After"));
        assert_eq!(contents.lines().count(), 3);
    }
}
