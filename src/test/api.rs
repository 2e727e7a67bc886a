#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::{self, ApiClient, Session};
    use crate::cache::QuoteCache;
    use crate::models::{TradeType, WalletTransactionType};

    fn session() -> Session {
        Session::new(
            "token-123".to_string(),
            7,
            "jane@example.com".to_string(),
            "Jane Doe".to_string(),
        )
    }

    #[tokio::test]
    async fn login_builds_a_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "email": "jane@example.com",
                "password": "secret",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": "token-123",
                "id": 7,
                "email": "jane@example.com",
                "firstName": "Jane",
                "lastName": "Doe",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let session = api::auth::login(&client, "jane@example.com", "secret")
            .await
            .unwrap();

        assert_eq!(session.token(), "token-123");
        assert_eq!(*session.user_id(), 7);
        assert_eq!(session.name(), "Jane Doe");
    }

    #[tokio::test]
    async fn backend_error_bodies_surface_in_the_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({
                    "message": "Invalid credentials",
                })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = api::auth::login(&client, "jane@example.com", "wrong")
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn trade_history_decodes_the_pagination_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/portfolio/trades"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "10"))
            .and(header("Authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [{
                    "stockSymbol": "TCS",
                    "type": "BUY",
                    "quantity": 10,
                    "price": 100.5,
                    "date": "2024-03-01T10:00:00",
                }],
                "page": 1,
                "limit": 10,
                "total": 1,
                "pages": 1,
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let batch = api::portfolio::fetch_trades(&client, &session(), 1, 10)
            .await
            .unwrap();

        assert!(batch.is_last());
        assert_eq!(batch.transactions().len(), 1);
        let trade = &batch.transactions()[0];
        assert_eq!(trade.symbol(), "TCS");
        assert_eq!(*trade.trade_type(), TradeType::Buy);
        assert_eq!(*trade.price(), dec!(100.5));
    }

    #[tokio::test]
    async fn fetch_all_trades_walks_every_page() {
        let server = MockServer::start().await;
        let trade = |symbol: &str| {
            json!({
                "stockSymbol": symbol,
                "type": "BUY",
                "quantity": 1,
                "price": 50.5,
                "date": "2024-03-01T10:00:00",
            })
        };
        Mock::given(method("GET"))
            .and(path("/portfolio/trades"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [trade("TCS")],
                "page": 1,
                "limit": 100,
                "total": 2,
                "pages": 2,
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/portfolio/trades"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [trade("INFY")],
                "page": 2,
                "limit": 100,
                "total": 2,
                "pages": 2,
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let trades = api::portfolio::fetch_all_trades(&client, &session())
            .await
            .unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].symbol(), "TCS");
        assert_eq!(trades[1].symbol(), "INFY");
    }

    #[tokio::test]
    async fn trade_execution_returns_the_new_wallet_balance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/trade"))
            .and(header("Authorization", "Bearer token-123"))
            .and(body_json(json!({
                "symbol": "TCS",
                "type": "BUY",
                "quantity": 3,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Trade executed successfully",
                "walletBalance": 849.5,
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let outcome = api::trade::execute(&client, &session(), "TCS", TradeType::Buy, 3)
            .await
            .unwrap();

        assert_eq!(outcome.message(), "Trade executed successfully");
        assert_eq!(*outcome.wallet_balance(), dec!(849.5));
    }

    #[tokio::test]
    async fn deposit_posts_the_amount_and_returns_the_new_balance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wallet/deposit"))
            .and(body_json(json!({ "amount": 250.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wallet": { "balance": 1250.5 },
                "message": "Deposit successful",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let balance = api::wallet::deposit(&client, &session(), dec!(250))
            .await
            .unwrap();

        assert_eq!(balance, dec!(1250.5));
    }

    #[tokio::test]
    async fn wallet_statement_decodes_transaction_kinds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/transactions"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [{
                    "type": "TRADE_BUY",
                    "amount": 400.5,
                    "description": null,
                    "createdAt": "2024-03-01T11:00:00",
                    "balanceAfter": 599.5,
                }],
                "page": 1,
                "limit": 50,
                "total": 1,
                "pages": 1,
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let batch = api::wallet::transactions(&client, &session(), 1, 50)
            .await
            .unwrap();

        let transaction = &batch.transactions()[0];
        assert_eq!(
            *transaction.transaction_type(),
            WalletTransactionType::TradeBuy
        );
        assert_eq!(*transaction.amount(), dec!(400.5));
        assert_eq!(*transaction.balance_after(), dec!(599.5));
    }

    #[tokio::test]
    async fn quote_is_cached_within_the_freshness_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stocks/price/TCS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "symbol": "TCS",
                "name": "Tata Consultancy Services",
                "price": 3500.5,
                "previousClose": 3490.0,
                "change": 10.5,
                "changePercent": 0.3,
                "lastUpdated": null,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut cache = QuoteCache::default();

        let first = api::stocks::cached_price(&client, &mut cache, "TCS")
            .await
            .unwrap();
        let second = api::stocks::cached_price(&client, &mut cache, "TCS")
            .await
            .unwrap();

        assert_eq!(first, dec!(3500.5));
        assert_eq!(second, first);
    }
}
