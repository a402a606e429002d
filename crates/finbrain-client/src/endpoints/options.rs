//! Options data: `/putcalldata`.

use super::{DateQuery, Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const PUT_CALL: &str = "putcalldata";
const PUT_CALL_TABLE: TableShape = TableShape::Records { key: "putCallData" };

/// Options data endpoints.
#[derive(Debug)]
pub struct Options<'c, C> {
    client: &'c C,
}

impl<'c, C> Options<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn put_call_request(market: &str, symbol: &str, query: &DateQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(PUT_CALL, market, symbol)).with_params(query.params()))
}

resource_methods! {
    Options;

    /// Daily put/call ratio with put and call volumes for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the data cannot be tabulated.
    fn put_call(&self, market: &str, symbol: &str, query: &DateQuery) -> Payload
        => put_call_request(market, symbol, query),
        |json| Payload::shaped(json, PUT_CALL_TABLE, query.as_table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;
    use crate::config::ClientConfig;
    use crate::testing::MockTransport;
    use finbrain_types::Date;
    use serde_json::json;

    #[test]
    fn test_required_args_only() {
        let mock = MockTransport::new().respond(200, json!({"putCallData": []}));
        let client = Client::with_transport(ClientConfig::new("k"), mock.clone());

        client.options().put_call("sp500", "amzn", &DateQuery::new()).unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].path(), "putcalldata/sp500/AMZN");
        assert!(sent[0].params().is_empty());
        assert_eq!(sent[0].query_pairs(), vec![("token", "k")]);
    }

    #[test]
    fn test_put_call_table() {
        let body = json!({
            "ticker": "AAPL",
            "putCallData": [
                {"date": "2024-03-19", "ratio": 0.4, "callCount": 1000, "putCount": 400},
                {"date": "2024-03-18", "ratio": 0.5, "callCount": 800, "putCount": 400}
            ]
        });
        let mock = MockTransport::new().respond(200, body);
        let client = Client::with_transport(ClientConfig::new("k"), mock.clone());

        let query = DateQuery::new()
            .date_from(Date::from_ymd_opt(2024, 3, 18).unwrap())
            .date_to(Date::from_ymd_opt(2024, 3, 19).unwrap())
            .as_table(true);
        let table = client
            .options()
            .put_call("S&P 500", "aapl", &query)
            .unwrap()
            .into_table()
            .unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].path(), "putcalldata/S%26P%20500/AAPL");
        assert_eq!(sent[0].params().get("dateTo"), Some("2024-03-19"));
        assert_eq!(table.len(), 2);
        assert!(table.has_column("ratio"));
    }
}
