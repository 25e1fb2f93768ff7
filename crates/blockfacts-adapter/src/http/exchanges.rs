/*
[INPUT]:  Exchange names, asset/denominator pairs, dates, times, intervals
[OUTPUT]: Exchange-specific trade data as raw JSON
[POS]:    HTTP layer - exchange data endpoints
[UPDATE]: When adding exchange endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{ApiClient, Result};
use crate::params::{DEFAULT_PAGE, MoversSort, MultiValue, QueryBuilder};

/// Exchange-specific data endpoints
#[derive(Debug, Clone)]
pub struct ExchangeEndpoints {
    client: ApiClient,
}

impl ExchangeEndpoints {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists all supported exchanges
    ///
    /// GET /exchanges
    pub async fn list_all_exchanges(&self) -> Result<Value> {
        self.client.get_json("exchanges").await
    }

    /// Supported assets and ticker info for one exchange
    ///
    /// GET /exchanges/{exchange}
    pub async fn get_specific_exchange_data(&self, exchange: &str) -> Result<Value> {
        let endpoint = format!("exchanges/{}", exchange);
        self.client.get_json(&endpoint).await
    }

    /// BlockFacts pair representation of an exchange-native pair
    ///
    /// GET /exchanges/pair-info?exchange=&pair=
    pub async fn get_pair_info(&self, exchange: &str, pair: &str) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/pair-info")
            .param("exchange", exchange)
            .param("pair", pair)
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Current trade data for pairs on the given exchanges
    ///
    /// GET /exchanges/trades?asset=&denominator=&exchange=
    pub async fn get_current_trade_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
        exchanges: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .param("exchange", exchanges.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// 600 latest trades for pairs on the given exchanges
    ///
    /// GET /exchanges/trades/snapshot?asset=&denominator=&exchange=
    pub async fn get_snapshot_trade_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
        exchanges: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/snapshot")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .param("exchange", exchanges.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// OHLCV snapshot for pairs, exchanges and intervals
    ///
    /// GET /exchanges/trades/ohlcv-snapshot?asset=&denominator=&exchange=&interval=
    pub async fn get_ohlcv_snapshot_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
        exchanges: impl MultiValue,
        intervals: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/ohlcv-snapshot")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .param("exchange", exchanges.to_query_value())
            .param("interval", intervals.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Historical exchange trades by date, time and interval
    ///
    /// `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// GET /exchanges/trades/historical?asset=&denominator=&exchange=&date=&time=&interval=&page=
    #[allow(clippy::too_many_arguments)]
    pub async fn get_historical_trade_data(
        &self,
        asset: &str,
        denominator: &str,
        exchanges: impl MultiValue,
        date: &str,
        time: &str,
        interval: u32,
        page: Option<u32>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/historical")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("exchange", exchanges.to_query_value())
            .param("date", date)
            .param("time", time)
            .param("interval", interval)
            .param("page", page.unwrap_or(DEFAULT_PAGE))
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Historical exchange OHLCV data over a date/time range
    ///
    /// `interval` is one of 30s, 1m, 3m, 5m, 15m, 30m, 1h, 2h, 4h, 6h, 12h, 1d, 1w, 1mo.
    /// `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// GET /exchanges/trades/ohlcv?asset=&denominator=&exchange=&interval=&dateStart=&timeStart=&dateEnd=&timeEnd=&page=
    #[allow(clippy::too_many_arguments)]
    pub async fn get_historical_ohlcv_data(
        &self,
        asset: &str,
        denominator: &str,
        exchanges: impl MultiValue,
        interval: &str,
        date_start: &str,
        time_start: &str,
        date_end: &str,
        time_end: &str,
        page: Option<u32>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/ohlcv")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("exchange", exchanges.to_query_value())
            .param("interval", interval)
            .param("dateStart", date_start)
            .param("timeStart", time_start)
            .param("dateEnd", date_end)
            .param("timeEnd", time_end)
            .param("page", page.unwrap_or(DEFAULT_PAGE))
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Exchange trades within one specific second
    ///
    /// GET /exchanges/trades/specific?asset=&denominator=&exchange=&date=&time=
    pub async fn get_specific_trade_data(
        &self,
        asset: &str,
        denominator: &str,
        exchanges: impl MultiValue,
        date: &str,
        time: &str,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/specific")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("exchange", exchanges.to_query_value())
            .param("date", date)
            .param("time", time)
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Total volume traded on all exchanges for a pair (interval: 1d, 30d, 60d, 90d)
    ///
    /// GET /exchanges/trades/total-volume?asset=&denominator=&interval=
    pub async fn get_total_trade_volume(
        &self,
        asset: &str,
        denominator: &str,
        interval: &str,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/trades/total-volume")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("interval", interval)
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Percentage move and price difference over a period on one exchange
    ///
    /// `sort` defaults to [`MoversSort::LosersFirst`] (`sort=1`).
    ///
    /// GET /exchanges/period-movers?exchange=&denominator=&date=&interval=&sort=
    pub async fn get_period_movers(
        &self,
        exchange: &str,
        denominator: &str,
        date: &str,
        interval: &str,
        sort: Option<MoversSort>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("exchanges/period-movers")
            .param("exchange", exchange)
            .param("denominator", denominator)
            .param("date", date)
            .param("interval", interval)
            .param("sort", sort.unwrap_or_default())
            .build();
        self.client.get_json(&endpoint).await
    }
}
