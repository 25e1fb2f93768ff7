/*
[INPUT]:  Asset/denominator pairs, dates, times, intervals
[OUTPUT]: Normalized (cross-exchange) price data as raw JSON
[POS]:    HTTP layer - BlockFacts normalized data endpoints
[UPDATE]: When adding normalized data endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{ApiClient, Result};
use crate::params::{DEFAULT_PAGE, MoversSort, MultiValue, QueryBuilder};

/// BlockFacts normalized data endpoints
#[derive(Debug, Clone)]
pub struct BlockfactsEndpoints {
    client: ApiClient,
}

impl BlockfactsEndpoints {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists exchanges that go into the normalization for the given pairs
    ///
    /// GET /blockfacts/normalization/whitelist/{pairs}
    pub async fn get_exchanges_in_normalization(&self, pairs: impl MultiValue) -> Result<Value> {
        let endpoint = format!(
            "blockfacts/normalization/whitelist/{}",
            pairs.to_query_value()
        );
        self.client.get_json(&endpoint).await
    }

    /// Current normalized price for asset-denominator pairs
    ///
    /// GET /blockfacts/price?asset={assets}&denominator={denominators}
    pub async fn get_current_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Last 600 normalized points for asset-denominator pairs
    ///
    /// GET /blockfacts/price/snapshot?asset={assets}&denominator={denominators}
    pub async fn get_snapshot_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/snapshot")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Snapshot of normalized OHLCV data for pairs and intervals
    ///
    /// GET /blockfacts/price/ohlcv-snapshot?asset=&denominator=&interval=
    pub async fn get_ohlcv_snapshot_data(
        &self,
        assets: impl MultiValue,
        denominators: impl MultiValue,
        intervals: impl MultiValue,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/ohlcv-snapshot")
            .param("asset", assets.to_query_value())
            .param("denominator", denominators.to_query_value())
            .param("interval", intervals.to_query_value())
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Historical normalized data by asset-denominator, date, time and interval
    ///
    /// `date` is `DD.MM.YYYY`, `time` is `HH:MM:SS` UTC; both are forwarded as given.
    /// `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// GET /blockfacts/price/historical?asset=&denominator=&date=&time=&interval=&page=
    pub async fn get_historical_data(
        &self,
        asset: &str,
        denominator: &str,
        date: &str,
        time: &str,
        interval: u32,
        page: Option<u32>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/historical")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("date", date)
            .param("time", time)
            .param("interval", interval)
            .param("page", page.unwrap_or(DEFAULT_PAGE))
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Historical normalized OHLCV data over a date/time range
    ///
    /// `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// GET /blockfacts/price/ohlcv?asset=&denominator=&interval=&dateStart=&timeStart=&dateEnd=&timeEnd=&page=
    #[allow(clippy::too_many_arguments)]
    pub async fn get_historical_ohlcv_data(
        &self,
        asset: &str,
        denominator: &str,
        interval: &str,
        date_start: &str,
        time_start: &str,
        date_end: &str,
        time_end: &str,
        page: Option<u32>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/ohlcv")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("interval", interval)
            .param("dateStart", date_start)
            .param("timeStart", time_start)
            .param("dateEnd", date_end)
            .param("timeEnd", time_end)
            .param("page", page.unwrap_or(DEFAULT_PAGE))
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Normalized price at a specific point in time
    ///
    /// GET /blockfacts/price/specific?asset=&denominator=&date=&time=
    pub async fn get_specific_historical_data(
        &self,
        asset: &str,
        denominator: &str,
        date: &str,
        time: &str,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/specific")
            .param("asset", asset)
            .param("denominator", denominator)
            .param("date", date)
            .param("time", time)
            .build();
        self.client.get_json(&endpoint).await
    }

    /// All asset-denominator pairs currently being normalized
    ///
    /// GET /blockfacts/normalization/trades
    pub async fn get_normalization_pairs(&self) -> Result<Value> {
        self.client.get_json("blockfacts/normalization/trades").await
    }

    /// Normalized end-of-day data
    ///
    /// `length` is left off the query when `None`; the service applies its own default.
    ///
    /// GET /blockfacts/price/endOfDay?asset=&denominator=&length=
    pub async fn get_end_of_day_data(
        &self,
        asset: &str,
        denominator: &str,
        length: Option<u32>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/price/endOfDay")
            .param("asset", asset)
            .param("denominator", denominator)
            .param_opt("length", length)
            .build();
        self.client.get_json(&endpoint).await
    }

    /// Percentage move and price difference over a period, across all normalized assets
    ///
    /// `sort` defaults to [`MoversSort::LosersFirst`] (`sort=1`).
    ///
    /// GET /blockfacts/period-movers?denominator=&date=&interval=&sort=
    pub async fn get_period_movers(
        &self,
        denominator: &str,
        date: &str,
        interval: &str,
        sort: Option<MoversSort>,
    ) -> Result<Value> {
        let endpoint = QueryBuilder::new("blockfacts/period-movers")
            .param("denominator", denominator)
            .param("date", date)
            .param("interval", interval)
            .param("sort", sort.unwrap_or_default())
            .build();
        self.client.get_json(&endpoint).await
    }
}
