//! Unusual Whales endpoint table
//!
//! One entry per REST endpoint. Entries are grouped the way the API groups
//! them; order here is the order tools are advertised in.

use crate::api::catalog::EndpointSpec;
use crate::api::params::ParamSpec;

// ==================== Shared Parameters ====================

const TICKER: ParamSpec = ParamSpec::path("ticker", "Stock ticker symbol");
const ETF_TICKER: ParamSpec = ParamSpec::path("ticker", "ETF ticker symbol");
const SECTOR: ParamSpec = ParamSpec::path("sector", "Market sector (e.g. Technology)");
const EXPIRY: ParamSpec = ParamSpec::path("expiry", "Option expiry date (YYYY-MM-DD)");
const CONTRACT_ID: ParamSpec =
    ParamSpec::path("id", "Option contract symbol (e.g. AAPL240119C00150000)");
const INSTITUTION: ParamSpec = ParamSpec::path("name", "Institution name or CIK");

const LIMIT: ParamSpec = ParamSpec::number("limit", "Number of results to return");
const PAGE: ParamSpec = ParamSpec::number("page", "Page number");
const DATE: ParamSpec = ParamSpec::string("date", "Date filter (YYYY-MM-DD)");
const TICKER_FILTER: ParamSpec = ParamSpec::string("ticker", "Ticker symbol");

const MIN_PREMIUM: ParamSpec = ParamSpec::number("min_premium", "Minimum premium");
const MAX_PREMIUM: ParamSpec = ParamSpec::number("max_premium", "Maximum premium");
const MIN_SIZE: ParamSpec = ParamSpec::number("min_size", "Minimum size");
const MAX_SIZE: ParamSpec = ParamSpec::number("max_size", "Maximum size");
const MIN_VOLUME: ParamSpec = ParamSpec::number("min_volume", "Minimum volume");
const MAX_VOLUME: ParamSpec = ParamSpec::number("max_volume", "Maximum volume");

const ISSUE_TYPES: &[&str] = &["Common Stock", "ETF", "Index", "ADR"];

const FLOW_RULES: &[&str] = &[
    "FloorTradeSmallCap",
    "FloorTradeMidCap",
    "RepeatedHits",
    "RepeatedHitsAscendingFill",
    "RepeatedHitsDescendingFill",
    "FloorTradeLargeCap",
    "OtmEarningsFloor",
    "LowHistoricVolumeFloor",
    "SweepsFollowedByFloor",
];

const FLOW_GROUPS: &str = "Flow group (e.g. mag7, semi, bank, energy, index)";

/// Ticker-only endpoint
const fn ticker_endpoint(
    name: &'static str,
    path: &'static str,
    description: &'static str,
) -> EndpointSpec {
    EndpointSpec {
        name,
        description,
        path,
        path_params: &[TICKER],
        query_params: &[],
    }
}

/// Endpoint without path parameters
const fn listing(
    name: &'static str,
    path: &'static str,
    description: &'static str,
    query_params: &'static [ParamSpec],
) -> EndpointSpec {
    EndpointSpec {
        name,
        description,
        path,
        path_params: &[],
        query_params,
    }
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    // ==================== Alerts ====================
    listing(
        "get_alerts",
        "/api/alerts",
        "Get triggered alerts for the user",
        &[
            LIMIT,
            PAGE,
            ParamSpec::boolean("intraday_only", "Only intraday alerts"),
            ParamSpec::string_array("config_ids", "Alert configuration IDs"),
            ParamSpec::string("ticker_symbols", "Ticker symbols"),
            ParamSpec::string_array("noti_types", "Notification types"),
        ],
    ),
    listing(
        "get_alerts_configuration",
        "/api/alerts/configuration",
        "Get alert configurations for the user",
        &[],
    ),
    // ==================== Congress ====================
    listing(
        "get_congress_trader",
        "/api/congress/congress-trader",
        "Get recent reports by congress member",
        &[
            LIMIT,
            DATE,
            TICKER_FILTER,
            ParamSpec::string("name", "Congress member name"),
        ],
    ),
    listing(
        "get_congress_late_reports",
        "/api/congress/late-reports",
        "Get recent late reports by congress members",
        &[LIMIT, DATE, TICKER_FILTER],
    ),
    listing(
        "get_congress_recent_trades",
        "/api/congress/recent-trades",
        "Get latest trades by congress members",
        &[LIMIT, DATE, TICKER_FILTER],
    ),
    // ==================== Darkpool ====================
    listing(
        "get_darkpool_recent",
        "/api/darkpool/recent",
        "Get latest darkpool trades",
        &[
            LIMIT,
            DATE,
            MIN_PREMIUM,
            MAX_PREMIUM,
            MIN_SIZE,
            MAX_SIZE,
            MIN_VOLUME,
            MAX_VOLUME,
        ],
    ),
    EndpointSpec {
        name: "get_darkpool_ticker",
        description: "Get darkpool trades for a specific ticker",
        path: "/api/darkpool/{ticker}",
        path_params: &[ParamSpec::path("ticker", "Ticker symbol")],
        query_params: &[
            DATE,
            ParamSpec::string("newer_than", "Newer than timestamp"),
            ParamSpec::string("older_than", "Older than timestamp"),
            MIN_PREMIUM,
            MAX_PREMIUM,
            MIN_SIZE,
            MAX_SIZE,
            MIN_VOLUME,
            MAX_VOLUME,
            LIMIT,
        ],
    },
    // ==================== Earnings ====================
    listing(
        "get_earnings_afterhours",
        "/api/earnings/afterhours",
        "Get afterhours earnings for a date",
        &[DATE, LIMIT, PAGE],
    ),
    listing(
        "get_earnings_premarket",
        "/api/earnings/premarket",
        "Get premarket earnings for a date",
        &[DATE, LIMIT, PAGE],
    ),
    EndpointSpec {
        name: "get_earnings_ticker",
        description: "Get historical earnings data for a ticker",
        path: "/api/earnings/{ticker}",
        path_params: &[ParamSpec::path("ticker", "Ticker symbol")],
        query_params: &[],
    },
    // ==================== ETFs ====================
    EndpointSpec {
        name: "get_etf_exposure",
        description: "Get ETF exposure data",
        path: "/api/etfs/{ticker}/exposure",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_etf_holdings",
        description: "Get ETF holdings information",
        path: "/api/etfs/{ticker}/holdings",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_etf_in_outflow",
        description: "Get ETF inflow & outflow data",
        path: "/api/etfs/{ticker}/in-outflow",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_etf_info",
        description: "Get ETF information",
        path: "/api/etfs/{ticker}/info",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_etf_weights",
        description: "Get ETF sector & country weights",
        path: "/api/etfs/{ticker}/weights",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    // ==================== Group Flow ====================
    EndpointSpec {
        name: "get_group_flow_greek_flow",
        description: "Get greek flow (delta & vega) for a flow group",
        path: "/api/group-flow/{flow_group}/greek-flow",
        path_params: &[ParamSpec::path("flow_group", FLOW_GROUPS)],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_group_flow_greek_flow_expiry",
        description: "Get greek flow (delta & vega) for a flow group and expiry",
        path: "/api/group-flow/{flow_group}/greek-flow/{expiry}",
        path_params: &[ParamSpec::path("flow_group", FLOW_GROUPS), EXPIRY],
        query_params: &[],
    },
    // ==================== Insider ====================
    listing(
        "get_insider_transactions",
        "/api/insider/transactions",
        "Get the latest insider transactions",
        &[
            ParamSpec::string("ticker_symbol", "A comma separated list of tickers"),
            LIMIT,
            PAGE,
        ],
    ),
    EndpointSpec {
        name: "get_insider_sector_flow",
        description: "Get aggregated insider flow for a sector",
        path: "/api/insider/{sector}/sector-flow",
        path_params: &[SECTOR],
        query_params: &[],
    },
    ticker_endpoint(
        "get_insider_ticker",
        "/api/insider/{ticker}",
        "Get insiders for a ticker",
    ),
    ticker_endpoint(
        "get_insider_ticker_flow",
        "/api/insider/{ticker}/ticker-flow",
        "Get aggregated insider flow for a ticker",
    ),
    // ==================== Institutions ====================
    EndpointSpec {
        name: "get_institution_activity",
        description: "Get the trading activity of an institution",
        path: "/api/institution/{name}/activity",
        path_params: &[INSTITUTION],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_institution_holdings",
        description: "Get the holdings of an institution",
        path: "/api/institution/{name}/holdings",
        path_params: &[INSTITUTION],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_institution_sectors",
        description: "Get the sector exposure of an institution",
        path: "/api/institution/{name}/sectors",
        path_params: &[INSTITUTION],
        query_params: &[],
    },
    ticker_endpoint(
        "get_institution_ownership",
        "/api/institution/{ticker}/ownership",
        "Get institutional ownership of a ticker",
    ),
    listing(
        "get_institutions",
        "/api/institutions",
        "Get a list of institutions",
        &[
            ParamSpec::string("name", "Institution name filter"),
            LIMIT,
            PAGE,
        ],
    ),
    listing(
        "get_institutions_latest_filings",
        "/api/institutions/latest_filings",
        "Get the latest institutional filings",
        &[
            ParamSpec::string("name", "Institution name filter"),
            DATE,
            LIMIT,
            PAGE,
        ],
    ),
    // ==================== Market ====================
    listing(
        "get_market_correlations",
        "/api/market/correlations",
        "Get correlations between a list of tickers",
        &[
            ParamSpec::string("tickers", "A comma separated list of tickers"),
            ParamSpec::string("interval", "Lookback interval (e.g. 1y, 6m, 1m)"),
            ParamSpec::string("start_date", "Start date (YYYY-MM-DD)"),
            ParamSpec::string("end_date", "End date (YYYY-MM-DD)"),
        ],
    ),
    listing(
        "get_market_economic_calendar",
        "/api/market/economic-calendar",
        "Get economic calendar events",
        &[DATE, LIMIT],
    ),
    listing(
        "get_market_fda_calendar",
        "/api/market/fda-calendar",
        "Get FDA calendar events",
        &[DATE, LIMIT],
    ),
    listing(
        "get_market_insider_buy_sells",
        "/api/market/insider-buy-sells",
        "Get total insider buy & sell volume across the market",
        &[LIMIT],
    ),
    listing(
        "get_market_tide",
        "/api/market/market-tide",
        "Get market tide data",
        &[
            DATE,
            ParamSpec::boolean("otm_only", "Only use out of the money transactions"),
            ParamSpec::boolean("interval_5m", "Return 5 minute intervals instead of 1 minute"),
        ],
    ),
    listing(
        "get_market_oi_change",
        "/api/market/oi-change",
        "Get the largest open interest changes across the market",
        &[
            DATE,
            LIMIT,
            ParamSpec::one_of("order", &["asc", "desc"], "Sort order"),
        ],
    ),
    listing(
        "get_market_sector_etfs",
        "/api/market/sector-etfs",
        "Get statistics for the SPDR sector ETFs",
        &[],
    ),
    listing(
        "get_market_spike",
        "/api/market/spike",
        "Get SPIKE data (volatility indicator)",
        &[DATE],
    ),
    listing(
        "get_market_total_options_volume",
        "/api/market/total-options-volume",
        "Get total options volume across the market",
        &[LIMIT],
    ),
    EndpointSpec {
        name: "get_market_sector_tide",
        description: "Get market tide for a sector",
        path: "/api/market/{sector}/sector-tide",
        path_params: &[SECTOR],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_market_etf_tide",
        description: "Get market tide for an ETF's holdings",
        path: "/api/market/{ticker}/etf-tide",
        path_params: &[ETF_TICKER],
        query_params: &[],
    },
    // ==================== Net Flow ====================
    listing(
        "get_net_flow_expiry",
        "/api/net-flow/expiry",
        "Get net premium flow grouped by expiry",
        &[
            DATE,
            ParamSpec::string("moneyness", "Moneyness filter (e.g. all, itm, otm, atm)"),
            ParamSpec::string("tide_type", "Tide type (e.g. all, equity_only, etf_only, index_only)"),
            ParamSpec::string("expiration", "Expiration bucket (e.g. weekly, zero_dte)"),
        ],
    ),
    // ==================== News ====================
    listing(
        "get_news_headlines",
        "/api/news/headlines",
        "Get latest news headlines for financial markets with filtering options",
        &[
            ParamSpec::number("limit", "How many items to return (default: 50, max: 100, min: 1)")
                .min(1.0)
                .max(100.0),
            ParamSpec::boolean(
                "major_only",
                "When set to true, only returns major/significant news (default: false)",
            ),
            ParamSpec::number("page", "Page number (use with limit). Starts on page 0"),
            ParamSpec::string("search_term", "A search term to filter news headlines by content"),
            ParamSpec::string(
                "sources",
                "A comma-separated list of news sources to filter by (e.g., 'Reuters,Bloomberg')",
            ),
        ],
    ),
    // ==================== Option Contract ====================
    EndpointSpec {
        name: "get_option_contract_flow",
        description: "Get the flow (trades) of an option contract",
        path: "/api/option-contract/{id}/flow",
        path_params: &[CONTRACT_ID],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_option_contract_historic",
        description: "Get historic daily data of an option contract",
        path: "/api/option-contract/{id}/historic",
        path_params: &[CONTRACT_ID],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_option_contract_intraday",
        description: "Get intraday data of an option contract",
        path: "/api/option-contract/{id}/intraday",
        path_params: &[CONTRACT_ID],
        query_params: &[],
    },
    EndpointSpec {
        name: "get_option_contract_volume_profile",
        description: "Get the volume profile of an option contract",
        path: "/api/option-contract/{id}/volume-profile",
        path_params: &[CONTRACT_ID],
        query_params: &[],
    },
    // ==================== Option Trades ====================
    listing(
        "get_option_trades_flow_alerts",
        "/api/option-trades/flow-alerts",
        "Get option flow alerts showing significant option trades and unusual activity",
        &[
            ParamSpec::boolean("all_opening", "Boolean flag whether all transactions are opening transactions based on OI, Size & Volume (default: true)"),
            ParamSpec::boolean("is_ask_side", "Boolean flag whether a transaction is ask side (default: true)"),
            ParamSpec::boolean("is_bid_side", "Boolean flag whether a transaction is bid side (default: true)"),
            ParamSpec::boolean("is_call", "Boolean flag whether a transaction is a call (default: true)"),
            ParamSpec::boolean("is_floor", "Boolean flag whether a transaction is from the floor (default: true)"),
            ParamSpec::boolean("is_otm", "Only include contracts which are currently out of the money"),
            ParamSpec::boolean("is_put", "Boolean flag whether a transaction is a put (default: true)"),
            ParamSpec::boolean("is_sweep", "Boolean flag whether a transaction is a intermarket sweep (default: true)"),
            ParamSpec::any_of("issue_types", ISSUE_TYPES, "An array of 1 or more issue types"),
            ParamSpec::number("limit", "How many items to return (default: 100, max: 200, min: 1)")
                .min(1.0)
                .max(200.0),
            ParamSpec::string("max_diff", "The maximum OTM diff of a contract"),
            ParamSpec::number("max_dte", "The maximum days to expiry (min: 0)").min(0.0),
            ParamSpec::number("max_open_interest", "The maximum open interest on that alert's contract").min(0.0),
            ParamSpec::number("max_premium", "The maximum premium on that alert (min: 0)").min(0.0),
            ParamSpec::number("max_size", "The maximum size on that alert (min: 0)").min(0.0),
            ParamSpec::number("max_volume", "The maximum volume on that alert's contract").min(0.0),
            ParamSpec::number("max_volume_oi_ratio", "The maximum ratio of contract volume to contract open interest").min(0.0),
            ParamSpec::string("min_diff", "The minimum OTM diff of a contract"),
            ParamSpec::number("min_dte", "The minimum days to expiry (min: 0)").min(0.0),
            ParamSpec::number("min_open_interest", "The minimum open interest on that alert's contract").min(0.0),
            ParamSpec::number("min_premium", "The minimum premium on that alert (min: 0)").min(0.0),
            ParamSpec::number("min_size", "The minimum size on that alert (min: 0)").min(0.0),
            ParamSpec::number("min_volume", "The minimum volume on that alert's contract").min(0.0),
            ParamSpec::number("min_volume_oi_ratio", "The minimum ratio of contract volume to contract open interest").min(0.0),
            ParamSpec::string("newer_than", "Unix time in milliseconds/seconds or ISO date (2024-01-25) - no older results will be returned"),
            ParamSpec::string("older_than", "Unix time in milliseconds/seconds or ISO date (2024-01-25) - no newer results will be returned"),
            ParamSpec::any_of("rule_name", FLOW_RULES, "An array of 1 or more rule names"),
            ParamSpec::string("ticker_symbol", "A comma separated list of tickers. To exclude certain tickers prefix the first ticker with a -"),
        ],
    ),
    EndpointSpec {
        name: "get_option_trades_full_tape",
        description: "Download the full options tape for a trading date",
        path: "/api/option-trades/full-tape/{date}",
        path_params: &[ParamSpec::path("date", "Trading date (YYYY-MM-DD)")],
        query_params: &[],
    },
    // ==================== Screeners ====================
    listing(
        "get_screener_analysts",
        "/api/screener/analysts",
        "Get analyst rating screener",
        &[
            TICKER_FILTER,
            ParamSpec::string("action", "Rating action (e.g. initiated, upgraded, downgraded)"),
            ParamSpec::string("recommendation", "Recommendation (e.g. buy, hold, sell)"),
            LIMIT,
        ],
    ),
    listing(
        "get_screener_option_contracts",
        "/api/screener/option-contracts",
        "Get hottest chains screener (option contracts)",
        &[
            ParamSpec::string("ticker_symbol", "A comma separated list of tickers"),
            ParamSpec::one_of("type", &["call", "put"], "Contract type"),
            ParamSpec::boolean("is_otm", "Only include out of the money contracts"),
            ParamSpec::number("min_premium", "Minimum premium").min(0.0),
            ParamSpec::number("max_premium", "Maximum premium").min(0.0),
            ParamSpec::number("min_volume", "Minimum volume").min(0.0),
            ParamSpec::number("max_volume", "Maximum volume").min(0.0),
            ParamSpec::number("min_dte", "Minimum days to expiry").min(0.0),
            ParamSpec::number("max_dte", "Maximum days to expiry").min(0.0),
            LIMIT,
        ],
    ),
    listing(
        "get_screener_stocks",
        "/api/screener/stocks",
        "Get stock screener",
        &[
            TICKER_FILTER,
            ParamSpec::any_of("issue_types", ISSUE_TYPES, "An array of 1 or more issue types"),
            ParamSpec::number("min_marketcap", "Minimum market capitalization").min(0.0),
            ParamSpec::number("max_marketcap", "Maximum market capitalization").min(0.0),
            LIMIT,
        ],
    ),
    // ==================== Seasonality ====================
    listing(
        "get_seasonality_market",
        "/api/seasonality/market",
        "Get average seasonal returns of the market",
        &[],
    ),
    EndpointSpec {
        name: "get_seasonality_performers",
        description: "Get the best and worst seasonal performers for a month",
        path: "/api/seasonality/{month}/performers",
        path_params: &[ParamSpec::path("month", "Month number (1-12)")],
        query_params: &[],
    },
    ticker_endpoint(
        "get_seasonality_ticker_monthly",
        "/api/seasonality/{ticker}/monthly",
        "Get average monthly returns of a ticker",
    ),
    ticker_endpoint(
        "get_seasonality_ticker_year_month",
        "/api/seasonality/{ticker}/year-month",
        "Get monthly returns of a ticker per year",
    ),
    // ==================== Shorts ====================
    ticker_endpoint(
        "get_shorts_data",
        "/api/shorts/{ticker}/data",
        "Get short data for a ticker",
    ),
    ticker_endpoint(
        "get_shorts_ftds",
        "/api/shorts/{ticker}/ftds",
        "Get failures to deliver for a ticker",
    ),
    ticker_endpoint(
        "get_shorts_interest_float",
        "/api/shorts/{ticker}/interest-float",
        "Get short interest and float for a ticker",
    ),
    ticker_endpoint(
        "get_shorts_volume_and_ratio",
        "/api/shorts/{ticker}/volume-and-ratio",
        "Get short volume and short ratio for a ticker",
    ),
    ticker_endpoint(
        "get_shorts_volumes_by_exchange",
        "/api/shorts/{ticker}/volumes-by-exchange",
        "Get short volumes by exchange for a ticker",
    ),
    // ==================== Stock ====================
    EndpointSpec {
        name: "get_stock_sector_tickers",
        description: "Get the tickers in a sector",
        path: "/api/stock/{sector}/tickers",
        path_params: &[SECTOR],
        query_params: &[],
    },
    ticker_endpoint(
        "get_stock_atm_chains",
        "/api/stock/{ticker}/atm-chains",
        "Get at-the-money option chains for a ticker",
    ),
    ticker_endpoint(
        "get_stock_expiry_breakdown",
        "/api/stock/{ticker}/expiry-breakdown",
        "Get volume and open interest per expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_flow_alerts",
        "/api/stock/{ticker}/flow-alerts",
        "Get flow alerts for a ticker",
    ),
    ticker_endpoint(
        "get_stock_flow_per_expiry",
        "/api/stock/{ticker}/flow-per-expiry",
        "Get options flow per expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_flow_per_strike",
        "/api/stock/{ticker}/flow-per-strike",
        "Get options flow per strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_flow_per_strike_intraday",
        "/api/stock/{ticker}/flow-per-strike-intraday",
        "Get intraday options flow per strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_flow_recent",
        "/api/stock/{ticker}/flow-recent",
        "Get recent flows for a ticker",
    ),
    ticker_endpoint(
        "get_stock_greek_exposure",
        "/api/stock/{ticker}/greek-exposure",
        "Get Greek exposure for a ticker",
    ),
    ticker_endpoint(
        "get_stock_greek_exposure_expiry",
        "/api/stock/{ticker}/greek-exposure/expiry",
        "Get Greek exposure per expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_greek_exposure_strike",
        "/api/stock/{ticker}/greek-exposure/strike",
        "Get Greek exposure per strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_greek_exposure_strike_expiry",
        "/api/stock/{ticker}/greek-exposure/strike-expiry",
        "Get Greek exposure per strike and expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_greek_flow",
        "/api/stock/{ticker}/greek-flow",
        "Get greek flow (delta & vega) for a ticker",
    ),
    EndpointSpec {
        name: "get_stock_greek_flow_expiry",
        description: "Get greek flow (delta & vega) for a ticker and expiry",
        path: "/api/stock/{ticker}/greek-flow/{expiry}",
        path_params: &[TICKER, EXPIRY],
        query_params: &[],
    },
    ticker_endpoint(
        "get_stock_greeks",
        "/api/stock/{ticker}/greeks",
        "Get option greeks for a ticker",
    ),
    ticker_endpoint(
        "get_stock_historical_risk_reversal_skew",
        "/api/stock/{ticker}/historical-risk-reversal-skew",
        "Get historical risk reversal skew for a ticker",
    ),
    ticker_endpoint(
        "get_stock_info",
        "/api/stock/{ticker}/info",
        "Get stock information for a ticker",
    ),
    ticker_endpoint(
        "get_stock_insider_buy_sells",
        "/api/stock/{ticker}/insider-buy-sells",
        "Get insider buy & sell volume for a ticker",
    ),
    ticker_endpoint(
        "get_stock_interpolated_iv",
        "/api/stock/{ticker}/interpolated-iv",
        "Get interpolated implied volatility for a ticker",
    ),
    ticker_endpoint(
        "get_stock_iv_rank",
        "/api/stock/{ticker}/iv-rank",
        "Get IV rank for a ticker",
    ),
    ticker_endpoint(
        "get_stock_max_pain",
        "/api/stock/{ticker}/max-pain",
        "Get max pain data for a ticker",
    ),
    ticker_endpoint(
        "get_stock_net_prem_ticks",
        "/api/stock/{ticker}/net-prem-ticks",
        "Get net premium ticks for a ticker",
    ),
    ticker_endpoint(
        "get_stock_nope",
        "/api/stock/{ticker}/nope",
        "Get NOPE (net options pricing effect) for a ticker",
    ),
    EndpointSpec {
        name: "get_stock_ohlc",
        description: "Get OHLC candles for a ticker",
        path: "/api/stock/{ticker}/ohlc/{candle_size}",
        path_params: &[
            TICKER,
            ParamSpec::path("candle_size", "Candle size (e.g. 1m, 5m, 1h, 1d)"),
        ],
        query_params: &[],
    },
    ticker_endpoint(
        "get_stock_oi_change",
        "/api/stock/{ticker}/oi-change",
        "Get open interest changes for a ticker",
    ),
    ticker_endpoint(
        "get_stock_oi_per_expiry",
        "/api/stock/{ticker}/oi-per-expiry",
        "Get open interest per expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_oi_per_strike",
        "/api/stock/{ticker}/oi-per-strike",
        "Get open interest per strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_option_chains",
        "/api/stock/{ticker}/option-chains",
        "Get option chains for a ticker",
    ),
    ticker_endpoint(
        "get_stock_option_contracts",
        "/api/stock/{ticker}/option-contracts",
        "Get option contracts for a ticker",
    ),
    ticker_endpoint(
        "get_stock_option_stock_price_levels",
        "/api/stock/{ticker}/option/stock-price-levels",
        "Get option volume per stock price level for a ticker",
    ),
    ticker_endpoint(
        "get_stock_option_volume_oi_expiry",
        "/api/stock/{ticker}/option/volume-oi-expiry",
        "Get option volume and open interest per expiry for a ticker",
    ),
    ticker_endpoint(
        "get_stock_options_volume",
        "/api/stock/{ticker}/options-volume",
        "Get options volume for a ticker",
    ),
    ticker_endpoint(
        "get_stock_spot_exposures",
        "/api/stock/{ticker}/spot-exposures",
        "Get spot GEX exposures for a ticker",
    ),
    ticker_endpoint(
        "get_stock_spot_exposures_expiry_strike",
        "/api/stock/{ticker}/spot-exposures/expiry-strike",
        "Get spot GEX exposures per expiry and strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_spot_exposures_strike",
        "/api/stock/{ticker}/spot-exposures/strike",
        "Get spot GEX exposures per strike for a ticker",
    ),
    ticker_endpoint(
        "get_stock_state",
        "/api/stock/{ticker}/stock-state",
        "Get the latest stock state (price, volume) for a ticker",
    ),
    ticker_endpoint(
        "get_stock_volume_price_levels",
        "/api/stock/{ticker}/stock-volume-price-levels",
        "Get stock volume per price level for a ticker",
    ),
    ticker_endpoint(
        "get_stock_volatility_realized",
        "/api/stock/{ticker}/volatility/realized",
        "Get realized volatility for a ticker",
    ),
    ticker_endpoint(
        "get_stock_volatility_stats",
        "/api/stock/{ticker}/volatility/stats",
        "Get volatility statistics for a ticker",
    ),
    ticker_endpoint(
        "get_stock_volatility_term_structure",
        "/api/stock/{ticker}/volatility/term-structure",
        "Get implied volatility term structure for a ticker",
    ),
];
