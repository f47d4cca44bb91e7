//! Currency quote entities.
//!
//! All numeric-looking fields stay as provider-supplied text. Parsing them
//! into floats would reformat the decimal precision on the way back out.

use serde::{Deserialize, Serialize};

/// Envelope returned by the upstream provider, keyed by the currency pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    /// The single USD→BRL quotation.
    #[serde(rename = "USDBRL")]
    pub usd_brl: QuoteDetail,
}

/// One currency pair quotation, field names exactly as the provider sends
/// them. This is also the service's success response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDetail {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// The subset of a quotation the requesting client consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Current buy price, decimal text.
    pub bid: String,
}
