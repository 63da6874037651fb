use anyhow::{Context, Error, Result, bail};
use async_trait::async_trait;
use derive_getters::Getters;
use log::{debug, warn};
use reqwest::{Client, StatusCode, header};
use tokio::sync::Mutex;
use urlencoding::encode;

use super::{
    QuoteProvider, SymbolResponseDto,
    utils::{USER_AGENT, cookie_pair, make_request, parse_response_object},
    yahoo_dto::YahooQuoteSummaryDto,
};

const COOKIE_URL: &str = "https://fc.yahoo.com";
const BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Clone, Debug, Getters)]
pub struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Yahoo Finance quoteSummary client.
///
/// Holds the cookie/crumb pair for the lifetime of the process.
#[derive(Debug)]
pub struct YahooApi {
    client: Client,
    crumb: Mutex<Option<CrumbData>>,
}

impl Default for YahooApi {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            crumb: Mutex::new(None),
        }
    }

    async fn ensure_crumb(&self) -> Result<CrumbData> {
        let mut guard = self.crumb.lock().await;
        if let Some(crumb) = guard.as_ref() {
            return Ok(crumb.clone());
        }

        let crumb = self.fetch_crumb().await?;
        *guard = Some(crumb.clone());
        Ok(crumb)
    }

    async fn fetch_crumb(&self) -> Result<CrumbData> {
        debug!("Requesting Yahoo session cookie");
        let response = self
            .client
            .get(COOKIE_URL)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .context("Failed to get Yahoo cookie")?;

        let cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .find_map(cookie_pair)
            .ok_or_else(|| Error::msg("Failed to parse Yahoo cookie"))?;

        let crumb = self
            .client
            .get(format!("{}/v1/test/getcrumb", BASE_URL))
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .context("Failed to get Yahoo crumb")?
            .text()
            .await
            .context("Failed to read Yahoo crumb")?;

        if crumb.trim().is_empty() || crumb.contains('<') {
            bail!("Yahoo returned an invalid crumb");
        }

        Ok(CrumbData {
            cookie,
            crumb: crumb.trim().to_string(),
        })
    }

    async fn clear_crumb(&self) {
        *self.crumb.lock().await = None;
    }
}

#[async_trait]
impl QuoteProvider for YahooApi {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn fetch_symbol(&self, symbol: &str) -> Result<SymbolResponseDto> {
        let crumb = self.ensure_crumb().await?;
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price,summaryDetail&crumb={}",
            BASE_URL,
            encode(symbol),
            encode(crumb.crumb())
        );

        let (status, body) = make_request(&self.client, &url, Some(crumb.cookie().as_str())).await?;

        if status == StatusCode::UNAUTHORIZED {
            warn!("Yahoo rejected the cached crumb, clearing it");
            self.clear_crumb().await;
            bail!("Yahoo authentication expired");
        }

        let summary = parse_response_object::<YahooQuoteSummaryDto>(
            body,
            &format!("Failed to parse Yahoo quote for {}", symbol),
        )?;

        if !status.is_success() && summary.quote_summary().error().is_none() {
            bail!("Request failed: {}", status);
        }

        Ok(summary.to_symbol_response(symbol))
    }
}
