use anyhow::{Context, Error, Result};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Sends a GET and returns the status with the JSON body.
///
/// Error statuses are not rejected here when the body is JSON, since Yahoo
/// describes unknown symbols in a 404 body.
pub async fn make_request(
    client: &Client,
    url: &str,
    cookie: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut request = client.get(url).header(header::USER_AGENT, USER_AGENT);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let res = request.send().await.with_context(|| format!("GET {}", url))?;
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => Ok((status, data)),
        Err(_) if !status.is_success() => Err(Error::msg(format!("Request failed: {}", status))),
        Err(e) => Err(Error::msg(format!("Unexpected API response: {}", e))),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .with_context(|| error_msg.to_string()),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}

/// First `name=value` pair of a `Set-Cookie` header.
pub fn cookie_pair(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    if pair.contains('=') {
        Some(pair.to_string())
    } else {
        None
    }
}
