// client.rs
//
// The driftinfo API sits behind a CSRF check: the public status page hands
// out a PHPSESSID cookie and embeds a csrf-token meta tag, and the JSON
// endpoint wants both echoed back. Two requests, no retries, no pagination.

use crate::errors::FetchError;
use crate::incident::{FeedEntry, IncidentRecord};
use reqwest::blocking::Client;
use reqwest::header;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::time::Duration;

const BASE: &str = "https://bahnhof.se/kundservice/driftinfo";
const API: &str = "https://bahnhof.se/ajax/kundservice/driftinfo";
const USER_AGENT: &str = "driftboom (+https://github.com/driftboom/driftboom)";
const SESSION_COOKIE: &str = "PHPSESSID";

pub struct FeedClient {
    client: Client,
}

pub struct Tokens {
    pub session: String,
    pub csrf: String,
}

#[derive(Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    data: ApiData,
}

#[derive(Default, Deserialize)]
struct ApiData {
    #[serde(default)]
    open: Vec<FeedEntry>,
}

impl FeedClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// First leg of the handshake: load the public status page and pick up
    /// the session cookie plus the CSRF token embedded in its markup.
    pub fn bootstrap_tokens(&self) -> Result<Tokens, FetchError> {
        let resp = self
            .client
            .get(BASE)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let session = resp
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(session_cookie_value)
            .ok_or(FetchError::MissingCookie)?;

        let body = resp.text().map_err(|e| FetchError::Network(e.to_string()))?;
        let csrf = extract_csrf_token(&body)?;

        Ok(Tokens { session, csrf })
    }

    /// Second leg: the JSON endpoint, with cookie and CSRF token echoed
    /// back. Returns the open incidents, already parsed into records.
    pub fn open_incidents(&self, tokens: &Tokens) -> Result<Vec<IncidentRecord>, FetchError> {
        let resp = self
            .client
            .get(API)
            .header(
                header::COOKIE,
                format!("{SESSION_COOKIE}={}", tokens.session),
            )
            .header("X-CSRF-TOKEN", &tokens.csrf)
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let feed: ApiResponse = resp.json().map_err(|e| FetchError::Decode(e.to_string()))?;
        if feed.status != "ok" {
            return Err(FetchError::ApiStatus(feed.status));
        }

        Ok(feed.data.open.into_iter().map(IncidentRecord::from).collect())
    }
}

fn session_cookie_value(set_cookie: &str) -> Option<String> {
    let rest = set_cookie.strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
    rest.split(';').next().map(|v| v.trim().to_string())
}

fn extract_csrf_token(html: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="csrf-token"]"#)
        .map_err(|e| FetchError::HtmlParse(e.to_string()))?;

    document
        .select(&selector)
        .find_map(|el| el.value().attr("content"))
        .map(str::to_string)
        .filter(|token| !token.is_empty())
        .ok_or(FetchError::MissingCsrfToken)
}
