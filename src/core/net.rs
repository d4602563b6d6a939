// src/core/net.rs

use std::time::Duration;

use crate::config::consts::{CAREER_URL, USER_AGENT};
use crate::config::options::Account;
use crate::error::Result;

/// Career page for an account. Battletags use `-` in place of `#` in URLs.
pub fn profile_url(account: &Account) -> String {
    let username = account.battletag.replace('#', "-");
    format!(
        "{}/{}/{}/{}",
        CAREER_URL, account.platform, account.region, username
    )
}

/// Blocking GET; anything other than a 2xx is an error.
pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;

    log::debug!("GET {url}");
    let body = client.get(url).send()?.error_for_status()?.text()?;
    log::debug!("GET {url}: {} bytes", body.len());
    Ok(body)
}
