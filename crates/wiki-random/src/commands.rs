use std::time::Duration;

use reqwest::blocking::Client;

use crate::models::{AppError, ItemResponse, OutputMode, Page};

const USER_AGENT: &str = "wiki-random/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn random(language: &str, mode: &OutputMode) -> Result<(), AppError> {
    if mode.verbose {
        eprintln!("debug: fetching random page lang='{language}'");
    }

    let url = endpoint_url(language);
    if mode.verbose {
        eprintln!("debug: request_url={url}");
    }

    let page = fetch_page(&url)?;

    if mode.json {
        let out = ItemResponse {
            ok: true,
            lang: language.to_string(),
            item: page,
        };
        print_json(&out).map_err(|err| AppError::Validation(err.to_string()))?;
    } else {
        print_page_human(&page, mode.quiet);
    }

    Ok(())
}

/// The language code goes into the authority verbatim; a malformed code
/// simply yields a request the resolver or server rejects.
fn endpoint_url(language: &str) -> String {
    if let Ok(base) = std::env::var("WIKI_RANDOM_TEST_BASE_URL") {
        return format!("{base}/page/random/summary");
    }
    format!("https://{language}.wikipedia.org/api/rest_v1/page/random/summary")
}

fn fetch_page(url: &str) -> Result<Page, AppError> {
    // Client is scoped to this call so the connection is released on every
    // exit path, including timeout and decode failure.
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;
    parse_page(&body)
}

fn parse_page(body: &str) -> Result<Page, AppError> {
    let page: Page =
        serde_json::from_str(body).map_err(|err| AppError::Validation(err.to_string()))?;

    if page.title.is_empty() {
        return Err(AppError::Validation("payload has an empty title".into()));
    }

    Ok(page)
}

fn print_page_human(page: &Page, quiet: bool) {
    if quiet {
        // Minimal output: title only
        println!("{}", page.title);
        return;
    }

    println!("{}", page.title);
    if !page.extract.is_empty() {
        println!();
        println!("{}", page.extract);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
