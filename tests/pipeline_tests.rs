// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end pipeline tests over in-process collaborator fakes

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use fabstir_chat_node::completion::CompletionProvider;
use fabstir_chat_node::pipeline::{ChatPipeline, COMPLETION_FAILED_TEXT, NO_CONTENT_TEXT};
use fabstir_chat_node::scrape::{PageScraper, LOW_CONTENT_TEXT, SCRAPE_FAILURE_TEXT};
use fabstir_chat_node::search::SearchService;

use common::{ScriptedCompletion, ScriptedScraper, ScriptedSearch};

const ARTICLE_BODY: &str =
    "A long enough article body about interest rates and monetary policy decisions.";

fn pipeline(
    search: ScriptedSearch,
    scraper: Arc<ScriptedScraper>,
    completion: Arc<ScriptedCompletion>,
) -> ChatPipeline {
    ChatPipeline::new(
        Arc::new(SearchService::with_provider(Box::new(search), 10)),
        scraper as Arc<dyn PageScraper>,
        completion as Arc<dyn CompletionProvider>,
        "llama3-8b-8192".to_string(),
    )
}

#[tokio::test]
async fn direct_url_skips_search_and_cites_the_page() {
    let (search, search_calls) = ScriptedSearch::new(&["https://unused.example"]);
    let scraper = Arc::new(ScriptedScraper::new().with_page("https://news.example/a", ARTICLE_BODY));
    let completion = Arc::new(ScriptedCompletion::answering("Rates held steady [1]."));

    let pipeline = pipeline(search, scraper.clone(), completion.clone());
    let response = pipeline.respond("https://news.example/a").await;

    assert_eq!(search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(scraper.scraped_urls(), vec!["https://news.example/a"]);
    assert_eq!(completion.call_count(), 1);
    assert!(response.contains("href=\"https://news.example/a\""));
    assert!(response.contains(">[1]</a>"));
}

#[tokio::test]
async fn embedded_url_is_fetched_directly() {
    let (search, search_calls) = ScriptedSearch::new(&[]);
    let scraper = Arc::new(ScriptedScraper::new().with_page("https://news.example/a", ARTICLE_BODY));
    let completion = Arc::new(ScriptedCompletion::answering("Summary [1]."));

    let pipeline = pipeline(search, scraper.clone(), completion.clone());
    pipeline
        .respond("please summarize https://news.example/a for me")
        .await;

    assert_eq!(search_calls.load(Ordering::SeqCst), 0);
    assert_eq!(scraper.scraped_urls(), vec!["https://news.example/a"]);
}

#[tokio::test]
async fn query_fetches_each_result_in_order_and_cites_all() {
    let (search, search_calls) = ScriptedSearch::new(&[
        "https://a.example",
        "https://b.example",
        "https://c.example",
    ]);
    let scraper = Arc::new(
        ScriptedScraper::new()
            .with_page("https://a.example", "Body from the first page of results.")
            .with_sentinel("https://b.example", SCRAPE_FAILURE_TEXT)
            .with_page("https://c.example", "Body from the third page of results."),
    );
    let completion = Arc::new(ScriptedCompletion::answering("See [1], [2] and [3]."));

    let pipeline = pipeline(search, scraper.clone(), completion.clone());
    let response = pipeline.respond("latest interest rates").await;

    assert_eq!(search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        scraper.scraped_urls(),
        vec!["https://a.example", "https://b.example", "https://c.example"]
    );

    // Aggregated content keeps failure markers and joins bodies with spaces
    let prompt = completion.last_prompt().unwrap();
    assert!(prompt.contains(&format!(
        "Body from the first page of results. {} Body from the third page of results.",
        SCRAPE_FAILURE_TEXT
    )));

    // Every search link is referenced, including the failed one
    assert!(prompt.contains("[1] https://a.example"));
    assert!(prompt.contains("[2] https://b.example"));
    assert!(prompt.contains("[3] https://c.example"));
    assert!(response.contains("href=\"https://b.example\""));
}

#[tokio::test]
async fn low_content_sentinel_flows_like_a_failure() {
    let (search, _) = ScriptedSearch::new(&["https://thin.example"]);
    let scraper =
        Arc::new(ScriptedScraper::new().with_sentinel("https://thin.example", LOW_CONTENT_TEXT));
    let completion = Arc::new(ScriptedCompletion::answering("Nothing useful [1]."));

    let pipeline = pipeline(search, scraper.clone(), completion.clone());
    let response = pipeline.respond("very obscure topic").await;

    let prompt = completion.last_prompt().unwrap();
    assert!(prompt.contains(LOW_CONTENT_TEXT));
    // The thin page is still listed as a reference (search-path behavior)
    assert!(prompt.contains("[1] https://thin.example"));
    assert!(response.contains("href=\"https://thin.example\""));
}

#[tokio::test]
async fn no_results_falls_back_to_raw_message() {
    let (search, search_calls) = ScriptedSearch::new(&[]);
    let scraper = Arc::new(ScriptedScraper::new());
    let completion = Arc::new(ScriptedCompletion::answering("General knowledge answer."));

    let pipeline = pipeline(search, scraper.clone(), completion.clone());
    let response = pipeline.respond("what is a yield curve").await;

    assert_eq!(search_calls.load(Ordering::SeqCst), 1);
    assert!(scraper.scraped_urls().is_empty());
    assert_eq!(completion.call_count(), 1);

    let prompt = completion.last_prompt().unwrap();
    assert!(prompt.contains("Scraped Content: \"what is a yield curve\""));
    assert_eq!(response, "General knowledge answer.");
}

#[tokio::test]
async fn empty_message_with_no_results_terminates_without_completion() {
    let (search, _) = ScriptedSearch::new(&[]);
    let scraper = Arc::new(ScriptedScraper::new());
    let completion = Arc::new(ScriptedCompletion::answering("should never be called"));

    let pipeline = pipeline(search, scraper, completion.clone());
    let response = pipeline.respond("   ").await;

    assert_eq!(response, NO_CONTENT_TEXT);
    assert_eq!(completion.call_count(), 0);
}

#[tokio::test]
async fn completion_failure_degrades_to_fixed_text() {
    let (search, _) = ScriptedSearch::new(&[]);
    let scraper = Arc::new(ScriptedScraper::new().with_page("https://news.example/a", ARTICLE_BODY));
    let completion = Arc::new(ScriptedCompletion::failing());

    let pipeline = pipeline(search, scraper, completion.clone());
    let response = pipeline.respond("https://news.example/a").await;

    assert_eq!(completion.call_count(), 1);
    assert_eq!(response, COMPLETION_FAILED_TEXT);
}

#[tokio::test]
async fn out_of_range_citation_markers_pass_through() {
    let (search, _) = ScriptedSearch::new(&[]);
    let scraper = Arc::new(ScriptedScraper::new().with_page("https://news.example/a", ARTICLE_BODY));
    let completion = Arc::new(ScriptedCompletion::answering("Valid [1], invalid [7]."));

    let pipeline = pipeline(search, scraper, completion);
    let response = pipeline.respond("https://news.example/a").await;

    assert!(response.contains("href=\"https://news.example/a\""));
    assert!(response.contains("invalid [7]."));
}

#[tokio::test]
async fn failed_direct_fetch_still_reaches_completion_without_citation() {
    let (search, _) = ScriptedSearch::new(&[]);
    // Unregistered URL: the fake degrades to the failure sentinel
    let scraper = Arc::new(ScriptedScraper::new());
    let completion = Arc::new(ScriptedCompletion::answering("Could not read the page."));

    let pipeline = pipeline(search, scraper, completion.clone());
    pipeline.respond("https://broken.example/page").await;

    let prompt = completion.last_prompt().unwrap();
    assert!(prompt.contains(SCRAPE_FAILURE_TEXT));
    // No citation was contributed, so the reference list stays empty
    assert!(!prompt.contains("[1] https://broken.example/page"));
}
