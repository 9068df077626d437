// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use fabstir_chat_node::{
    api::{start_server, ApiRateLimiter, AppState},
    completion::GroqClient,
    config::AppConfig,
    pipeline::ChatPipeline,
    scrape::{ContentFetcher, FetchConfig},
    search::SearchService,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Fabstir Chat Node...\n");
    println!("📦 BUILD VERSION: {}", fabstir_chat_node::version::VERSION);
    println!("📅 Build Date: {}", fabstir_chat_node::version::BUILD_DATE);
    println!();

    // Required keys are validated here; a missing key aborts startup.
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        "Configured: model={}, rate_limit={}/min, max_search_results={}",
        config.completion_model,
        config.rate_limit_per_minute,
        config.max_search_results
    );

    let search = Arc::new(SearchService::new(
        config.google_api_key.clone(),
        config.google_search_engine_id.clone(),
        config.max_search_results,
    ));
    let scraper = Arc::new(ContentFetcher::new(FetchConfig::from_env()));
    let completion = Arc::new(GroqClient::new(config.groq_api_key.clone()));

    let pipeline = Arc::new(ChatPipeline::new(
        search,
        scraper,
        completion,
        config.completion_model.clone(),
    ));

    let state = AppState {
        pipeline,
        rate_limiter: Arc::new(ApiRateLimiter::new(config.rate_limit_per_minute)),
        model: config.completion_model.clone(),
    };

    start_server(state, config.api_port)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    println!("👋 Fabstir Chat Node stopped");

    Ok(())
}
