// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared in-process fakes for the pipeline's three collaborator seams
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fabstir_chat_node::completion::{CompletionError, CompletionProvider};
use fabstir_chat_node::scrape::{PageScraper, ScrapeOutcome, SCRAPE_FAILURE_TEXT};
use fabstir_chat_node::search::{SearchError, SearchProvider, SearchResult};

/// Search provider returning a fixed URL list and counting invocations
pub struct ScriptedSearch {
    urls: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSearch {
    pub fn new(urls: &[&str]) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                urls: urls.iter().map(|u| u.to_string()).collect(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl SearchProvider for ScriptedSearch {
    async fn search(
        &self,
        _query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .urls
            .iter()
            .take(num_results)
            .map(|url| SearchResult {
                title: "Title".to_string(),
                url: url.clone(),
                snippet: "Snippet".to_string(),
                source: "scripted".to_string(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Page scraper serving canned outcomes and recording fetch order
pub struct ScriptedScraper {
    pages: HashMap<String, ScrapeOutcome>,
    pub scraped: Mutex<Vec<String>>,
}

impl ScriptedScraper {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            scraped: Mutex::new(Vec::new()),
        }
    }

    /// Register a page whose scrape succeeds with the given body
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            ScrapeOutcome {
                body_content: body.to_string(),
                citations: vec![url.to_string()],
            },
        );
        self
    }

    /// Register a page whose scrape degrades to the given sentinel
    pub fn with_sentinel(mut self, url: &str, sentinel: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            ScrapeOutcome {
                body_content: sentinel.to_string(),
                citations: Vec::new(),
            },
        );
        self
    }

    pub fn scraped_urls(&self) -> Vec<String> {
        self.scraped.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageScraper for ScriptedScraper {
    async fn scrape(&self, url: &str) -> ScrapeOutcome {
        self.scraped.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().unwrap_or(ScrapeOutcome {
            body_content: SCRAPE_FAILURE_TEXT.to_string(),
            citations: Vec::new(),
        })
    }
}

/// Completion provider returning a canned answer and recording prompts
pub struct ScriptedCompletion {
    answer: Option<String>,
    pub prompts: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl ScriptedCompletion {
    /// Always answer with the given text
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail
    pub fn failing() -> Self {
        Self {
            answer: None,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(&self, prompt: &str, _model: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => Err(CompletionError::ApiError {
                status: 500,
                message: "scripted failure".to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}
