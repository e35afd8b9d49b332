use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jobpost_client::{JobService, PageSource};
use jobpost_core::{DescriptionCache, Error};
use tokio::time::Duration;
use url::Url;

/// Page source serving one canned response and counting fetches.
pub(crate) struct CannedSource {
    page: Result<String, Error>,
    fetches: AtomicUsize,
}

impl CannedSource {
    pub(crate) fn html(body: &str) -> Arc<Self> {
        Arc::new(Self { page: Ok(body.to_string()), fetches: AtomicUsize::new(0) })
    }

    pub(crate) fn failing(err: Error) -> Arc<Self> {
        Arc::new(Self { page: Err(err), fetches: AtomicUsize::new(0) })
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for CannedSource {
    async fn fetch_html(&self, _url: &Url) -> Result<String, Error> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.page.clone()
    }
}

pub(crate) fn service(source: &Arc<CannedSource>) -> JobService {
    JobService::new(source.clone(), DescriptionCache::new(Duration::from_secs(24 * 60 * 60)))
}

/// Parse the JSON text payload of a tool result.
pub(crate) fn payload(result: &rmcp::model::CallToolResult) -> serde_json::Value {
    let content = serde_json::to_value(&result.content[0]).unwrap();
    let text = content.get("text").and_then(|t| t.as_str()).unwrap();
    serde_json::from_str(text).unwrap()
}
