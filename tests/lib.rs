//! Shared fakes for whyticker behaviour tests.

use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
pub use whyticker_core::{
    AnalysisClient, AnalysisErrorKind, ClientConfig, HttpClient, HttpError, HttpRequest,
    HttpResponse, TickerSymbol,
};
pub use whyticker_widget::{
    ChartId, ChartSurface, LineChartSpec, TextChartSurface, TickerWidget, Tone, WidgetState,
};

pub const BASE_URL: &str = "http://backend.test";

/// Backend double answering per URL path and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    routes: HashMap<String, Result<HttpResponse, HttpError>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, symbol: &str, response: Result<HttpResponse, HttpError>) -> Self {
        self.routes
            .insert(format!("{BASE_URL}/analyze/{symbol}"), response);
        self
    }

    pub fn ok(self, symbol: &str, body: Value) -> Self {
        self.route(symbol, Ok(HttpResponse::ok_json(body.to_string())))
    }

    pub fn status(self, symbol: &str, status: u16) -> Self {
        self.route(symbol, Ok(HttpResponse::new(status, r#"{"error":"nope"}"#)))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedBackend {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self
            .routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Err(HttpError::new(format!("no route for {}", request.url))));
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

pub fn client_for(backend: &Arc<ScriptedBackend>) -> AnalysisClient {
    let config = ClientConfig::new(BASE_URL).expect("test base url is valid");
    AnalysisClient::with_http_client(config, backend.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEvent {
    Mounted(ChartId),
    Destroyed(ChartId),
}

/// Chart surface that records mounts and destroys and tracks live instances.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    pub events: Vec<ChartEvent>,
    pub live: BTreeSet<ChartId>,
    pub max_live: usize,
    pub specs: Vec<LineChartSpec>,
}

impl ChartSurface for RecordingSurface {
    fn mount(&mut self, spec: LineChartSpec) -> ChartId {
        self.next_id += 1;
        let id = ChartId::new(self.next_id);
        self.events.push(ChartEvent::Mounted(id));
        self.live.insert(id);
        self.max_live = self.max_live.max(self.live.len());
        self.specs.push(spec);
        id
    }

    fn destroy(&mut self, id: ChartId) {
        self.events.push(ChartEvent::Destroyed(id));
        self.live.remove(&id);
    }
}

/// Analysis payload in the backend's wire shape.
pub fn analysis_body(name: &str, change: f64, label: &str, with_series: bool) -> Value {
    let mut stock = json!({
        "name": name,
        "price": 189.84,
        "change": change,
        "volume": 5_123_400,
    });
    if with_series {
        stock["historical"] = json!({
            "timestamps": ["2024-03-07 09:30:00", "2024-03-07 10:30:00", "2024-03-07 11:30:00"],
            "prices": [191.2, 190.1, 189.84],
        });
    }

    json!({
        "stock": stock,
        "sentiment": { "label": label, "score": 0.91 },
        "news": [
            {
                "title": format!("{name} moves"),
                "description": "Shares moved on the news.",
                "publishedAt": "2024-03-07T16:05:00Z",
                "url": "https://news.example/1",
            },
            {
                "title": "Analysts weigh in",
                "description": "x".repeat(250),
                "publishedAt": "2024-03-07T12:00:00Z",
                "url": "https://news.example/2",
            }
        ],
    })
}
