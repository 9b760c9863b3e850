use async_trait::async_trait;
use badgehunter_core::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

pub const FIXTURE_API: &str = "https://api.fixture.test";

/// Answers requests from a fixed URL table; unknown URLs fail as network
/// errors. Every request bumps a shared counter so a scenario can still
/// read it after handing the transport to a provider.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, HttpResponse>,
    requests: Rc<Cell<usize>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `FIXTURE_API` + `path`.
    #[must_use]
    pub fn route(self, path: &str, status: u16, body: &str) -> Self {
        self.route_url(format!("{FIXTURE_API}{path}"), status, body)
    }

    #[must_use]
    pub fn route_url(mut self, url: impl Into<String>, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.into(),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    #[must_use]
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.requests)
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.set(self.requests.get() + 1);
        self.routes
            .get(&request.url)
            .cloned()
            .ok_or(TransportError::Network(request.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn routes_answer_and_unknown_urls_fail() {
        let transport = ScriptedTransport::new().route("/users/a", 404, "{}");
        let counter = transport.counter();
        let hit = block_on(transport.send(HttpRequest::get(format!("{FIXTURE_API}/users/a"))));
        assert_eq!(hit.unwrap().status, 404);
        let miss = block_on(transport.send(HttpRequest::get("https://elsewhere.test")));
        assert!(matches!(miss, Err(TransportError::Network(_))));
        assert_eq!(counter.get(), 2);
    }
}
