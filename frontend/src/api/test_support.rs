pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::FetchError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        hits: Vec<String>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        response: MockResponse,
    }

    impl Route {
        fn matches(&self, request: &reqwest::Request) -> bool {
            if self.method != *request.method() || self.path != request.url().path() {
                return false;
            }
            self.query.iter().all(|(key, value)| {
                request
                    .url()
                    .query_pairs()
                    .any(|(k, v)| k == key.as_str() && v == value.as_str())
            })
        }
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    hits: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        /// Paths with query strings of every request served so far.
        pub fn hits(&self) -> Vec<String> {
            self.inner.lock().expect("mock lock").hits.clone()
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = match then.raw_body.take() {
                Some(raw) => MockResponse::text(then.status.unwrap_or(200), raw),
                None => MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.take().unwrap_or_else(|| serde_json::json!({})),
                ),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query: when.query,
                response,
            });
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, FetchError> {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| FetchError::Network("mock lock".into()))?;
            let url = request.url();
            let hit = match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            };
            inner.hits.push(hit);

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.matches(request))
                .map(|route| route.response.clone())
                .ok_or_else(|| {
                    FetchError::Network(format!("No mock for {} {}", request.method(), url))
                })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn query_param(&mut self, key: &str, value: &str) -> &mut Self {
            self.query.push((key.to_string(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw_body: Option<String>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, body: &str) -> &mut Self {
            self.raw_body = Some(body.to_string());
            self
        }
    }
}
