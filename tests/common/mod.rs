//! Mock accelerator server shared by the integration tests

#![allow(dead_code)]

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned answers keyed by request path; unknown paths answer 404
pub struct MockServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Start serving on an ephemeral port in a background thread
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Vec<(&str, u16, &[u8])> = routes
            .iter()
            .map(|(path, status, body)| (*path, *status, body.as_bytes()))
            .collect();
        Self::start_raw(&routes)
    }

    /// Like [`MockServer::start`] with arbitrary response bytes
    pub fn start_raw(routes: &[(&str, u16, &[u8])]) -> Self {
        let routes: Arc<HashMap<String, (u16, Vec<u8>)>> = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_vec())))
                .collect(),
        );

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let hits = Arc::new(AtomicUsize::new(0));
        let paths = Arc::new(Mutex::new(Vec::new()));
        let (thread_hits, thread_paths) = (hits.clone(), paths.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        return;
                    };
                    let (routes, hits, paths) =
                        (routes.clone(), thread_hits.clone(), thread_paths.clone());

                    tokio::spawn(async move {
                        let service = service_fn(move |req: Request<Incoming>| {
                            let (routes, hits, paths) = (routes.clone(), hits.clone(), paths.clone());
                            async move {
                                hits.fetch_add(1, Ordering::SeqCst);
                                let path = req.uri().path().to_string();
                                paths.lock().unwrap().push(path.clone());

                                let (status, body) = routes
                                    .get(&path)
                                    .cloned()
                                    .unwrap_or((404, b"not found".to_vec()));
                                let response = Response::builder()
                                    .status(StatusCode::from_u16(status).unwrap())
                                    .body(Full::new(Bytes::from(body)))
                                    .unwrap();
                                Ok::<_, Infallible>(response)
                            }
                        });

                        let _ = http1::Builder::new()
                            .serve_connection(TokioIo::new(stream), service)
                            .await;
                    });
                }
            });
        });

        Self { url, hits, paths }
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request paths in arrival order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub const CATALOG: &str = r#"[
    {"id": "rest", "name": "REST", "options": false, "description": "JAX-RS endpoints"},
    {"id": "web", "name": "Web application", "options": true},
    {"id": "persistence", "name": "Persistence", "options": true}
]"#;

pub const WEB_OPTIONS: &str = "<div class=\"options\"><input name=\"context-root\"></div>";
