use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse};

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync>;

/// Fake transport that records every request and answers through a closure.
pub(crate) struct RecordingHttpClient {
    responder: Responder,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn responding(status: u16, body: &'static str) -> Self {
        Self::new(move |_| Ok(HttpResponse::new(status, body)))
    }

    pub(crate) fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = (self.responder)(&request);
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

/// Decodes an `application/x-www-form-urlencoded` body into ordered pairs.
pub(crate) fn form_fields(request: &HttpRequest) -> Vec<(String, String)> {
    request
        .body
        .as_deref()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                urlencoding::decode(name).expect("valid encoding").into_owned(),
                urlencoding::decode(value).expect("valid encoding").into_owned(),
            )
        })
        .collect()
}

pub(crate) fn form_value(request: &HttpRequest, name: &str) -> Option<String> {
    form_fields(request)
        .into_iter()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value)
}
