//! Browser `fetch` transport for the remote providers.

use async_trait::async_trait;
use badgehunter_core::{HttpRequest, HttpResponse, HttpTransport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("fetch is only available in the browser")]
    NoWindow,
    #[error("{0}")]
    Js(String),
    #[error("fetch resolved to something other than a Response")]
    NotAResponse,
    #[error("response body was not text")]
    NonTextBody,
}

impl From<FetchError> for TransportError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NonTextBody => Self::Body(err.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// [`HttpTransport`] over `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        Ok(browser::send(request).await?)
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::FetchError;
    use crate::dom;
    use badgehunter_core::{HttpRequest, HttpResponse};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js(err: &JsValue) -> FetchError {
        FetchError::Js(dom::js_error_message(err))
    }

    pub(super) async fn send(request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let window = dom::window().ok_or(FetchError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = request.body.as_deref() {
            init.set_body(&JsValue::from_str(body));
        }
        let js_request =
            Request::new_with_str_and_init(&request.url, &init).map_err(|err| js(&err))?;
        for (name, value) in &request.headers {
            js_request
                .headers()
                .set(name, value)
                .map_err(|err| js(&err))?;
        }

        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|err| js(&err))?;
        let response: Response = value.dyn_into().map_err(|_| FetchError::NotAResponse)?;
        let text = JsFuture::from(response.text().map_err(|err| js(&err))?)
            .await
            .map_err(|err| js(&err))?;
        let body = text.as_string().ok_or(FetchError::NonTextBody)?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::FetchError;
    use badgehunter_core::{HttpRequest, HttpResponse};

    #[allow(clippy::unused_async)]
    pub(super) async fn send(_request: HttpRequest) -> Result<HttpResponse, FetchError> {
        Err(FetchError::NoWindow)
    }
}
