//! HTTP request handling, independent of any server runtime.
//!
//! [`IconService::handle`] maps a method and URI to a complete response:
//!
//! | Route        | Parameters                 | Success                |
//! |--------------|----------------------------|------------------------|
//! | `/api/icon`  | `i`, `theme?`, `size?`     | `200 image/svg+xml`    |
//! | `/api/icons` | `i`, `theme?`, `perline?`  | `200 image/svg+xml`    |
//!
//! Failures are answered with the JSON error document and the status of
//! their [`ErrorCode`](crate::ErrorCode). Every failure is logged with the
//! route it surfaced from before it is converted.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use http::header::{ALLOW, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, Method, Response, StatusCode, Uri};

use crate::config::{ConfigError, DEFAULT_CACHE_CONTROL, ServiceConfig};
use crate::error::IconError;
use crate::generator::IconGenerator;
use crate::icons::{BundledIcons, VectorIconProvider};
use crate::validate::{QueryParams, validate_grid, validate_single};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Served endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Icon,
    Icons,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/api/icon" => Some(Self::Icon),
            "/api/icons" => Some(Self::Icons),
            _ => None,
        }
    }

    /// Tag used when logging failures on this route.
    pub fn context(self) -> &'static str {
        match self {
            Self::Icon => "GET /api/icon",
            Self::Icons => "GET /api/icons",
        }
    }
}

/// The icon HTTP API.
#[derive(Debug, Clone)]
pub struct IconService<P = BundledIcons> {
    generator: IconGenerator<P>,
    cache_control: HeaderValue,
}

impl IconService {
    /// A service over the bundled icons with default settings.
    pub fn bundled() -> Self {
        Self::new(IconGenerator::bundled(), DEFAULT_CACHE_CONTROL)
    }
}

impl IconService<Box<dyn VectorIconProvider>> {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(IconService::new(
            IconGenerator::from_config(config)?,
            &config.cache_control,
        ))
    }
}

impl<P: VectorIconProvider> IconService<P> {
    pub fn new(generator: IconGenerator<P>, cache_control: &str) -> Self {
        let cache_control = HeaderValue::from_str(cache_control).unwrap_or_else(|_| {
            log::warn!("Invalid Cache-Control {cache_control:?}, using default");
            HeaderValue::from_static(DEFAULT_CACHE_CONTROL)
        });
        Self {
            generator,
            cache_control,
        }
    }

    pub fn generator(&self) -> &IconGenerator<P> {
        &self.generator
    }

    /// Answers one request.
    pub fn handle(&self, method: &Method, uri: &Uri) -> Response<Vec<u8>> {
        let Some(route) = Route::from_path(uri.path()) else {
            log::debug!("No route for {}", uri.path());
            return plain(StatusCode::NOT_FOUND, "Not Found");
        };

        if *method != Method::GET && *method != Method::HEAD {
            let mut response = plain(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
            return response;
        }

        let query = uri.query().unwrap_or("");
        let mut response = match self.render(route, query) {
            Ok(svg) => self.svg_response(svg),
            Err(err) => {
                err.log(route.context());
                error_response(&err)
            }
        };

        if *method == Method::HEAD {
            response.body_mut().clear();
        }
        response
    }

    /// Renders `route` for a raw query string, converting panics into
    /// `INTERNAL_ERROR`.
    pub fn render(&self, route: Route, query: &str) -> Result<String, IconError> {
        let params = QueryParams::parse(query);
        catch_unwind(AssertUnwindSafe(|| match route {
            Route::Icon => self.generator.render_single(&validate_single(&params)?),
            Route::Icons => self.generator.render_grid(&validate_grid(&params)?),
        }))
        .unwrap_or_else(|payload| Err(IconError::Internal(panic_message(payload.as_ref()))))
    }

    fn svg_response(&self, svg: String) -> Response<Vec<u8>> {
        let mut response = Response::new(svg.into_bytes());
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SVG_CONTENT_TYPE));
        headers.insert(CACHE_CONTROL, self.cache_control.clone());
        with_length(response)
    }
}

/// Builds the JSON response for `err`.
pub fn error_response(err: &IconError) -> Response<Vec<u8>> {
    let body = err.to_response().to_json().unwrap_or_else(|e| {
        log::error!("Failed to serialize error response: {e}");
        r#"{"error":{"code":"INTERNAL_ERROR","message":"Internal error"}}"#.to_string()
    });
    let mut response = Response::new(body.into_bytes());
    *response.status_mut() = err.status();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    with_length(response)
}

fn plain(status: StatusCode, body: &'static str) -> Response<Vec<u8>> {
    let mut response = Response::new(body.as_bytes().to_vec());
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    with_length(response)
}

fn with_length(mut response: Response<Vec<u8>>) -> Response<Vec<u8>> {
    let length = HeaderValue::from(response.body().len());
    response.headers_mut().insert(CONTENT_LENGTH, length);
    response
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic while rendering".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
