//! Access logging for every API request.
//!
//! Emits a `debug` line when a request arrives and one completion line whose
//! level follows the response class: `info` for success, `warn` for client
//! errors, `error` for server errors.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

/// Request logger middleware service.
pub struct RequestLoggerMiddleware<S> {
    service: S,
}

/// Severity a completed request is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    ClientError,
    ServerError,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Outcome::ServerError
        } else if status.is_client_error() {
            Outcome::ClientError
        } else {
            Outcome::Success
        }
    }
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let remote_addr = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        debug!(
            target: "api",
            method = %method,
            path = %path,
            remote_addr = %remote_addr,
            "→ Request received"
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let status = res.status().as_u16();
            let duration_ms = start.elapsed().as_millis();

            match Outcome::of(res.status()) {
                Outcome::Success => info!(
                    target: "api",
                    method = %method,
                    path = %path,
                    status,
                    duration_ms = %duration_ms,
                    "← Request completed"
                ),
                Outcome::ClientError => warn!(
                    target: "api",
                    method = %method,
                    path = %path,
                    status,
                    duration_ms = %duration_ms,
                    "← Client error"
                ),
                Outcome::ServerError => error!(
                    target: "api",
                    method = %method,
                    path = %path,
                    status,
                    duration_ms = %duration_ms,
                    remote_addr = %remote_addr,
                    "← Server error"
                ),
            }

            Ok(res)
        })
    }
}
