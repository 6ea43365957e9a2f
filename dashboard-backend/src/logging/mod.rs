// src/logging/mod.rs

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// リクエストIDを受け渡すヘッダー
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// この時間を超えたリクエストは警告として記録する
const SLOW_REQUEST_MS: u128 = 3_000;

/// レベルを実行時に選べる構造化ログ
#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::WARN => {
                tracing::warn!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::INFO => {
                tracing::info!(message = $msg $(, $($key = ?$value,)*)?);
            }
            tracing::Level::DEBUG => {
                tracing::debug!(message = $msg $(, $($key = ?$value,)*)?);
            }
            _ => {}
        }
    };
}

/// ダッシュボードの対象テナント
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantRef {
    pub kind: &'static str,
    pub id: String,
}

impl TenantRef {
    /// `/agencies/{id}/...` や `/subaccounts/{id}/...` から取り出す
    pub fn from_path(path: &str) -> Option<Self> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let kind = match segments.next()? {
            "agencies" => "agency",
            "subaccounts" => "subaccount",
            _ => return None,
        };
        let id = segments.next()?.to_string();
        Some(Self { kind, id })
    }
}

// リクエストコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub path: String,
    pub method: String,
    pub tenant: Option<TenantRef>,
}

// ロギングミドルウェア
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let context = req.extensions().get::<RequestContext>().cloned();

    let Some(context) = context else {
        return next.run(req).await;
    };

    let tenant_kind = context.tenant.as_ref().map(|t| t.kind);
    let tenant_id = context.tenant.as_ref().map(|t| t.id.as_str());

    log_with_context!(
        tracing::Level::DEBUG,
        "Request started",
        "request_id" => &context.request_id,
        "method" => &context.method,
        "path" => &context.path,
        "tenant_kind" => tenant_kind,
        "tenant_id" => tenant_id,
    );

    let response = next.run(req).await;
    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    let level = if status >= 500 {
        tracing::Level::ERROR
    } else if status >= 400 || duration_ms > SLOW_REQUEST_MS {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };

    log_with_context!(
        level,
        "Request completed",
        "request_id" => &context.request_id,
        "method" => &context.method,
        "path" => &context.path,
        "tenant_kind" => tenant_kind,
        "tenant_id" => tenant_id,
        "status" => status,
        "duration_ms" => duration_ms,
    );

    response
}

// RequestContextを生成するミドルウェア
// 呼び出し元が x-request-id を付けていればそれを引き継ぐ
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

    let path = req.uri().path().to_string();
    let context = RequestContext {
        request_id: request_id.clone(),
        tenant: TenantRef::from_path(&path),
        path,
        method: req.method().to_string(),
    };

    req.extensions_mut().insert(context);
    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}
