// src/domain/checkout_session.rs

use serde::{Deserialize, Serialize};

/// 決済プロバイダーのチェックアウトセッション状態
///
/// `complete` / `open` / `expired` 以外の値は `Other` として保持し、
/// どの集計区分にも含めない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Complete,
    Open,
    Expired,
    Other(String),
}

impl SessionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SessionStatus::Complete => "complete",
            SessionStatus::Open => "open",
            SessionStatus::Expired => "expired",
            SessionStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for SessionStatus {
    fn from(value: &str) -> Self {
        match value {
            "complete" => SessionStatus::Complete,
            "open" => SessionStatus::Open,
            "expired" => SessionStatus::Expired,
            other => SessionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for SessionStatus {
    fn from(value: String) -> Self {
        SessionStatus::from(value.as_str())
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 集計の入力となるチェックアウトセッション（読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub status: SessionStatus,
    /// 最小通貨単位の金額。プロバイダーが返さない場合は `None`
    pub amount_total: Option<i64>,
    /// 作成日時（UNIX秒）
    pub created_at: i64,
}

impl CheckoutSession {
    pub fn new(
        id: impl Into<String>,
        status: SessionStatus,
        amount_total: Option<i64>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            amount_total,
            created_at,
        }
    }
}
