// src/domain/billing_link.rs

/// テナントと決済プロバイダー接続アカウントの連携状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingLink {
    Linked(String),
    Unlinked,
}

impl BillingLink {
    /// 空白のみのIDは未連携として扱う
    pub fn from_connect_account_id(connect_account_id: Option<&str>) -> Self {
        match connect_account_id.map(str::trim) {
            Some(id) if !id.is_empty() => BillingLink::Linked(id.to_string()),
            _ => BillingLink::Unlinked,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, BillingLink::Linked(_))
    }
}
