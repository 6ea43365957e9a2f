// src/service/billing_service.rs

use crate::config::StripeConfig;
use crate::domain::checkout_session::{CheckoutSession, SessionStatus};
use crate::domain::year_window::YearWindow;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use stripe::{
    Account, AccountId, CheckoutSession as StripeCheckoutSession, Client, ListCheckoutSessions,
    RangeBounds, RangeQuery,
};

/// 1回のダッシュボード描画で取得するセッション数の上限
pub const CHECKOUT_SESSION_PAGE_SIZE: u64 = 100;

/// 接続アカウント単位で決済データを読み取るプロバイダー
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// 接続アカウントの既定通貨（小文字のISOコード、未設定なら `None`）
    async fn default_currency(&self, account_id: &str) -> AppResult<Option<String>>;

    /// 期間内のチェックアウトセッション（プロバイダーの返却順、最大 `limit` 件）
    async fn list_checkout_sessions(
        &self,
        account_id: &str,
        window: &YearWindow,
        limit: u64,
    ) -> AppResult<Vec<CheckoutSession>>;
}

/// 設定に応じたプロバイダーを生成
pub fn billing_provider_from_config(config: &StripeConfig) -> Arc<dyn BillingProvider> {
    if config.development_mode {
        tracing::info!("Using in-memory billing provider with demo sessions");
        Arc::new(StaticBillingProvider::demo(&YearWindow::current()))
    } else {
        Arc::new(StripeBillingProvider::new(Client::new(
            config.secret_key.clone(),
        )))
    }
}

#[derive(Clone)]
pub struct StripeBillingProvider {
    client: Client,
}

impl StripeBillingProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn parse_account_id(account_id: &str) -> AppResult<AccountId> {
        // 保存済みのIDが壊れているのはサーバー側のデータ不整合
        account_id.parse::<AccountId>().map_err(|_| {
            tracing::error!(account_id, "Stored connected account id is malformed");
            AppError::InternalServerError(format!(
                "Malformed connected account id: {}",
                account_id
            ))
        })
    }
}

#[async_trait]
impl BillingProvider for StripeBillingProvider {
    async fn default_currency(&self, account_id: &str) -> AppResult<Option<String>> {
        let account_id = Self::parse_account_id(account_id)?;

        let account = Account::retrieve(&self.client, &account_id, &[])
            .await
            .map_err(|e| {
                tracing::error!(%account_id, "Failed to retrieve connected account: {}", e);
                AppError::ExternalServiceError(format!("Stripe error: {}", e))
            })?;

        Ok(account.default_currency.map(|currency| currency.to_string()))
    }

    async fn list_checkout_sessions(
        &self,
        account_id: &str,
        window: &YearWindow,
        limit: u64,
    ) -> AppResult<Vec<CheckoutSession>> {
        let account_id = Self::parse_account_id(account_id)?;
        // 接続アカウントのコンテキストで問い合わせる
        let client = self.client.clone().with_stripe_account(account_id.clone());

        let params = ListCheckoutSessions {
            created: Some(RangeQuery::Bounds(RangeBounds {
                gte: Some(window.start),
                lte: Some(window.end),
                ..Default::default()
            })),
            limit: Some(limit),
            ..Default::default()
        };

        let sessions = StripeCheckoutSession::list(&client, &params)
            .await
            .map_err(|e| {
                tracing::error!(%account_id, "Failed to list checkout sessions: {}", e);
                AppError::ExternalServiceError(format!("Stripe error: {}", e))
            })?;

        Ok(sessions.data.into_iter().map(from_stripe_session).collect())
    }
}

fn from_stripe_session(session: StripeCheckoutSession) -> CheckoutSession {
    let status = session.status.map_or_else(
        || SessionStatus::Other("unknown".to_string()),
        |s| SessionStatus::from(s.as_str()),
    );

    CheckoutSession::new(
        session.id.to_string(),
        status,
        session.amount_total,
        session.created,
    )
}

#[derive(Debug, Clone, Default)]
struct StaticAccount {
    currency: Option<String>,
    sessions: Vec<CheckoutSession>,
}

/// 固定データを返すプロバイダー（開発モード・テスト用）
///
/// 未登録のアカウントは通貨なし・セッションなしとして扱う。
#[derive(Debug, Clone, Default)]
pub struct StaticBillingProvider {
    accounts: HashMap<String, StaticAccount>,
    /// 未登録のアカウントに返すデータ（なければ空）
    fallback: Option<StaticAccount>,
    unavailable: Option<String>,
}

impl StaticBillingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開発モード用。どの接続アカウントにも期間内のデモセッションを返す
    pub fn demo(window: &YearWindow) -> Self {
        const DAY: i64 = 24 * 60 * 60;
        let at = |days: i64| (window.start + days * DAY).min(window.end);

        let sessions = vec![
            CheckoutSession::new("cs_demo_1", SessionStatus::Complete, Some(49_900), at(3)),
            CheckoutSession::new("cs_demo_2", SessionStatus::Complete, Some(120_000), at(40)),
            CheckoutSession::new("cs_demo_3", SessionStatus::Open, Some(35_000), at(75)),
            CheckoutSession::new("cs_demo_4", SessionStatus::Expired, Some(15_000), at(110)),
            CheckoutSession::new("cs_demo_5", SessionStatus::Complete, None, at(150)),
        ];

        Self {
            fallback: Some(StaticAccount {
                currency: Some("usd".to_string()),
                sessions,
            }),
            ..Self::default()
        }
    }

    pub fn with_account(
        mut self,
        account_id: impl Into<String>,
        currency: Option<&str>,
        sessions: Vec<CheckoutSession>,
    ) -> Self {
        self.accounts.insert(
            account_id.into(),
            StaticAccount {
                currency: currency.map(str::to_string),
                sessions,
            },
        );
        self
    }

    /// すべての呼び出しを外部サービスエラーにする
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            unavailable: Some(message.into()),
            ..Self::default()
        }
    }

    fn account(&self, account_id: &str) -> Option<&StaticAccount> {
        self.accounts.get(account_id).or(self.fallback.as_ref())
    }

    fn ensure_available(&self) -> AppResult<()> {
        match &self.unavailable {
            Some(message) => Err(AppError::ExternalServiceError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillingProvider for StaticBillingProvider {
    async fn default_currency(&self, account_id: &str) -> AppResult<Option<String>> {
        self.ensure_available()?;
        Ok(self
            .account(account_id)
            .and_then(|account| account.currency.clone()))
    }

    async fn list_checkout_sessions(
        &self,
        account_id: &str,
        window: &YearWindow,
        limit: u64,
    ) -> AppResult<Vec<CheckoutSession>> {
        self.ensure_available()?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .account(account_id)
            .map(|account| {
                account
                    .sessions
                    .iter()
                    .filter(|session| window.contains(session.created_at))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
