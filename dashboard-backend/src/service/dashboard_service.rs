// src/service/dashboard_service.rs

use crate::api::dto::dashboard_dto::{AgencyDashboard, ConversionSummary, SubaccountDashboard};
use crate::db::DbPool;
use crate::domain::billing_link::BillingLink;
use crate::domain::checkout_session::CheckoutSession;
use crate::domain::funnel_performance::{summarize_funnels, total_visits};
use crate::domain::metrics::{
    chart_series, compute_metrics_with_format, goal_progress_percent, DashboardMode,
    SessionDateFormat,
};
use crate::domain::year_window::YearWindow;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::agency_repository::AgencyRepository;
use crate::repository::funnel_repository::FunnelRepository;
use crate::repository::subaccount_repository::SubaccountRepository;
use crate::service::billing_service::{BillingProvider, CHECKOUT_SESSION_PAGE_SIZE};
use std::sync::Arc;
use uuid::Uuid;

/// 接続アカウントに既定通貨がない場合の表示通貨
pub const FALLBACK_CURRENCY: &str = "USD";

/// 1回の描画で取得した決済データ
#[derive(Debug, Clone)]
struct BillingSnapshot {
    linked: bool,
    currency: String,
    sessions: Vec<CheckoutSession>,
}

impl BillingSnapshot {
    fn unlinked() -> Self {
        Self {
            linked: false,
            currency: FALLBACK_CURRENCY.to_string(),
            sessions: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    agency_repo: Arc<AgencyRepository>,
    subaccount_repo: Arc<SubaccountRepository>,
    funnel_repo: Arc<FunnelRepository>,
    billing: Arc<dyn BillingProvider>,
    date_format: SessionDateFormat,
}

impl DashboardService {
    pub fn new(
        db: DbPool,
        billing: Arc<dyn BillingProvider>,
        date_format: SessionDateFormat,
    ) -> Self {
        Self {
            agency_repo: Arc::new(AgencyRepository::new(db.clone())),
            subaccount_repo: Arc::new(SubaccountRepository::new(db.clone())),
            funnel_repo: Arc::new(FunnelRepository::new(db)),
            billing,
            date_format,
        }
    }

    /// エージェンシーダッシュボードを構築
    pub async fn agency_dashboard(
        &self,
        agency_id: Uuid,
        year: Option<i32>,
    ) -> AppResult<AgencyDashboard> {
        let window = resolve_window(year)?;

        let agency = self
            .agency_repo
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Agency {} not found", agency_id)))?;

        let link = agency.billing_link();

        // クライアント数と決済データに依存関係はない
        let (active_clients, billing) = tokio::try_join!(
            async {
                Ok::<_, AppError>(self.subaccount_repo.count_by_agency_id(agency_id).await?)
            },
            self.load_billing(&link, &window),
        )?;

        let metrics =
            compute_metrics_with_format(&billing.sessions, DashboardMode::Agency, &self.date_format);

        log_with_context!(
            tracing::Level::INFO,
            "Agency dashboard computed",
            "agency_id" => agency_id,
            "year" => window.year,
            "billing_linked" => billing.linked,
            "total_sessions" => metrics.total_sessions,
            "net_revenue" => metrics.net_revenue,
        );

        Ok(AgencyDashboard {
            agency_id: agency.id,
            agency_name: agency.name,
            year: window.year,
            currency: billing.currency,
            billing_linked: billing.linked,
            active_clients,
            goal: agency.goal,
            goal_progress_percent: goal_progress_percent(active_clients, agency.goal),
            transaction_history: metrics.transaction_history(),
            conversions: ConversionSummary::from_metrics(&metrics),
            metrics,
        })
    }

    /// サブアカウントダッシュボードを構築
    pub async fn subaccount_dashboard(
        &self,
        subaccount_id: Uuid,
        year: Option<i32>,
    ) -> AppResult<SubaccountDashboard> {
        let window = resolve_window(year)?;

        let subaccount = self
            .subaccount_repo
            .find_by_id(subaccount_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Subaccount {} not found", subaccount_id))
            })?;

        let link = subaccount.billing_link();

        let (billing, funnels) = tokio::try_join!(self.load_billing(&link, &window), async {
            Ok::<_, AppError>(
                self.funnel_repo
                    .find_with_pages_by_subaccount_id(subaccount_id)
                    .await?,
            )
        })?;

        let metrics = compute_metrics_with_format(
            &billing.sessions,
            DashboardMode::Subaccount,
            &self.date_format,
        );
        let funnel_performance = summarize_funnels(funnels);
        let total_funnel_visits = total_visits(&funnel_performance);

        log_with_context!(
            tracing::Level::INFO,
            "Subaccount dashboard computed",
            "subaccount_id" => subaccount_id,
            "year" => window.year,
            "billing_linked" => billing.linked,
            "total_sessions" => metrics.total_sessions,
            "funnels" => funnel_performance.len(),
        );

        Ok(SubaccountDashboard {
            subaccount_id: subaccount.id,
            agency_id: subaccount.agency_id,
            subaccount_name: subaccount.name,
            year: window.year,
            currency: billing.currency,
            billing_linked: billing.linked,
            checkout_activity: chart_series(&billing.sessions, &self.date_format),
            conversions: ConversionSummary::from_metrics(&metrics),
            metrics,
            funnel_performance,
            total_funnel_visits,
        })
    }

    async fn load_billing(
        &self,
        link: &BillingLink,
        window: &YearWindow,
    ) -> AppResult<BillingSnapshot> {
        let account_id = match link {
            BillingLink::Linked(account_id) => account_id,
            BillingLink::Unlinked => {
                tracing::debug!("No connected billing account, using baseline metrics");
                return Ok(BillingSnapshot::unlinked());
            }
        };

        let (currency, sessions) = tokio::try_join!(
            self.billing.default_currency(account_id),
            self.billing
                .list_checkout_sessions(account_id, window, CHECKOUT_SESSION_PAGE_SIZE),
        )?;

        Ok(BillingSnapshot {
            linked: true,
            currency: currency
                .map(|c| c.to_uppercase())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| FALLBACK_CURRENCY.to_string()),
            sessions,
        })
    }
}

fn resolve_window(year: Option<i32>) -> AppResult<YearWindow> {
    match year {
        Some(year) => YearWindow::for_year(year)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid year: {}", year))),
        None => Ok(YearWindow::current()),
    }
}
