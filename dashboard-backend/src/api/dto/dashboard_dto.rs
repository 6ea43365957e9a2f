// src/api/dto/dashboard_dto.rs

use crate::domain::funnel_performance::FunnelPerformance;
use crate::domain::metrics::{ChartSession, MetricsResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// ダッシュボード取得クエリ
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DashboardQuery {
    /// 集計対象の年（省略時は現在の年）
    #[validate(range(min = 1970, max = 9999, message = "year must be between 1970 and 9999"))]
    pub year: Option<i32>,
}

/// コンバージョン内訳
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub total_sessions: usize,
    pub won_sessions: usize,
    pub abandoned_sessions: usize,
}

impl ConversionSummary {
    pub fn from_metrics(metrics: &MetricsResult) -> Self {
        let won_sessions = metrics.closed_sessions.len();
        Self {
            total_sessions: metrics.total_sessions,
            won_sessions,
            abandoned_sessions: metrics.total_sessions.saturating_sub(won_sessions),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgencyDashboard {
    pub agency_id: Uuid,
    pub agency_name: String,
    pub year: i32,
    pub currency: String,
    pub billing_linked: bool,
    pub metrics: MetricsResult,
    pub active_clients: u64,
    pub goal: i32,
    pub goal_progress_percent: f64,
    pub transaction_history: Vec<ChartSession>,
    pub conversions: ConversionSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubaccountDashboard {
    pub subaccount_id: Uuid,
    pub agency_id: Uuid,
    pub subaccount_name: String,
    pub year: i32,
    pub currency: String,
    pub billing_linked: bool,
    pub metrics: MetricsResult,
    pub checkout_activity: Vec<ChartSession>,
    pub conversions: ConversionSummary,
    pub funnel_performance: Vec<FunnelPerformance>,
    pub total_funnel_visits: i64,
}
