// src/domain/metrics.rs

//! チェックアウトセッションの集計
//!
//! 1回のダッシュボード描画ごとに、取得済みのセッション一覧（最大100件）から
//! 確定売上・見込み売上・成約率を算出する。入力は借用のみで変更しない。

use crate::domain::checkout_session::{CheckoutSession, SessionStatus};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::Serialize;

const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// 集計対象のダッシュボード種別。見込み（pending）に数える状態が異なる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardMode {
    /// `open` のみ
    Agency,
    /// `open` と `expired`
    Subaccount,
}

impl DashboardMode {
    pub fn is_pending(&self, status: &SessionStatus) -> bool {
        match status {
            SessionStatus::Open => true,
            SessionStatus::Expired => matches!(self, DashboardMode::Subaccount),
            _ => false,
        }
    }
}

/// セッション作成日の表示フォーマット（strftime形式、日単位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDateFormat(String);

impl SessionDateFormat {
    pub fn new(format: impl Into<String>) -> Result<Self, String> {
        let format = format.into();
        if format.trim().is_empty() {
            return Err("Date format must not be empty".to_string());
        }
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("Invalid date format: '{}'", format));
        }
        Ok(Self(format))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UNIX秒をUTCの暦日文字列に変換する。範囲外の値は空文字列
    pub fn format_timestamp(&self, seconds: i64) -> String {
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(|dt| dt.format(&self.0).to_string())
            .unwrap_or_default()
    }
}

impl Default for SessionDateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

/// チャート表示用に主通貨単位へ変換したセッション
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSession {
    pub id: String,
    pub status: SessionStatus,
    pub amount_total: f64,
    pub created: String,
}

impl ChartSession {
    pub fn from_session(session: &CheckoutSession, date_format: &SessionDateFormat) -> Self {
        Self {
            id: session.id.clone(),
            status: session.status.clone(),
            amount_total: minor_to_major(session.amount_total),
            created: date_format.format_timestamp(session.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResult {
    pub closed_sessions: Vec<ChartSession>,
    pub pending_sessions: Vec<ChartSession>,
    pub net_revenue: f64,
    pub potential_revenue: f64,
    /// 入力が空の場合は 0.0（`total_sessions` で「データなし」と区別できる）
    pub closing_rate_percent: f64,
    pub total_sessions: usize,
}

impl MetricsResult {
    /// 決済未連携時のベースライン
    pub fn empty() -> Self {
        Self {
            closed_sessions: Vec::new(),
            pending_sessions: Vec::new(),
            net_revenue: 0.0,
            potential_revenue: 0.0,
            closing_rate_percent: 0.0,
            total_sessions: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.total_sessions > 0
    }

    /// 取引履歴チャート用の系列（確定 → 見込みの順）
    pub fn transaction_history(&self) -> Vec<ChartSession> {
        self.closed_sessions
            .iter()
            .chain(self.pending_sessions.iter())
            .cloned()
            .collect()
    }
}

/// 小数第2位で四捨五入（0から遠い方へ丸める）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 最小通貨単位から主通貨単位へ。金額なしは 0
pub fn minor_to_major(amount: Option<i64>) -> f64 {
    amount.unwrap_or(0) as f64 / 100.0
}

/// 成約率（%）。分母は区分前の全セッション数
pub fn closing_rate(closed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(closed as f64 / total as f64 * 100.0)
}

/// 目標に対する達成率（%）。目標が0以下なら 0
pub fn goal_progress_percent(current: u64, goal: i32) -> f64 {
    if goal <= 0 {
        return 0.0;
    }
    round2(current as f64 / f64::from(goal) * 100.0)
}

pub fn compute_metrics(sessions: &[CheckoutSession], mode: DashboardMode) -> MetricsResult {
    compute_metrics_with_format(sessions, mode, &SessionDateFormat::default())
}

pub fn compute_metrics_with_format(
    sessions: &[CheckoutSession],
    mode: DashboardMode,
    date_format: &SessionDateFormat,
) -> MetricsResult {
    let mut closed_sessions = Vec::new();
    let mut pending_sessions = Vec::new();
    // 合計は最小通貨単位の整数で積み上げ、最後に一度だけ変換する
    let mut closed_minor: i64 = 0;
    let mut pending_minor: i64 = 0;

    for session in sessions {
        let amount = session.amount_total.unwrap_or(0);
        if session.status == SessionStatus::Complete {
            closed_minor = closed_minor.saturating_add(amount);
            closed_sessions.push(ChartSession::from_session(session, date_format));
        } else if mode.is_pending(&session.status) {
            pending_minor = pending_minor.saturating_add(amount);
            pending_sessions.push(ChartSession::from_session(session, date_format));
        }
    }

    let closing_rate_percent = closing_rate(closed_sessions.len(), sessions.len());

    MetricsResult {
        closed_sessions,
        pending_sessions,
        net_revenue: round2(minor_to_major(Some(closed_minor))),
        potential_revenue: round2(minor_to_major(Some(pending_minor))),
        closing_rate_percent,
        total_sessions: sessions.len(),
    }
}

/// 全セッションをチャート用に変換（入力順を維持）
pub fn chart_series(
    sessions: &[CheckoutSession],
    date_format: &SessionDateFormat,
) -> Vec<ChartSession> {
    sessions
        .iter()
        .map(|session| ChartSession::from_session(session, date_format))
        .collect()
}
