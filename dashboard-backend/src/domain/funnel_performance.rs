// src/domain/funnel_performance.rs

use crate::domain::{funnel_model, funnel_page_model};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunnelPageVisits {
    pub id: Uuid,
    pub name: String,
    pub path_name: String,
    pub visits: i64,
}

/// ファネルごとのページ訪問数の合計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunnelPerformance {
    pub funnel_id: Uuid,
    pub name: String,
    pub published: bool,
    pub total_funnel_visits: i64,
    pub pages: Vec<FunnelPageVisits>,
}

pub fn summarize_funnels(
    funnels: Vec<(funnel_model::Model, Vec<funnel_page_model::Model>)>,
) -> Vec<FunnelPerformance> {
    funnels
        .into_iter()
        .map(|(funnel, mut pages)| {
            pages.sort_by_key(|page| page.sort_order);

            let total_funnel_visits = pages.iter().map(|page| i64::from(page.visits)).sum();

            FunnelPerformance {
                funnel_id: funnel.id,
                name: funnel.name,
                published: funnel.published,
                total_funnel_visits,
                pages: pages
                    .into_iter()
                    .map(|page| FunnelPageVisits {
                        id: page.id,
                        name: page.name,
                        path_name: page.path_name,
                        visits: i64::from(page.visits),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// 全ファネル合計の訪問数
pub fn total_visits(performance: &[FunnelPerformance]) -> i64 {
    performance.iter().map(|f| f.total_funnel_visits).sum()
}
