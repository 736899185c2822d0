use domain::models::{DashboardOverview, EmergencyCases};
use infrastructure::api_client::ApiClient;
use shared::types::Result;

/// Read-only admin views: overview counters, emergency cases, totals.
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn overview(&self) -> Result<DashboardOverview> {
        self.api.dashboard_overview().await
    }

    pub async fn emergency_cases(&self, days: u32) -> Result<EmergencyCases> {
        self.api.emergency_cases(days.max(1)).await
    }

    pub async fn total_patients(&self) -> Result<i64> {
        Ok(self.api.total_patients().await?.total_patients)
    }
}
