use serde::{Deserialize, Serialize};

/// Dashboard counters for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_workers: usize,
    pub active_courses: usize,
    pub total_certifications: usize,
    pub expiring_soon: usize,
}
