use serde::Serialize;

/// Row counts shown on the admin landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub projects: u64,
    pub experiences: u64,
    pub education: u64,
    pub skills: u64,
    pub awards: u64,
    pub messages: u64,
    pub unread: u64,
}
