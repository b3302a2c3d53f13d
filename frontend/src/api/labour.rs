use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{ApiClient, FetchError, SummaryRecord};
use crate::utils::MonthKey;

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn monthly_summary_path(labour_id: &str, month: MonthKey) -> String {
    format!(
        "/api/labour/{}/monthly-summary?month={}",
        utf8_percent_encode(labour_id, PATH_SEGMENT),
        month
    )
}

impl ApiClient {
    pub async fn fetch_monthly_summary(
        &self,
        labour_id: &str,
        month: MonthKey,
    ) -> Result<SummaryRecord, FetchError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, monthly_summary_path(labour_id, month));
        log::debug!("fetching monthly summary from {url}");
        self.fetch_json(self.http_client().get(url)).await
    }
}
