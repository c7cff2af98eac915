// Where the page controller gets its system record from
use async_trait::async_trait;
use crate::client::{FetchError, SystemIntelClient};
use crate::models::SystemRecord;

#[async_trait]
pub trait SystemSource: Send + Sync {
    async fn fetch_system(&self, system_name: &str) -> Result<SystemRecord, FetchError>;
}

#[async_trait]
impl SystemSource for SystemIntelClient {
    async fn fetch_system(&self, system_name: &str) -> Result<SystemRecord, FetchError> {
        self.get_system(system_name).await
    }
}
