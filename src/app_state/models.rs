use crate::env_config::models::app_setting::AppSettings;
use crate::services::practicum::client::TraitHomeworkApi;
use crate::services::telegram::bot::TraitMessenger;

use std::sync::Arc;

pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub homework_api: Arc<dyn TraitHomeworkApi + Send + Sync>,
    pub messenger: Arc<dyn TraitMessenger + Send + Sync>,
}

impl AppState {
    pub fn new(
        settings: Arc<AppSettings>,
        homework_api: Arc<dyn TraitHomeworkApi + Send + Sync>,
        messenger: Arc<dyn TraitMessenger + Send + Sync>,
    ) -> Self {
        Self {
            settings,
            homework_api,
            messenger,
        }
    }
}
