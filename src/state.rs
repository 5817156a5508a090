use crate::config::SiteConfig;
use crate::counter::VisitCounter;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub counter: Arc<Mutex<VisitCounter>>,
}

impl AppState {
    pub fn new(config: SiteConfig, counter: VisitCounter) -> Self {
        Self {
            config: Arc::new(config),
            counter: Arc::new(Mutex::new(counter)),
        }
    }
}
