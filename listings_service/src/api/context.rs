use crate::config::Config;
use crate::domain::services::PropertyServiceImpl;
use crate::outbound::PropertiesPgStorage;
use std::sync::Arc;

/// Property search backed by Postgres
pub type PgPropertyService = PropertyServiceImpl<PropertiesPgStorage>;

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub property_service: Arc<PgPropertyService>,
}
