use crate::{
    domain::common::{PantryChefConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type PantryChefService = Service<GeminiLLMClient>;

pub fn create_service(config: PantryChefConfig) -> Result<PantryChefService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(llm_client))
}
