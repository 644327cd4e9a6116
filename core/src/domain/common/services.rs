use crate::domain::recipe::ports::LLMClient;

/// Holds the collaborators every domain service implementation needs.
///
/// Built once at startup and shared read-only between requests.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
