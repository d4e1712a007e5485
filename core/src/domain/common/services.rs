use crate::domain::diagnosis::ports::LLMClient;

/// Holds the outbound adapters the domain services run against.
#[derive(Clone, Debug)]
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

    pub fn llm_client(&self) -> &LLM {
        &self.llm_client
    }
}
