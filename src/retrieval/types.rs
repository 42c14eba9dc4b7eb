use super::LlmError;

/// Text-generation client abstraction (allows mocking).
///
/// One blocking call: a system instruction and a user prompt in, the
/// completion text out.
pub trait LlmClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Shared clients, so a caller can keep a handle after handing one to a retriever.
impl<T: LlmClient + ?Sized> LlmClient for std::sync::Arc<T> {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        (**self).generate(system, prompt)
    }
}
