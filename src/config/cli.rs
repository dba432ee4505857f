use crate::domain::ports::Confirmer;
use dialoguer::Confirm;

/// Terminal yes/no prompt. A prompt that cannot be shown counts as "no".
#[derive(Debug, Clone)]
pub struct DialoguerConfirmer {
    default_answer: bool,
}

impl DialoguerConfirmer {
    pub fn new(default_answer: bool) -> Self {
        Self { default_answer }
    }
}

impl Confirmer for DialoguerConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        match Confirm::new()
            .with_prompt(message)
            .default(self.default_answer)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("confirmation prompt failed, treating as no: {}", e);
                false
            }
        }
    }
}
