/// Blocking yes/no prompt consulted before destructive session changes.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Fixed answer, for `--yes` and unattended runs.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!(answer = self.0, "auto-answering '{}'", message);
        self.0
    }
}

/// Settings the front-ends read, whatever their source.
pub trait ConfigProvider {
    fn unit(&self) -> &str;
    fn decimals(&self) -> u32;
    fn confirm_message(&self) -> &str;
}
