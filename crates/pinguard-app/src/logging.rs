use pinguard_domain::log::LogSink;

/// Forwards rule output to `tracing` under the `pinguard::rule` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&mut self, message: &str) {
        tracing::info!(target: "pinguard::rule", "{message}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "pinguard::rule", "{message}");
    }
}
