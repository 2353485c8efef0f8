use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` backed by `tracing`. Every event carries the component that emitted it.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("storefront")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_storefront_component() {
        assert_eq!(TracingLogger::default().component(), "storefront");
    }

    #[test]
    fn should_log_without_subscriber() {
        let logger = TracingLogger::new("cart");
        logger.info("no subscriber installed");
        logger.debug("still fine");
        assert_eq!(logger.component(), "cart");
    }
}
