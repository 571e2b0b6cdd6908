/// RunLogger port for recording the progress of a run
///
/// Constructed once at start-up and handed to every component that reports
/// anything; there is no global logger.
pub trait RunLogger {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// Records a failure; used by `main` for the fatal error of a run
    fn error(&self, message: &str);
}

impl<T: RunLogger + ?Sized> RunLogger for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
