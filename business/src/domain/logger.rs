/// Logging port used by the use cases.
///
/// Implemented in `infrastructure/logger`; tests plug in a mock.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
