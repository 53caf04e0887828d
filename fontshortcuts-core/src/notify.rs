use log::error;

/// Where user-facing error messages go
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);
}

/// Notifier that reports through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_error(&self, message: &str) {
        error!("{}", message);
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }
}
