use crate::domain::ports::Notifier;

/// Terminal notifier: success to stdout, errors to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, message: &str) {
        println!("✅ Success! {}", message);
    }

    fn notify_error(&self, message: &str) {
        eprintln!("❌ Error: {}", message);
    }
}
