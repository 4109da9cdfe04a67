// charity-race-service/src/services/notification_service.rs

use futures::future::{ready, BoxFuture, FutureExt};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationOutcome {
    pub success: bool,
}

// Outgoing-mail capability. Delivery is fire-and-forget: implementations
// resolve to an outcome and must never touch team state.
pub trait Notifier: Send + Sync {
    fn notify(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
        link: &str,
    ) -> BoxFuture<'static, NotificationOutcome>;
}

// Stub transport: writes the mail to the log and reports success. A real
// email service slots in behind the same trait.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
        link: &str,
    ) -> BoxFuture<'static, NotificationOutcome> {
        info!("📧 Email to: {}", recipient);
        info!("   Subject: {}", subject);
        info!("   Message: {}", message);
        info!("   Link: {}", link);

        ready(NotificationOutcome { success: true }).boxed()
    }
}
