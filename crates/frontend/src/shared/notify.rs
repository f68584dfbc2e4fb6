/// Блокирующее уведомление пользователя
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(win) => {
                let _ = win.alert_with_message(message);
            }
            None => log::warn!("no window for alert: {}", message),
        }
    }
}
