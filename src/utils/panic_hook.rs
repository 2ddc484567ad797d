use std::panic;
use leptos::logging::{error, log};

/// Installs a panic hook that forwards to `console_error_panic_hook` and adds
/// a hint when the panic comes from a disposed reactive owner.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            error!("[PANIC] A signal was used after its component was unmounted.");
            error!("[PANIC] Check async actions that outlive the product page.");
        }
    }));
}

/// Call from the hydrate/csr entry points.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
