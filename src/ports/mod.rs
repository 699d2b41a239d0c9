mod arboard_clipboard;
mod mouse_position_provider;
mod xcap_screen_capturer;

pub use arboard_clipboard::ArboardClipboard;
pub use mouse_position_provider::SystemPointerLocator;
pub use xcap_screen_capturer::XcapScreenCapturer;
