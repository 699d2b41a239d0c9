mod clipboard_sink;
mod pointer_locator;
mod screen_capturer;

pub use clipboard_sink::ClipboardSink;
pub use pointer_locator::PointerLocator;
pub use screen_capturer::ScreenCapturer;
