pub mod app_theme;
mod scanner_view;

pub use scanner_view::{Notice, ScannerMessage, ScannerView};
