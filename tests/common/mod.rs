#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Once;

use richtext::{Font, MonospaceMetrics, Rgba, StyledText};
use tracing::Level;

static LOGGING: Once = Once::new();

/// Route `tracing` output from the library into the test harness.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// Half-width columns: a 20px font gives 10x20 narrow characters.
pub fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::default()
}

pub fn mono(pixel_size: u16) -> Font {
    Font::new("Mono", pixel_size)
}

/// Black text in a 20px monospace font, 10px per narrow character.
pub fn text(s: &str) -> StyledText {
    StyledText::with_text(s, Rgba::BLACK, &mono(20), &metrics())
}

/// Plain text of every line.
pub fn plain(lines: &[StyledText]) -> Vec<String> {
    lines.iter().map(StyledText::plain_text).collect()
}
