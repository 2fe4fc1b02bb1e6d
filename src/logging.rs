// src/logging.rs
//! Log records go to stderr so they never interleave with prompts or results.
//!
//! `RUST_LOG` takes precedence over `--log-level`:
//! ```bash
//! RUST_LOG=debug prime_range
//! RUST_LOG=prime_range::input=debug prime_range
//! ```

use std::io::Write;
use std::sync::Once;

use env_logger::{Builder, Target};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder
            .filter_level(level)
            .parse_default_env()
            .target(Target::Stderr)
            .format(|buf, record| {
                // Compact time format: HH:MM:SS.mmm
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });

        // Another logger may already be installed by an embedding test harness.
        let _ = builder.try_init();
    });
}
