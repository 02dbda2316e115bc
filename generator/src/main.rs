use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::ico::{IcoBuilder, DIRECTORY_BITS_PER_PIXEL};

mod error;
mod ico;
mod output;

const OUTPUT_FILE: &str = "favicon.ico";

fn main() {
    // Set up logging using tracing, stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let builder = IcoBuilder::new();
    let payload = builder.payload();
    if payload.declared_bit_count() != DIRECTORY_BITS_PER_PIXEL {
        tracing::debug!(
            "Directory entry declares {} bpp, embedded {}x{} bitmap declares {} bpp",
            DIRECTORY_BITS_PER_PIXEL,
            payload.declared_width(),
            payload.declared_height(),
            payload.declared_bit_count()
        );
    }

    let bytes = builder.build();

    if let Err(err) = output::write(OUTPUT_FILE, &bytes) {
        tracing::error!("Failed to create {}: {}", OUTPUT_FILE, err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    println!("{} created", OUTPUT_FILE);
}
