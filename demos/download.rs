//! Example driving all three meters from a simulated download loop.
//!
//! Run with `RUST_LOG=progress_meter=trace` to see the redraw decisions on
//! stderr while the meters draw on stdout.

use color_eyre::Result;
use indicatif::HumanBytes;
use progress_meter::{Kind, MeterBuilder};
use rand::Rng;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOTAL_BYTES: u64 = 2560 * 1024;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut rng = rand::rng();
    let size_label = format!("linux.tar.gz ({})", HumanBytes(TOTAL_BYTES));

    // Bar: the usual file download
    let mut bar = MeterBuilder::new(Kind::Bar)
        .max_value(TOTAL_BYTES)
        .label("downloading")
        .right_label(size_label.as_str())
        .build()?;
    bar.show()?;
    let mut received = 0;
    while received < TOTAL_BYTES {
        received += rng.random_range(8 * 1024..64 * 1024);
        bar.update(received)?;
        thread::sleep(Duration::from_millis(20));
    }
    bar.finish()?;

    // Percent: stops short of the end, finish still shows 100%
    let mut percent = MeterBuilder::new(Kind::Percent)
        .max_value(TOTAL_BYTES)
        .label("unpacking")
        .right_label("done")
        .build()?;
    percent.show()?;
    let mut unpacked = 0;
    while unpacked < TOTAL_BYTES - 64 * 1024 {
        unpacked += rng.random_range(4 * 1024..32 * 1024);
        percent.update(unpacked)?;
        thread::sleep(Duration::from_millis(20));
    }
    percent.finish()?;

    // Spinner: work of unknown length
    let mut spinner = MeterBuilder::new(Kind::Spinner)
        .label("verifying")
        .right_label("(please wait)")
        .build()?;
    spinner.show()?;
    for _ in 0..100 {
        spinner.update(0)?;
        thread::sleep(Duration::from_millis(25));
    }
    spinner.finish()?;

    println!("{} received", HumanBytes(received));
    Ok(())
}
