use progress_meter::meter::EraseMode;
use progress_meter::{Clock, Kind, Meter, MeterBuilder};
use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

// Common test constants
pub const FRAME: Duration = Duration::from_millis(250);
pub const HALF_FRAME: Duration = Duration::from_millis(125);
pub const TEST_LABEL: &str = "downloading";
pub const TEST_RIGHT_LABEL: &str = "linux.tar.gz";

static TRACING: Once = Once::new();

/// Installs a test subscriber once, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// === Clock Helpers ===

/// A clock that only moves when the test says so
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Starts well after `Instant::now()` so the clock can be rewound
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now() + Duration::from_secs(60))),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn rewind(&self, by: Duration) {
        *self.now.lock().unwrap() -= by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

// === Meter Creation Helpers ===

/// Creates a builder writing into memory and driven by the returned clock
pub fn create_test_builder(kind: Kind) -> (MeterBuilder<'static, Vec<u8>>, ManualClock) {
    init_tracing();
    let clock = ManualClock::new();
    let builder = MeterBuilder::new(kind)
        .writer(Vec::new())
        .clock(clock.clone());
    (builder, clock)
}

/// Creates a meter without labels writing into memory
pub fn create_test_meter(kind: Kind, max_value: u64) -> (Meter<'static, Vec<u8>>, ManualClock) {
    let (builder, clock) = create_test_builder(kind);
    let meter = builder
        .max_value(max_value)
        .build()
        .expect("Failed to build test meter");
    (meter, clock)
}

/// Creates a meter with both labels writing into memory
pub fn create_labeled_test_meter(
    kind: Kind,
    max_value: u64,
) -> (Meter<'static, Vec<u8>>, ManualClock) {
    let (builder, clock) = create_test_builder(kind);
    let meter = builder
        .max_value(max_value)
        .label(TEST_LABEL)
        .right_label(TEST_RIGHT_LABEL)
        .build()
        .expect("Failed to build test meter");
    (meter, clock)
}

/// Creates a meter using ANSI erase sequences
pub fn create_ansi_test_meter(kind: Kind, max_value: u64) -> (Meter<'static, Vec<u8>>, ManualClock) {
    let (builder, clock) = create_test_builder(kind);
    let meter = builder
        .max_value(max_value)
        .erase_mode(EraseMode::Ansi)
        .build()
        .expect("Failed to build test meter");
    (meter, clock)
}

// === Output Helpers ===

/// Drains everything the meter wrote so far
pub fn take_output(meter: &mut Meter<'_, Vec<u8>>) -> String {
    let bytes = std::mem::take(meter.get_mut());
    String::from_utf8(bytes).expect("Meter output is not UTF-8")
}

/// `n` backspace characters
pub fn backspaces(n: usize) -> String {
    "\x08".repeat(n)
}

/// `n` spaces
pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Applies backspace-mode output to a single line, the way a terminal would
pub fn screen(output: &str) -> String {
    let mut line: Vec<char> = Vec::new();
    let mut cursor: usize = 0;
    for c in output.chars() {
        match c {
            '\x08' => cursor = cursor.saturating_sub(1),
            '\r' => cursor = 0,
            '\n' => break,
            c => {
                if cursor < line.len() {
                    line[cursor] = c;
                } else {
                    line.push(c);
                }
                cursor += 1;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

// === Assertion Helpers ===

/// Asserts that an update produced no output at all
pub fn assert_no_output(meter: &mut Meter<'_, Vec<u8>>) {
    let output = take_output(meter);
    assert!(output.is_empty(), "Expected no output, got {:?}", output);
}

/// Asserts how many columns an update moved back over before rewriting
pub fn assert_erase_width(output: &str, expected: usize) {
    let erased = output.chars().take_while(|c| *c == '\x08').count();
    assert_eq!(erased, expected, "Unexpected erase width in {:?}", output);
}
