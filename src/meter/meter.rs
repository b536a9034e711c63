//! The progress meter and its lifecycle.
//!
//! # Examples
//!
//! ```rust
//! use progress_meter::{Kind, MeterBuilder};
//!
//! # fn main() -> progress_meter::Result<()> {
//! let mut meter = MeterBuilder::new(Kind::Percent)
//!     .writer(Vec::new())
//!     .max_value(1024)
//!     .label("processing")
//!     .build()?;
//!
//! meter.show()?;
//! for done in (0..=1024).step_by(64) {
//!     meter.update(done)?;
//! }
//! meter.finish()?;
//!
//! let output = String::from_utf8_lossy(meter.get_ref());
//! assert!(output.starts_with("processing   0% "));
//! assert!(output.ends_with("100% \n"));
//! # Ok(())
//! # }
//! ```

use super::config::MeterConfig;
use crate::error::{Error, Result};
use crate::redraw::terminal::Terminal;
use crate::redraw::{Clock, RedrawController, SystemClock};
use crate::render::{self, spinner, Kind};
use crate::utils::segment_width;

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::time::Instant;
use tracing::{debug, trace};

/// A single-line progress indicator.
///
/// A meter is created for one [`Kind`], shown once, updated as work
/// progresses and finished when the work is done:
///
/// ```rust,no_run
/// use progress_meter::{Kind, Meter};
///
/// # fn main() -> progress_meter::Result<()> {
/// let mut meter = Meter::new(Kind::Bar);
/// meter.set_max_value(2560)?;
/// meter.set_label("downloading");
/// meter.show()?;
/// for chunk in 1..=10 {
///     meter.update(chunk * 256)?;
/// }
/// meter.finish()?;
/// # Ok(())
/// # }
/// ```
///
/// Updates are cheap when nothing needs drawing: they are throttled to the
/// configured frame rate and frames identical to the one on screen are never
/// written.
pub struct Meter<'a, W: Write = Stdout> {
    kind: Kind,
    value: u64,
    max_value: u64,
    /// Spinner animation phase.
    phase: usize,
    label: Option<Cow<'a, str>>,
    right_label: Option<Cow<'a, str>>,
    config: MeterConfig,
    redraw: RedrawController,
    terminal: Terminal<W>,
    clock: Box<dyn Clock>,
    visible: bool,
}

impl<W: Write> fmt::Debug for Meter<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meter")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("max_value", &self.max_value)
            .field("phase", &self.phase)
            .field("label", &self.label)
            .field("right_label", &self.right_label)
            .field("config", &self.config)
            .field("redraw", &self.redraw)
            .field("visible", &self.visible)
            .finish()
    }
}

impl Meter<'static, Stdout> {
    /// Creates a meter drawing on standard output with the default
    /// configuration.
    ///
    /// Bar and percentage meters still need a maximum value before they can
    /// be shown, see [`Meter::set_max_value`].
    pub fn new(kind: Kind) -> Self {
        Self::from_parts(
            kind,
            MeterConfig::default(),
            io::stdout(),
            Box::new(SystemClock),
        )
    }
}

impl<'a, W: Write> Meter<'a, W> {
    /// Creates a meter from its parts; the configuration must be valid.
    pub(crate) fn from_parts(
        kind: Kind,
        config: MeterConfig,
        writer: W,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            value: 0,
            max_value: 0,
            phase: 0,
            label: None,
            right_label: None,
            redraw: RedrawController::new(config.frame_interval()),
            terminal: Terminal::new(writer, config.erase_mode),
            config,
            clock,
            visible: false,
        }
    }

    /// Gets the indicator kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the current value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Gets the maximum value.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Gets the left label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Gets the right label.
    pub fn right_label(&self) -> Option<&str> {
        self.right_label.as_deref()
    }

    /// Gets the configuration.
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Gets whether the meter is currently on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Gets the indicator text currently on screen.
    pub fn rendered(&self) -> &str {
        self.redraw.snapshot()
    }

    /// Gets a reference to the output stream.
    pub fn get_ref(&self) -> &W {
        self.terminal.get_ref()
    }

    /// Gets a mutable reference to the output stream.
    ///
    /// Writing to it while the meter is visible corrupts the line.
    pub fn get_mut(&mut self) -> &mut W {
        self.terminal.get_mut()
    }

    /// Consumes the meter, returning the output stream.
    pub fn into_inner(self) -> W {
        self.terminal.into_inner()
    }

    /// Set the current value without drawing anything.
    ///
    /// Spinners keep no value; for them this has no visible effect.
    pub fn set_value(&mut self, value: u64) {
        self.value = value;
    }

    /// Set the maximum value.
    ///
    /// Bar and percentage meters reject a maximum of zero.
    pub fn set_max_value(&mut self, max_value: u64) -> Result<()> {
        if self.kind.needs_max_value() && max_value == 0 {
            return Err(Error::InvalidMaxValue(max_value));
        }
        self.max_value = max_value;
        Ok(())
    }

    /// Set the text printed left of the indicator.
    ///
    /// Takes effect the next time the meter is shown.
    pub fn set_label(&mut self, label: impl Into<Cow<'a, str>>) {
        self.label = Some(label.into());
    }

    /// Set the text printed right of the indicator.
    ///
    /// Takes effect the next time the meter is shown.
    pub fn set_right_label(&mut self, right_label: impl Into<Cow<'a, str>>) {
        self.right_label = Some(right_label.into());
    }

    fn check_max_value(&self) -> Result<()> {
        if self.kind.needs_max_value() && self.max_value == 0 {
            return Err(Error::InvalidMaxValue(self.max_value));
        }
        Ok(())
    }

    fn right_label_width(&self) -> usize {
        self.right_label.as_deref().map_or(0, segment_width)
    }

    /// Render the indicator text for the current state, advancing the
    /// spinner by one phase.
    fn render_frame(&mut self) -> String {
        if self.kind == Kind::Spinner {
            self.phase = spinner::advance(self.phase, self.config.spinner_glyphs.len());
        }
        render::render_frame(
            self.kind,
            self.value,
            self.max_value,
            self.phase,
            &self.config,
        )
    }

    fn write_right_label(&mut self) -> io::Result<()> {
        if let Some(right_label) = &self.right_label {
            self.terminal.write_str(right_label)?;
            self.terminal.write_str(" ")?;
        }
        Ok(())
    }

    /// Print the meter: left label, first frame, right label.
    ///
    /// Showing a meter that is already visible does nothing.
    pub fn show(&mut self) -> Result<()> {
        if self.visible {
            return Ok(());
        }
        self.check_max_value()?;

        let text = self.render_frame();

        if let Some(label) = &self.label {
            self.terminal.write_str(label)?;
            self.terminal.write_str(" ")?;
        }
        self.terminal.write_str(&text)?;
        self.terminal.write_str(" ")?;
        self.write_right_label()?;
        self.terminal.flush()?;

        debug!(kind = %self.kind, frame = %text, "meter shown");

        let now = self.clock.now();
        self.redraw.commit(text, now);
        self.visible = true;
        Ok(())
    }

    /// Report progress and redraw the indicator if due.
    ///
    /// Bar and percentage meters store `value` right away, even when no frame
    /// is drawn, so the next frame always reflects the latest value. Spinners
    /// ignore `value` and advance one phase per drawn frame.
    ///
    /// A meter that is not visible yet is shown instead. After a failed
    /// write the meter is no longer visible, so the next update shows it again.
    pub fn update(&mut self, value: u64) -> Result<()> {
        if self.kind != Kind::Spinner {
            self.value = value;
        }
        self.check_max_value()?;

        if !self.visible {
            return self.show();
        }

        let now = self.clock.now();
        if !self.redraw.frame_due(now) {
            trace!(kind = %self.kind, value, "frame interval not elapsed, skipping redraw");
            return Ok(());
        }

        // the spinner keeps its new phase even when nothing gets printed
        let text = self.render_frame();
        if !self.redraw.is_changed(&text) {
            trace!(kind = %self.kind, value, "frame unchanged, skipping redraw");
            return Ok(());
        }

        self.redraw_line(text, now)
    }

    /// Replace the indicator and right label on screen with `text`.
    fn redraw_line(&mut self, text: String, now: Instant) -> Result<()> {
        let erase = self.redraw.segment_width() + self.right_label_width();

        let mut line = String::with_capacity(text.len() + 1 + erase);
        line.push_str(&text);
        line.push(' ');
        if let Some(right_label) = &self.right_label {
            line.push_str(right_label);
            line.push(' ');
        }

        if let Err(err) = self
            .terminal
            .rewrite(erase, &line)
            .and_then(|()| self.terminal.flush())
        {
            self.abandon_line(&err);
            return Err(err.into());
        }

        trace!(kind = %self.kind, frame = %text, erase, "meter redrawn");

        self.redraw.commit(text, now);
        Ok(())
    }

    /// Forget what is on screen after a failed write.
    ///
    /// The cursor position is unknown at that point, so the meter counts as
    /// hidden and the next update shows it again from the cursor.
    fn abandon_line(&mut self, err: &io::Error) {
        debug!(kind = %self.kind, error = %err, "write failed, meter line abandoned");
        self.redraw.clear();
        self.visible = false;
    }

    /// Render the final state and end the line.
    ///
    /// - a bar is erased, leaving its place blank;
    /// - a percentage always ends at `100%`, whatever value it last got;
    /// - a spinner's glyph is erased.
    ///
    /// The right label, if any, is printed once more before the newline.
    /// Kind, value and labels are kept, so the meter can be shown again.
    /// A meter whose final frame could not be written is left hidden too.
    pub fn finish(&mut self) -> Result<()> {
        if !self.visible {
            self.show()?;
        }

        if let Err(err) = self.draw_final_frame() {
            self.abandon_line(&err);
            return Err(err.into());
        }

        debug!(kind = %self.kind, value = self.value, "meter finished");

        self.redraw.clear();
        self.visible = false;
        Ok(())
    }

    fn draw_final_frame(&mut self) -> io::Result<()> {
        self.terminal.blank(self.right_label_width())?;

        match self.kind {
            Kind::Bar | Kind::Spinner => {
                self.terminal.blank(self.redraw.segment_width())?;
            }
            Kind::Percent => {
                self.value = self.max_value;
                let text = self.render_frame();
                if self.redraw.is_changed(&text) {
                    let erase = self.redraw.segment_width();
                    self.terminal.rewrite(erase, &format!("{text} "))?;
                }
            }
        }

        if let Some(right_label) = &self.right_label {
            self.terminal.write_str(right_label)?;
        }
        self.terminal.newline()?;
        self.terminal.flush()
    }

    /// Wipe the whole line, labels included, without ending it.
    ///
    /// The cursor is left at the start of the line.
    pub fn hide(&mut self) -> Result<()> {
        if !self.visible {
            return Ok(());
        }

        let cols = self.label.as_deref().map_or(0, segment_width)
            + self.redraw.segment_width()
            + self.right_label_width();
        self.terminal.clear_line(cols)?;
        self.terminal.flush()?;

        debug!(kind = %self.kind, "meter hidden");

        self.redraw.clear();
        self.visible = false;
        Ok(())
    }

    /// Rewind the value and spinner phase to the start.
    ///
    /// Nothing is written; hide or finish a visible meter first.
    pub fn reset(&mut self) {
        self.value = 0;
        self.phase = 0;
        self.redraw.clear();
        self.visible = false;
    }
}
