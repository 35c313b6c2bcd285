//! Report which values in a set of [`Optional`]s are present.
//!
//! ```
//! # use optional_core::{debug::Report, none, some};
//! let output = Report::new(String::new())
//!     .entry("name", &some("Lilly"))
//!     .entry("email", &none::<&str>())
//!     .finish();
//! assert_eq!("name: present \"Lilly\"\nemail: absent\n1 present, 1 absent\n", output);
//! ```
use std::fmt::{Debug, Result, Write};

use crate::Optional;

/// A single entry in a [`Report`].
pub trait DebugWriter {
    fn is_present(&self) -> bool;

    fn write(&self, output: &mut impl Write) -> Result;
}

impl<T: Debug> DebugWriter for Optional<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn write(&self, output: &mut impl Write) -> Result {
        match self.value() {
            Some(value) => write!(output, "present {value:?}"),
            None => write!(output, "absent"),
        }
    }
}

impl<W: DebugWriter + ?Sized> DebugWriter for &W {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn write(&self, output: &mut impl Write) -> Result {
        (**self).write(output)
    }
}

/// One line per entry, followed by a tally of present and absent entries.
pub struct Report<O> {
    output: O,
    present: usize,
    absent: usize,
}

impl<O: Write> Report<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            present: 0,
            absent: 0,
        }
    }

    pub fn entry(mut self, name: &str, item: impl DebugWriter) -> Self {
        match item.is_present() {
            true => self.present += 1,
            false => self.absent += 1,
        }

        let _ = write!(&mut self.output, "{name}: ");
        let _ = item.write(&mut self.output);
        let _ = writeln!(&mut self.output);
        self
    }

    pub fn present(&self) -> usize {
        self.present
    }

    pub fn absent(&self) -> usize {
        self.absent
    }

    /// Write the tally and return the output.
    pub fn finish(mut self) -> O {
        let _ = writeln!(&mut self.output, "{} present, {} absent", self.present, self.absent);
        self.output
    }
}
