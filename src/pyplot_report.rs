//! Pyplot Report Generator
//!
//! Turns collected timing series into a matplotlib/pyplot script. The
//! script is accumulated in a string buffer, one benchmark run per subplot,
//! and rendered once at the end, so stdout carries a program that can be
//! piped straight into a Python interpreter.
//!
//! Emission order per run: subplot selection, axis preamble, title, one
//! plot command per algorithm series, legend.

use crate::benchmark::RunResult;
use std::fmt::Write;

/// Builder for the plot script. Created with the figure header already
/// written; finished with the layout/show trailer.
pub struct PlotScript {
    out: String,
}

impl PlotScript {
    pub fn new() -> Self {
        let mut out = String::new();
        writeln!(out, "import matplotlib.pyplot as plt").unwrap();
        writeln!(out, "plt.figure(figsize=(12, 8))").unwrap();
        PlotScript { out }
    }

    /// Emit one benchmark run into its subplot.
    pub fn add_run(&mut self, run: &RunResult) {
        self.select_subplot(run.slot);
        self.preamble();
        self.set_title(&run.label);
        self.plot_series(&run.series);
        self.legend(&run.names);
    }

    /// Select the quadrant the following commands draw into.
    pub fn select_subplot(&mut self, slot: u32) {
        writeln!(self.out, "plt.subplot(2, 2, {})", slot).unwrap();
    }

    // Timing curves span several orders of magnitude, so the y axis is
    // log-scaled.
    fn preamble(&mut self) {
        writeln!(self.out, "plt.yscale('log')").unwrap();
        writeln!(self.out, "plt.grid(True)").unwrap();
    }

    pub fn set_title(&mut self, title: &str) {
        writeln!(self.out, "plt.title('{}')", escape_quotes(title)).unwrap();
    }

    /// One plot command per series; values are elapsed nanoseconds, the x
    /// axis is the sample index.
    pub fn plot_series(&mut self, series: &[Vec<u64>]) {
        for timings in series {
            let values: Vec<String> = timings.iter().map(u64::to_string).collect();
            writeln!(self.out, "plt.plot([{}])", values.join(", ")).unwrap();
        }
    }

    pub fn legend(&mut self, names: &[&str]) {
        let quoted: Vec<String> = names
            .iter()
            .map(|name| format!("'{}'", escape_quotes(name)))
            .collect();
        writeln!(self.out, "plt.legend([{}])", quoted.join(", ")).unwrap();
    }

    /// Append the trailer and return the finished script text.
    pub fn finish(mut self) -> String {
        writeln!(self.out, "plt.tight_layout()").unwrap();
        writeln!(self.out, "plt.show()").unwrap();
        self.out
    }
}

impl Default for PlotScript {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape single quotes for embedding in a Python string literal.
fn escape_quotes(s: &str) -> String {
    s.replace('\'', "\\'")
}
