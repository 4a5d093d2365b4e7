//! Tab-indented debug output
//!
//! Entities echo their fields as one text block per entity:
//!
//! ```text
//! <GHG name="CO2">
//!     <unit>MTC</unit>
//!     <emission>12.5</emission>
//! </GHG>
//! ```

use std::fmt::Display;
use std::io::{self, Write};

pub struct DebugWriter<'a, W: Write> {
    out: &'a mut W,
    indent: usize,
}

impl<'a, W: Write> DebugWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, indent: 0 }
    }

    /// Start nested output at a given depth.
    pub fn with_indent(out: &'a mut W, indent: usize) -> Self {
        Self { out, indent }
    }

    fn write_tabs(&mut self) -> io::Result<()> {
        for _ in 0..self.indent {
            self.out.write_all(b"\t")?;
        }
        Ok(())
    }

    pub fn open(&mut self, tag: &str, name: &str) -> io::Result<()> {
        self.write_tabs()?;
        writeln!(self.out, "<{} name=\"{}\">", tag, name)?;
        self.indent += 1;
        Ok(())
    }

    pub fn close(&mut self, tag: &str) -> io::Result<()> {
        self.indent = self.indent.saturating_sub(1);
        self.write_tabs()?;
        writeln!(self.out, "</{}>", tag)
    }

    pub fn element(&mut self, name: &str, value: impl Display) -> io::Result<()> {
        self.write_tabs()?;
        writeln!(self.out, "<{}>{}</{}>", name, value, name)
    }

    /// Element tagged with the calendar year it applies to.
    pub fn element_for_year(&mut self, name: &str, value: impl Display, year: i32) -> io::Result<()> {
        self.write_tabs()?;
        writeln!(self.out, "<{} year=\"{}\">{}</{}>", name, year, value, name)
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_block() {
        let mut out = Vec::new();
        {
            let mut writer = DebugWriter::new(&mut out);
            writer.open("grade", "grade 1").unwrap();
            writer.element("available", 10.0).unwrap();
            writer.element_for_year("totalcost", 2.5, 1990).unwrap();
            writer.close("grade").unwrap();
            assert_eq!(writer.indent(), 0);
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "<grade name=\"grade 1\">\n\t<available>10</available>\n\t<totalcost year=\"1990\">2.5</totalcost>\n</grade>\n"
        );
    }

    #[test]
    fn test_starts_at_given_depth() {
        let mut out = Vec::new();
        DebugWriter::with_indent(&mut out, 2)
            .element("unit", "EJ")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\t\t<unit>EJ</unit>\n");
    }
}
