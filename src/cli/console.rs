use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: one line in per prompt, whole lines out.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Next input line without its line ending, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print one line and flush, so prompts show before input is read.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Print pre-formatted text as is.
    pub fn write_block(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_eof() {
        let mut console = Console::new(Cursor::new("add\r\n\nlast"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("add".to_string()));
        assert_eq!(console.read_line().unwrap(), Some(String::new()));
        assert_eq!(console.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn say_appends_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        console.write_block("a\nb\n").unwrap();
        assert_eq!(console.output().as_slice(), b"hello\na\nb\n");
    }
}
