use std::io;
use std::io::Write;

/// In-memory `Write` sink capturing PRN and trace output for assertions.
pub struct StringWriter {
    buffer: Vec<u8>,
}

impl Write for StringWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(data);
        Ok(data.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StringWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }
    pub fn get_string(&self) -> String {
        // PRN emits decimal digits and trace lines are hex, both ASCII
        String::from_utf8(self.buffer.clone()).expect("captured output is ASCII")
    }
}
