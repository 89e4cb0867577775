use std::io::{self, BufRead};

/// Splits a byte stream into blocks ending in `terminator`.
pub struct BlockReader<R> {
    input: R,
    terminator: u8,
    finished: bool,
}

impl<R: BufRead> BlockReader<R> {
    pub fn new(input: R, terminator: u8) -> Self {
        Self {
            input,
            terminator,
            finished: false,
        }
    }
}

// the terminator itself is dropped from the yielded block. whatever follows the
// last terminator is only yielded if it holds more than whitespace.
impl<R: BufRead> Iterator for BlockReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut buf = Vec::new();
        if let Err(err) = self.input.read_until(self.terminator, &mut buf) {
            self.finished = true;
            return Some(Err(err));
        }
        if buf.last() == Some(&self.terminator) {
            buf.pop();
        } else {
            self.finished = true;
            if buf.iter().all(u8::is_ascii_whitespace) {
                return None;
            }
        }
        Some(String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
