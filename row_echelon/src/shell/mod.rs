pub mod reader;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{
    elimination::echelon_check::is_in_row_echelon_form,
    notation::TERMINATOR,
    pipeline::{reduce, Reduction},
};

use reader::BlockReader;

const GREETING: &str = "Hi, user!\n\
Enter matrix like this to invoke the algorithm:\n\
1 0 4 2,\n\
1 2 6 2,\n\
2 0 8 8,\n\
2 1 9 4;\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub greeting: bool,
    pub terminated_output: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            greeting: true,
            terminated_output: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Read-eval-print loop over terminated blocks. A rejected block is reported
/// and the loop moves on; only I/O failures end the session early.
pub struct Shell<R, W> {
    blocks: BlockReader<R>,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            blocks: BlockReader::new(input, TERMINATOR as u8),
            output,
            config,
        }
    }

    pub fn run(mut self) -> Result<SessionSummary> {
        if self.config.greeting {
            self.output
                .write_all(GREETING.as_bytes())
                .context("writing greeting")?;
            self.output.flush().context("flushing greeting")?;
        }
        let mut summary = SessionSummary::default();
        while let Some(block) = self.blocks.next() {
            let block = block.context("reading input block")?;
            match reduce(&block) {
                Ok(reduction) => {
                    self.write_result(&reduction)?;
                    summary.accepted += 1;
                }
                Err(err) => {
                    log::warn!("rejected submission: {err}");
                    write!(self.output, "\nAttempt eliminated with reason: {err}\n\n")
                        .context("writing rejection")?;
                    summary.rejected += 1;
                }
            }
            self.output.flush().context("flushing output")?;
        }
        Ok(summary)
    }

    fn write_result(&mut self, reduction: &Reduction) -> Result<()> {
        if !is_in_row_echelon_form(&reduction.matrix) {
            log::debug!("result keeps a degenerate column; not in strict row-echelon form");
        }
        write!(
            self.output,
            "\nResult is:\n{}\n\n",
            reduction.render(self.config.terminated_output)
        )
        .context("writing result")
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str, config: ShellConfig) -> (SessionSummary, String) {
        let mut output = Vec::new();
        let summary = Shell::new(Cursor::new(input), &mut output, config)
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    fn quiet() -> ShellConfig {
        ShellConfig {
            greeting: false,
            ..ShellConfig::default()
        }
    }

    #[test]
    fn prints_result_for_each_block() {
        let (summary, out) = session("2 1,\n4 5;\n1;", quiet());
        assert_eq!(
            summary,
            SessionSummary {
                accepted: 2,
                rejected: 0
            }
        );
        assert_eq!(out, "\nResult is:\n2 1,\n0 3\n\n\nResult is:\n1\n\n");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (summary, out) = session("1 a,\n2 3;\n1 2,\n3;\n1 0,\n0 1;", quiet());
        assert_eq!(
            summary,
            SessionSummary {
                accepted: 1,
                rejected: 2
            }
        );
        assert!(out.contains(
            "Attempt eliminated with reason: unable to convert value 'a' of cell [1, 0] to a number"
        ));
        assert!(out.contains(
            "Attempt eliminated with reason: matrix must be rectangular: row 1 has 1 cells, expected 2"
        ));
        assert!(out.ends_with("Result is:\n1 0,\n0 1\n\n"));
    }

    #[test]
    fn greeting_comes_first() {
        let (_, out) = session("", ShellConfig::default());
        assert_eq!(out, GREETING);
    }

    #[test]
    fn terminated_output_appends_terminator() {
        let config = ShellConfig {
            terminated_output: true,
            ..quiet()
        };
        let (_, out) = session("3 6,\n1 1;", config);
        assert_eq!(out, "\nResult is:\n1 1,\n0 3;\n\n");
    }

    #[test]
    fn blank_block_between_terminators_is_rejected() {
        let (summary, out) = session(";", quiet());
        assert_eq!(summary.rejected, 1);
        assert!(out.contains("matrix must have at least 1 row and 1 column"));
    }
}
