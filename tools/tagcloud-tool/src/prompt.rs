use std::io::{self, BufRead, Write};

use tagcloud_common::ranking::validate_count;

/// Line-oriented questions on a reader/writer pair (stdin/stdout in practice).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and return the next line, trimmed.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a non-empty answer, repeating the question until one is given.
    pub fn ask_non_empty(&mut self, question: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask how many words the cloud should hold, re-asking until `1..=unique_words`.
    pub fn ask_count(&mut self, unique_words: usize) -> io::Result<usize> {
        writeln!(
            self.output,
            "Enter the amount of words from this file that you would like to be included in the generated tag cloud."
        )?;
        let mut question = format!(
            "(must be a positive integer that is less than or equal to {}): ",
            unique_words
        );
        loop {
            let answer = self.ask(&question)?;
            match answer.parse::<usize>() {
                Ok(n) => match validate_count(n, unique_words) {
                    Ok(n) => return Ok(n),
                    Err(e) => tracing::debug!("rejected count: {}", e),
                },
                Err(e) => tracing::debug!("rejected count {:?}: {}", answer, e),
            }
            question = format!(
                "ERROR: invalid input. Enter a positive integer that is less than or equal to {}: ",
                unique_words
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_answer() {
        let mut p = prompter("  notes.txt \n");
        assert_eq!(p.ask("file: ").unwrap(), "notes.txt");
        assert_eq!(String::from_utf8(p.output).unwrap(), "file: ");
    }

    #[test]
    fn ask_eof_is_error() {
        let mut p = prompter("");
        let err = p.ask("file: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ask_non_empty_skips_blank_lines() {
        let mut p = prompter("\n   \nout.html\n");
        assert_eq!(p.ask_non_empty("out: ").unwrap(), "out.html");
    }

    #[test]
    fn ask_count_accepts_valid() {
        let mut p = prompter("3\n");
        assert_eq!(p.ask_count(5).unwrap(), 3);
    }

    #[test]
    fn ask_count_retries_until_valid() {
        let mut p = prompter("0\n9\nlots\n-2\n5\n");
        assert_eq!(p.ask_count(5).unwrap(), 5);
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("ERROR: invalid input.").count(), 4);
    }

    #[test]
    fn ask_count_gives_up_at_eof() {
        let mut p = prompter("0\n");
        assert!(p.ask_count(2).is_err());
    }
}
