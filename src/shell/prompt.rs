/// Typed console input with retry-until-valid semantics
///
/// Every reader writes its prompt, reads one line and either returns the
/// parsed value or prints a notice and asks again. Malformed input never
/// escapes as an error; only I/O failures and a closed stream do.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::domain::{AnswerMode, YesNo};
use crate::shell::ShellError;

pub const EMPTY_INPUT: &str = "Input cannot be empty.";
pub const INVALID_INTEGER: &str = "Please enter a valid non-negative integer.";
pub const INVALID_NUMBER: &str = "Please enter a valid non-negative number.";
pub const INVALID_ANSWER: &str = "Please enter 'yes' or 'no'.";

/// Console reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    answer_mode: AnswerMode,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, answer_mode: AnswerMode) -> Self {
        Self {
            reader,
            writer,
            answer_mode,
        }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write one line of output
    pub async fn say(&mut self, text: &str) -> Result<(), ShellError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    /// Write a prompt and read one raw line
    ///
    /// Only the line terminator is removed; the caller decides about
    /// whitespace. Bytes that are not valid UTF-8 are replaced rather than
    /// rejected, so a garbled line is just another invalid answer.
    pub async fn ask(&mut self, prompt: &str) -> Result<String, ShellError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(ShellError::InputClosed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Keep asking until `parse` accepts the input
    async fn ask_until<T>(
        &mut self,
        prompt: &str,
        notice: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ShellError> {
        loop {
            let input = self.ask(prompt).await?;
            match parse(&input) {
                Some(value) => return Ok(value),
                None => {
                    debug!("Rejected input {:?} for prompt {:?}", input, prompt.trim());
                    self.say(notice).await?;
                }
            }
        }
    }

    /// Non-empty text, trimmed
    pub async fn read_text(&mut self, prompt: &str) -> Result<String, ShellError> {
        self.ask_until(prompt, EMPTY_INPUT, |input| {
            let trimmed = input.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .await
    }

    /// Non-negative whole number
    pub async fn read_count(&mut self, prompt: &str) -> Result<u32, ShellError> {
        self.ask_until(prompt, INVALID_INTEGER, |input| input.trim().parse::<u32>().ok())
            .await
    }

    /// Finite, non-negative number
    pub async fn read_measure(&mut self, prompt: &str) -> Result<f64, ShellError> {
        self.ask_until(prompt, INVALID_NUMBER, |input| {
            input
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
        })
        .await
    }

    /// "yes" or "no", case-insensitive, interpreted under the answer mode
    pub async fn read_flag(&mut self, prompt: &str) -> Result<bool, ShellError> {
        let mode = self.answer_mode;
        self.ask_until(prompt, INVALID_ANSWER, |input| {
            input.parse::<YesNo>().ok().map(|answer| answer.to_bool(mode))
        })
        .await
    }
}
