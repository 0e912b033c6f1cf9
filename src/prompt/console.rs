//! Console prompt
//!
//! A terminal rendition of a modal prompt: prints the title, the message as plain
//! text and the available actions, then blocks on a line of input.

use crate::prompt::{ModalPrompt, PromptChoice, PromptError, PromptIcon, PromptSpec, WindowOwner};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;
use textwrap::Options;

/// Column at which the message body is wrapped
pub(crate) const WRAP_COLUMN: usize = 76;

/// Modal prompt over a line-oriented reader and a writer
pub struct ConsolePrompt<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    /// Line prompt on stdin/stdout, for when they are not a terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsolePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner().expect("console mutex poisoned")
    }
}

impl<R, W> ModalPrompt for ConsolePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn show(&self, owner: Option<&WindowOwner>, spec: &PromptSpec) -> Result<PromptChoice, PromptError> {
        if spec.actions.is_empty() {
            return Err(PromptError::Unavailable("prompt has no actions".to_string()));
        }

        let mut guard = self.io.lock().expect("console mutex poisoned");
        let (input, output) = &mut *guard;

        if let Some(owner) = owner {
            tracing::debug!("Showing '{}' over {}", spec.title, owner.name);
        }

        write_prompt(output, spec)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // Closing the input is closing the window.
                writeln!(output)?;
                return Ok(PromptChoice::Cancel);
            }

            if let Some(choice) = match_choice(spec, &line) {
                return Ok(choice);
            }

            writeln!(output, "Please choose one of: {}", action_hints(spec))?;
        }
    }
}

fn write_prompt<W: Write>(output: &mut W, spec: &PromptSpec) -> io::Result<()> {
    write_notice(output, spec)?;
    writeln!(output, "{}", action_hints(spec))?;
    Ok(())
}

/// Title, rule, wrapped body, rule.
pub(crate) fn write_notice<W: Write>(output: &mut W, spec: &PromptSpec) -> io::Result<()> {
    let marker = match spec.icon {
        PromptIcon::Warning => "[!]",
    };

    writeln!(output)?;
    writeln!(output, "{marker} {}", spec.title)?;
    writeln!(output, "{}", "-".repeat(WRAP_COLUMN))?;
    for line in wrap_lines(&render_rich_text(&spec.body), WRAP_COLUMN) {
        writeln!(output, "{line}")?;
    }
    writeln!(output, "{}", "-".repeat(WRAP_COLUMN))?;
    Ok(())
}

fn action_hints(spec: &PromptSpec) -> String {
    spec.actions
        .iter()
        .map(|action| match action.label.chars().next() {
            Some(key) => format!("[{}] {}", key.to_lowercase(), action.label),
            None => format!("{:?}", action.choice),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// First action whose label, or its first letter, matches the input.
fn match_choice(spec: &PromptSpec, input: &str) -> Option<PromptChoice> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    spec.actions
        .iter()
        .find(|action| {
            let label = action.label.to_lowercase();
            label == input || label.chars().next().map(String::from) == Some(input.clone())
        })
        .map(|action| action.choice)
}

/// Accumulates rendered text with HTML whitespace rules.
#[derive(Default)]
struct TextBuilder {
    text: String,
    pending_space: bool,
}

impl TextBuilder {
    fn push_char(&mut self, ch: char) {
        if self.pending_space && !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.push_char(ch);
        }
    }

    fn push_break(&mut self) {
        self.pending_space = false;
        self.text.push('\n');
    }
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

/// Render an HTML fragment as plain text.
///
/// Whitespace collapses as in HTML; `<br>` and block-closing tags break lines.
/// Other markup is dropped.
pub fn render_rich_text(html: &str) -> String {
    let mut out = TextBuilder::default();
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut tag = String::new();
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                    tag.push(c);
                }
                let closing = tag.starts_with('/');
                let name: String = tag
                    .trim_start_matches('/')
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase();
                match name.as_str() {
                    "br" => out.push_break(),
                    "p" | "li" if closing => out.push_break(),
                    _ => {}
                }
            }
            '&' => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if name.len() > 8 || !(c.is_ascii_alphanumeric() || c == '#') {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                let decoded = if chars.peek() == Some(&';') {
                    decode_entity(&name)
                } else {
                    None
                };
                match decoded {
                    Some(c) => {
                        chars.next();
                        out.push_char(c);
                    }
                    None => {
                        out.push_char('&');
                        out.push_str(&name);
                    }
                }
            }
            c if c.is_whitespace() => out.pending_space = true,
            c => out.push_char(c),
        }
    }

    out.text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Word-wrap each line of `text` at `width` display columns.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width);
    text.lines()
        .flat_map(|paragraph| textwrap::wrap(paragraph, &options))
        .map(|line| line.into_owned())
        .collect()
}
