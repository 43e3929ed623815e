//! Fragment segmentation and classification
//!
//! Quoted history and signatures sit at the bottom of a reply, so lines are
//! walked bottom-up. Each line either extends the open fragment or closes it
//! and opens a new one. A fragment is classified the moment it closes, which
//! means fragments nearer the end of the body are classified first.

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::preprocess::normalize;
use crate::types::{Email, Fragment};
use regex::Regex;
use std::io::Read;
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

// Regex patterns

/// `--` or `__` rules, `-Name` sign-offs, and "Sent from my <1-3 words>"
static SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\s*--|\s*__|-[0-9A-Za-z_])|^Sent from my (?:\s*[0-9A-Za-z_]+){1,3}$",
    )
    .unwrap()
});

static QUOTE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^On.*wrote:$").unwrap());

/// Parse a body into classified fragments using the default configuration
pub fn parse(text: &str) -> Result<Email> {
    ReplyParser::default().parse(text)
}

/// Read a whole body from `reader` and parse it
pub fn parse_reader<R: Read>(reader: R) -> Result<Email> {
    ReplyParser::default().parse_reader(reader)
}

/// Parse a body and return only the visible reply text
pub fn extract_visible_reply(text: &str) -> Result<String> {
    ReplyParser::default().extract_visible_reply(text)
}

/// Reply parser bound to a [`ParserConfig`]
#[derive(Debug, Clone, Default)]
pub struct ReplyParser {
    config: ParserConfig,
}

impl ReplyParser {
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> Result<Email> {
        let normalized = normalize(text);
        let email = Segmenter::new(self.config.max_line_length).run(&normalized)?;

        debug!(
            fragments = email.len(),
            visible = email.visible_fragments().count(),
            "Parsed email body"
        );

        Ok(email)
    }

    /// Read errors, including invalid UTF-8, surface as [`ParseError::Io`]
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Email> {
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        self.parse(&body)
    }

    pub fn extract_visible_reply(&self, text: &str) -> Result<String> {
        Ok(self.parse(text)?.visible_text())
    }
}

/// Whether a line opens or belongs to a signature block. Such lines keep
/// their trailing whitespace.
fn is_signature_line(line: &str) -> bool {
    SIGNATURE_REGEX.is_match(line)
}

/// Fragment still receiving lines, stored bottom-up
#[derive(Debug)]
struct OpenFragment<'a> {
    quoted: bool,
    signature: bool,
    lines: Vec<&'a str>,
}

impl<'a> OpenFragment<'a> {
    fn new(quoted: bool, first_line: &'a str) -> Self {
        Self {
            quoted,
            signature: false,
            lines: vec![first_line],
        }
    }

    /// The line directly below the one being scanned is a signature delimiter
    fn closes_signature(&self) -> bool {
        self.lines.last().is_some_and(|line| is_signature_line(line))
    }

    /// A quoted block keeps blank separators and its `On ... wrote:` header
    fn accepts(&self, line: &str, quoted: bool) -> bool {
        self.quoted == quoted
            || (self.quoted && (line.is_empty() || QUOTE_HEADER_REGEX.is_match(line)))
    }

    fn into_content(mut self) -> String {
        self.lines.reverse();
        self.lines.join("\n")
    }
}

/// Single-use state machine for one parse
struct Segmenter<'a> {
    max_line_length: usize,
    current: Option<OpenFragment<'a>>,
    /// Finalized fragments, bottom-up
    fragments: Vec<Fragment>,
    found_visible: bool,
}

impl<'a> Segmenter<'a> {
    const fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            current: None,
            fragments: Vec::new(),
            found_visible: false,
        }
    }

    fn run(mut self, text: &'a str) -> Result<Email> {
        if text.is_empty() {
            return Ok(Email::default());
        }

        let lines: Vec<&str> = text.split('\n').collect();
        for (index, line) in lines.into_iter().enumerate().rev() {
            if line.len() > self.max_line_length {
                warn!(
                    line = index + 1,
                    length = line.len(),
                    max = self.max_line_length,
                    "Line exceeds maximum scan length"
                );
                return Err(ParseError::LineTooLong {
                    line: index + 1,
                    length: line.len(),
                    max: self.max_line_length,
                });
            }

            self.scan_line(line);
        }

        self.finish_fragment();
        self.fragments.reverse();

        Ok(Email::new(self.fragments))
    }

    fn scan_line(&mut self, line: &'a str) {
        let line = if is_signature_line(line) {
            line
        } else {
            line.trim_end()
        };
        let quoted = line.starts_with('>');

        if line.is_empty()
            && let Some(fragment) = self.current.as_mut().filter(|f| f.closes_signature())
        {
            fragment.signature = true;
            self.finish_fragment();
        }

        if let Some(fragment) = self.current.as_mut().filter(|f| f.accepts(line, quoted)) {
            fragment.lines.push(line);
        } else {
            self.finish_fragment();
            self.current = Some(OpenFragment::new(quoted, line));
        }
    }

    fn finish_fragment(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };

        let quoted = open.quoted;
        let signature = open.signature;
        let content = open.into_content();
        let hidden = self.classify(quoted, signature, &content);

        trace!(
            position = self.fragments.len(),
            quoted, signature, hidden, "Finished fragment"
        );

        self.fragments
            .push(Fragment::new(content, quoted, signature, hidden));
    }

    /// Hides quoted, signature or blank fragments until the first visible
    /// one turns up. After that nothing is hidden.
    fn classify(&mut self, quoted: bool, signature: bool, content: &str) -> bool {
        if self.found_visible {
            return false;
        }

        if quoted || signature || content.trim().is_empty() {
            true
        } else {
            self.found_visible = true;
            false
        }
    }
}
