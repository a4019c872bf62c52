//! Word wrapping with hanging indentation.

/// Builds a block of lines no wider than `width` where possible.
///
/// A word longer than the available space gets a line of its own rather
/// than being split.
#[derive(Clone, Debug)]
pub struct Indenter {
    width: usize,
    default_prefix: String,
    lines: Vec<String>,
}

impl Indenter {
    pub fn new(width: usize, default_prefix: impl Into<String>) -> Self {
        Self {
            width,
            default_prefix: default_prefix.into(),
            lines: Vec::new(),
        }
    }

    /// Append `line` unchanged.
    pub fn raw(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append the default prefix alone, without trailing whitespace.
    pub fn empty_line(&mut self) -> &mut Self {
        self.lines.push(self.default_prefix.trim_end().to_owned());
        self
    }

    /// Wrap `text` at word boundaries. The first line starts with
    /// `first_prefix`, the others with `rest_prefix`.
    pub fn left_align(&mut self, text: &str, rest_prefix: &str, first_prefix: &str) -> &mut Self {
        let mut line = first_prefix.to_owned();
        let mut prefix_len = first_prefix.chars().count();
        let mut line_len = prefix_len;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();
            let has_words = line_len > prefix_len;

            if has_words && line_len + 1 + word_len > self.width {
                self.lines.push(std::mem::replace(&mut line, rest_prefix.to_owned()));
                prefix_len = rest_prefix.chars().count();
                line_len = prefix_len;
            } else if has_words {
                line.push(' ');
                line_len += 1;
            }

            line.push_str(word);
            line_len += word_len;
        }

        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with `\n`, no trailing newline.
    pub fn str(&self) -> String {
        self.lines.join("\n")
    }
}
