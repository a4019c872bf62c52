//! Abbreviation-aware command lookup.

use std::collections::BTreeMap;
use std::ops::Bound;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no command given")]
    NoCommand,

    #[error("command not found: \"{0}\"")]
    UnknownCommand(String),

    #[error("ambiguous command: \"{0}\"")]
    AmbiguousCommand(String),
}

/// Maps every key of every command to that command.
///
/// A command word resolves to the smallest key it is a prefix of, unless the
/// next key also starts with it. Exact matches always win.
#[derive(Clone, Debug)]
pub struct CommandMap<H> {
    commands: Vec<H>,
    keys: BTreeMap<String, usize>,
}

impl<H> CommandMap<H> {
    /// The first command registering a key owns it.
    pub fn new<Ks, K>(commands: impl IntoIterator<Item = (Ks, H)>) -> Self
    where
        Ks: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut handlers = Vec::new();
        let mut keys = BTreeMap::new();
        for (command_keys, handler) in commands {
            let index = handlers.len();
            for key in command_keys {
                keys.entry(key.into()).or_insert(index);
            }
            handlers.push(handler);
        }
        Self {
            commands: handlers,
            keys,
        }
    }

    /// Split `line` into its command and the arguments after it.
    pub fn resolve<'l>(&self, line: &'l str) -> Result<(&H, &'l str), CommandError> {
        let line = line.trim_start();
        let word_end = line.find(char::is_whitespace).unwrap_or(line.len());
        let (word, rest) = line.split_at(word_end);
        if word.is_empty() {
            return Err(CommandError::NoCommand);
        }

        let mut candidates = self
            .keys
            .range::<str, _>((Bound::Included(word), Bound::Unbounded));

        let Some((key, &index)) = candidates.next().filter(|(key, _)| key.starts_with(word))
        else {
            return Err(CommandError::UnknownCommand(word.to_owned()));
        };

        if key != word
            && candidates
                .next()
                .is_some_and(|(next, _)| next.starts_with(word))
        {
            return Err(CommandError::AmbiguousCommand(word.to_owned()));
        }

        Ok((&self.commands[index], rest.trim_start()))
    }

    pub fn commands(&self) -> &[H] {
        &self.commands
    }

    /// All keys in lookup order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}
