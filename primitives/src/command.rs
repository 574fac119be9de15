//! Decoded transaction commands.
//!
//! A raw transaction decodes into exactly one `Command`. The application
//! only knows a single variant today; handlers match on it exhaustively, so
//! a new variant cannot reach a handler that does not understand it.

/// Write `value` under `key`, replacing any previous value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriteCommand {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl WriteCommand {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// A decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Write(WriteCommand),
}

impl From<WriteCommand> for Command {
    fn from(cmd: WriteCommand) -> Self {
        Self::Write(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_command_accessors() {
        let cmd = WriteCommand::new(b"foo".to_vec(), "bar");
        assert_eq!(cmd.key(), b"foo");
        assert_eq!(cmd.value(), b"bar");
    }

    #[test]
    fn test_command_from_write() {
        let cmd: Command = WriteCommand::new("k", "v").into();
        assert_eq!(cmd, Command::Write(WriteCommand::new("k", "v")));
    }
}
