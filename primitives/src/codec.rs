//! Transaction wire format.
//!
//! Transactions are Protocol Buffers messages, so the encoding is
//! self-describing (tag + wire type per field) and stable across versions:
//!
//! ```text
//! message Tx {
//!   oneof command {
//!     WriteMsg write = 1;
//!   }
//! }
//!
//! message WriteMsg {
//!   bytes key   = 1;
//!   bytes value = 2;
//! }
//! ```
//!
//! `decode_tx` never panics on arbitrary input; every failure is reported as
//! a `DecodeError`.

use prost::Message;

use crate::command::{Command, WriteCommand};
use crate::error::DecodeError;

/// Transaction envelope.
#[derive(Clone, PartialEq, Message)]
pub struct TxProto {
    #[prost(oneof = "tx_proto::Command", tags = "1")]
    pub command: Option<tx_proto::Command>,
}

pub mod tx_proto {
    /// Commands a transaction can carry.
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Command {
        #[prost(message, tag = "1")]
        Write(super::WriteMsgProto),
    }
}

/// Body of a key/value write.
#[derive(Clone, PartialEq, Message)]
pub struct WriteMsgProto {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// Encode a command into raw transaction bytes.
pub fn encode_tx(cmd: &Command) -> Vec<u8> {
    let command = match cmd {
        Command::Write(write) => tx_proto::Command::Write(WriteMsgProto {
            key: write.key().to_vec(),
            value: write.value().to_vec(),
        }),
    };
    TxProto {
        command: Some(command),
    }
    .encode_to_vec()
}

/// Encode a write command into raw transaction bytes.
pub fn encode_write_tx(key: &[u8], value: &[u8]) -> Vec<u8> {
    encode_tx(&Command::Write(WriteCommand::new(key, value)))
}

/// Decode raw transaction bytes into a command.
///
/// Rejects buffers that are not valid protobuf and envelopes without a
/// command. An empty key is a valid key.
pub fn decode_tx(raw: &[u8]) -> Result<Command, DecodeError> {
    let tx = TxProto::decode(raw)?;
    match tx.command {
        Some(tx_proto::Command::Write(msg)) => {
            Ok(Command::Write(WriteCommand::new(msg.key, msg.value)))
        }
        None => Err(DecodeError::MissingCommand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_roundtrip() {
        let cmd = Command::Write(WriteCommand::new(b"foo".to_vec(), b"baz".to_vec()));
        let raw = encode_tx(&cmd);
        assert_eq!(decode_tx(&raw).unwrap(), cmd);
    }

    #[test]
    fn test_binary_key_and_empty_value_roundtrip() {
        let cmd = Command::Write(WriteCommand::new(vec![0x00, 0xff, 0x10], Vec::new()));
        let raw = encode_tx(&cmd);
        assert_eq!(decode_tx(&raw).unwrap(), cmd);
    }

    #[test]
    fn test_encoding_deterministic() {
        let a = encode_write_tx(b"hello", b"world");
        let b = encode_write_tx(b"hello", b"world");
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_tx(b"not a tx"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_tx(&[0xff, 0xff, 0xff]),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let raw = encode_write_tx(b"foo", b"some longer value");
        let truncated = &raw[..raw.len() - 4];
        assert!(matches!(
            decode_tx(truncated),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_empty_buffer_has_no_command() {
        assert_eq!(decode_tx(&[]), Err(DecodeError::MissingCommand));
    }

    #[test]
    fn test_empty_key_roundtrip() {
        let cmd = Command::Write(WriteCommand::new(Vec::new(), b"v".to_vec()));
        assert_eq!(decode_tx(&encode_tx(&cmd)).unwrap(), cmd);

        let cmd = Command::Write(WriteCommand::new(Vec::new(), Vec::new()));
        assert_eq!(decode_tx(&encode_tx(&cmd)).unwrap(), cmd);
    }
}
