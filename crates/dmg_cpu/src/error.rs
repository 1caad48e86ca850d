use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Opcode identifier as fetched at the program counter.
///
/// `Prefixed` carries the byte that follows the 0xCB prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Opcode {
    Primary(u8),
    Prefixed(u8),
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Primary(op) => write!(f, "0x{op:02X}"),
            Opcode::Prefixed(op) => write!(f, "0xCB 0x{op:02X}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// No dispatch table entry exists for the fetched opcode. Fatal for the
    /// current run: the CPU state is left exactly as it was before the fetch.
    #[error("unimplemented opcode {opcode} at PC=0x{pc:04X}")]
    UnimplementedOpcode { opcode: Opcode, pc: u16 },

    #[error("failed to read image '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
