//! Transactions carrying the proof-of-stake `nTime` field.
//!
//! The layout is the Bitcoin one with a 32-bit timestamp inserted after the
//! version: `version | time | inputs | outputs | lock_time`.

pub use bitcoin::{OutPoint, Sequence, TxIn, TxOut, Txid, Witness, absolute::LockTime};

use crate::steady::{
    consensus::{Encodable, serialize},
    hashes::{Hash, Sha256Hash},
    io::{Error as IoError, Write},
};

/// A transaction as hashed and relayed on SteadyNode networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Unix time the transaction was created.
    pub time: u32,
    /// Spent outputs.
    pub input: Vec<TxIn>,
    /// Created outputs.
    pub output: Vec<TxOut>,
    /// Earliest time or height the transaction may be mined.
    pub lock_time: LockTime,
}

impl Transaction {
    /// Computes the transaction id: double SHA-256 of the serialization.
    pub fn txid(&self) -> Txid {
        Txid::from_raw_hash(Sha256Hash::hash(&serialize(self)))
    }

    /// Whether this transaction creates coins out of nothing.
    pub fn is_coinbase(&self) -> bool {
        matches!(self.input.as_slice(), [input] if input.previous_output.is_null())
    }
}

#[allow(
    clippy::arithmetic_side_effects,
    reason = "Encoded lengths are bounded by the in-memory transaction size"
)]
impl Encodable for Transaction {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.version.consensus_encode(writer)?;
        len += self.time.consensus_encode(writer)?;
        len += self.input.consensus_encode(writer)?;
        len += self.output.consensus_encode(writer)?;
        len += self.lock_time.consensus_encode(writer)?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::{Amount, ScriptBuf};

    use super::*;

    fn sample() -> Transaction {
        Transaction {
            version: 1,
            time: 1_542_565_799,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: ScriptBuf::from_bytes(vec![0x00]),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            output: vec![TxOut {
                value: Amount::ZERO,
                script_pubkey: ScriptBuf::new(),
            }],
            lock_time: LockTime::ZERO,
        }
    }

    #[test]
    fn test_time_follows_version() {
        let bytes = serialize(&sample());
        assert_eq!(&bytes[..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1_542_565_799u32.to_le_bytes());
        // version + time + 1 input (41 + 1 script byte) + 1 output (9) + lock time
        assert_eq!(bytes.len(), 4 + 4 + 1 + 42 + 1 + 9 + 4);
    }

    #[test]
    fn test_coinbase_detection() {
        let mut tx = sample();
        assert!(tx.is_coinbase());
        tx.input[0].previous_output.vout = 0;
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_txid_changes_with_time() {
        let mut tx = sample();
        let before = tx.txid();
        tx.time += 1;
        assert_ne!(before, tx.txid());
    }
}
