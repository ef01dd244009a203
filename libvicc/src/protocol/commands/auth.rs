// libvicc/src/protocol/commands/auth.rs

//! ISO/IEC 29167-10 TAM1 message encoder.

use crate::constants::{CSI_AES, TAM1_CHALLENGE_LEN, TAM1_CLEAR_CUSTOM_DATA};

/// TAM1 message: CSI, header, key number, IChallenge.
/// Shared by Challenge (0x39) and Authenticate (0x35).
pub fn encode_tam1(opcode: u8, key_no: u8, challenge: &[u8; TAM1_CHALLENGE_LEN]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + TAM1_CHALLENGE_LEN);
    buf.push(opcode);
    buf.push(CSI_AES);
    buf.push(TAM1_CLEAR_CUSTOM_DATA);
    buf.push(key_no);
    buf.extend_from_slice(challenge);
    buf
}
