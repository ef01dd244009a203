// fixtures.rs: provides commonly used test payloads and keys

/// UID as the tag sends it (LSB first)
pub fn sample_uid_wire() -> [u8; 8] {
    [0x78, 0x56, 0x34, 0x12, 0x01, 0x16, 0x04, 0xE0]
}

/// GetSystemInformation answer: DSFID, AFI, 80 blocks of 4 bytes, IC ref
pub fn system_information_payload() -> Vec<u8> {
    let mut payload = vec![0x0F];
    payload.extend_from_slice(&sample_uid_wire());
    payload.extend_from_slice(&[0x00, 0x07, 0x4F, 0x03, 0x01]);
    payload
}

/// ExtendedGetSystemInformation answer with every field present
pub fn extended_system_information_payload() -> Vec<u8> {
    let mut payload = vec![0x3F];
    payload.extend_from_slice(&sample_uid_wire());
    payload.push(0x00); // dsfid
    payload.push(0x00); // afi
    payload.extend_from_slice(&[0xFF, 0x01, 0x03]); // 512 blocks, 4 bytes
    payload.push(0x01); // ic reference
    payload.extend_from_slice(&[0x35, 0x00, 0x00, 0x00]); // command list
    payload.extend_from_slice(&[0x01, 0x00]); // one CSI: AES
    payload
}

/// Block contents where every byte encodes its block number
pub fn block_pattern(first_block: u16, count: u16) -> Vec<u8> {
    (first_block..first_block + count)
        .flat_map(|b| [b as u8; 4])
        .collect()
}

pub const TAM1_KEY_NO: u16 = 1;

/// AES-128 key (FIPS-197 appendix C.1)
pub fn tam1_key() -> [u8; 16] {
    let bytes = hex::decode("000102030405060708090a0b0c0d0e0f").expect("valid hex");
    bytes.try_into().expect("16 bytes")
}

pub fn tam1_nonce() -> [u8; 10] {
    [0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6, 0x07, 0x18, 0x29, 0x3A]
}

pub fn tam1_trnd() -> [u8; 4] {
    [0x01, 0x23, 0x45, 0x67]
}
