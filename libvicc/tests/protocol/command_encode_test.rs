#[path = "../common/mod.rs"]
mod common;

use libvicc::protocol::{Command, PasswordId, opcodes, xor_password};

#[test]
fn standard_and_extended_range_framing() {
    let std = Command::ReadMultipleBlocks {
        first_block: 0xFE,
        count: 2,
    };
    assert_eq!(std.encode(), vec![0x23, 0xFE, 0x01]);

    let ext = Command::ExtendedReadMultipleBlocks {
        first_block: 0x0102,
        count: 0x0100,
    };
    assert_eq!(ext.encode(), vec![0x33, 0x02, 0x01, 0xFF, 0x00]);

    let fast = Command::FastExtendedReadMultipleBlocks {
        first_block: 1,
        count: 1,
    };
    assert_eq!(fast.encode(), vec![0x3D, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn write_frames_carry_data() {
    let cmd = Command::ExtendedWriteSingleBlock {
        block: 0x01F0,
        data: [0xDE, 0xAD, 0xBE, 0xEF],
    };
    assert_eq!(cmd.encode(), vec![0x31, 0xF0, 0x01, 0xDE, 0xAD, 0xBE, 0xEF]);

    let data = common::fixtures::block_pattern(0, 2);
    let cmd = Command::WriteMultipleBlocks {
        first_block: 0,
        count: 2,
        data: data.clone(),
    };
    let mut expected = vec![0x24, 0x00, 0x01];
    expected.extend_from_slice(&data);
    assert_eq!(cmd.encode(), expected);
}

#[test]
fn custom_commands_insert_manufacturer_code() {
    for cmd in [
        Command::SetEas,
        Command::GetRandomNumber,
        Command::ReadSignature,
        Command::PickRandomId,
        Command::ReadTt,
    ] {
        let frame = cmd.encode();
        assert!(opcodes::is_custom(frame[0]));
        assert_eq!(frame[1], 0x04, "{:?}", cmd);
    }
}

#[test]
fn iso_commands_have_no_manufacturer_code() {
    assert_eq!(Command::ResetToReady.encode(), vec![0x26]);
    assert_eq!(Command::WriteDsfid { dsfid: 0x04 }.encode(), vec![0x29, 0x04]);
}

#[test]
fn tam1_frames() {
    let nonce = common::fixtures::tam1_nonce();
    let cmd = Command::Challenge {
        key_no: 3,
        challenge: nonce,
    };
    let frame = cmd.encode();
    assert_eq!(&frame[..4], &[0x39, 0x00, 0x00, 0x03]);
    assert_eq!(&frame[4..], &nonce);

    let cmd = Command::Authenticate {
        key_no: 0,
        challenge: nonce,
    };
    assert_eq!(cmd.encode()[0], 0x35);
    assert_eq!(cmd.encode().len(), 14);
}

#[test]
fn password_frames_use_masked_password() {
    let masked = xor_password([0x11, 0x22, 0x33, 0x44], [0xF0, 0x0F]);
    assert_eq!(masked, [0xE1, 0x2D, 0xC3, 0x4B]);
    let cmd = Command::EnablePrivacy {
        xor_password: masked,
    };
    assert_eq!(cmd.encode(), vec![0xBA, 0x04, 0xE1, 0x2D, 0xC3, 0x4B]);

    let cmd = Command::WritePassword {
        pwd_id: PasswordId::Destroy,
        password: [1, 2, 3, 4],
    };
    assert_eq!(cmd.encode(), vec![0xB4, 0x04, 0x08, 1, 2, 3, 4]);
}

#[test]
fn sram_frames() {
    let read = Command::ReadSram {
        first_block: 0x3F,
        count: 64,
    };
    assert_eq!(read.encode(), vec![0xD2, 0x04, 0x3F, 0x3F]);

    let write = Command::WriteSram {
        first_block: 0,
        count: 1,
        data: vec![1, 2, 3, 4],
    };
    assert_eq!(write.encode(), vec![0xD3, 0x04, 0x00, 0x00, 1, 2, 3, 4]);
}
