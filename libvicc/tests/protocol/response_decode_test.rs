#[path = "../common/mod.rs"]
mod common;

use libvicc::protocol::responses::info_flags;
use libvicc::protocol::{NxpSystemInformation, SystemInformation};
use libvicc::Error;

#[test]
fn decode_system_information() {
    let info = SystemInformation::decode(&common::fixtures::system_information_payload()).unwrap();
    assert_eq!(info.info_flags, 0x0F);
    assert_eq!(info.uid.to_wire(), common::fixtures::sample_uid_wire());
    assert_eq!(info.uid.as_bytes()[0], 0xE0);
    assert_eq!(info.dsfid, Some(0x00));
    assert_eq!(info.afi, Some(0x07));
    assert_eq!(info.block_count, Some(80));
    assert_eq!(info.block_size, Some(4));
    assert_eq!(info.ic_reference, Some(0x01));
    assert_eq!(info.command_list, None);
}

#[test]
fn decode_extended_system_information() {
    let info = SystemInformation::decode_extended(
        &common::fixtures::extended_system_information_payload(),
    )
    .unwrap();
    assert_ne!(info.info_flags & info_flags::CSI_LIST, 0);
    assert_eq!(info.block_count, Some(512));
    assert_eq!(info.command_list, Some(0x35));
    assert_eq!(info.csi_list, vec![0x00]);
}

#[test]
fn truncated_system_information_is_error() {
    let mut payload = common::fixtures::system_information_payload();
    payload.truncate(11);
    assert!(matches!(
        SystemInformation::decode(&payload),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn decode_nxp_system_information() {
    let info = NxpSystemInformation::decode(&[0x08, 0x31, 0x02, 0x7F, 0x00, 0x00, 0x80]).unwrap();
    assert_eq!(info.protection_pointer, 0x08);
    assert_eq!(info.protection_condition, 0x31);
    assert_eq!(info.lock_bits, 0x02);
    assert_eq!(info.feature_flags, 0x8000_007F);
    assert!(NxpSystemInformation::decode(&[0; 6]).is_err());
}
