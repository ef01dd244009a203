#[path = "../common/mod.rs"]
mod common;

use libvicc::session::{ReadKind, TagSession};
use libvicc::transport::MockTransceiver;
use libvicc::{Error, OptionFlag};
use proptest::prelude::*;

#[test]
fn full_tag_read_in_chunks() -> anyhow::Result<()> {
    common::init_logging();
    // default budget: 60 blocks per transfer
    let mut s = common::chained_session(240);
    let expected = common::fixtures::block_pattern(0, 128);
    for chunk in expected.chunks(240) {
        s.transceiver_mut().push_response(chunk.to_vec());
    }
    let data = s.read_blocks(ReadKind::ExtendedMultiple, false, OptionFlag::Off, 0, 128)?;
    assert_eq!(data, expected);
    assert_eq!(s.transceiver().frames.len(), 3);
    assert_eq!(s.transceiver().frames[2], vec![0x33, 120, 0x00, 7, 0x00]);
    Ok(())
}

#[test]
fn read_into_caller_buffer() -> anyhow::Result<()> {
    let mut s = common::chained_session(20);
    s.transceiver_mut().push_response(vec![0x11; 20]);
    s.transceiver_mut().push_response(vec![0x22; 4]);
    let mut out = [0u8; 32];
    let n = s.read_blocks_into(ReadKind::Multiple, false, OptionFlag::Off, 10, 6, &mut out)?;
    assert_eq!(n, 24);
    assert_eq!(&out[20..24], &[0x22; 4]);
    assert_eq!(&out[24..], &[0u8; 8]);
    Ok(())
}

#[test]
fn buffer_too_small_fails_before_io() {
    let mut s = common::chained_session(240);
    // Option ON: 5 bytes per block
    let mut out = [0u8; 9];
    let r = s.read_blocks_into(ReadKind::Multiple, false, OptionFlag::On, 0, 2, &mut out);
    assert_eq!(
        r,
        Err(Error::BufferOverflow {
            capacity: 9,
            required: 10
        })
    );
    assert!(s.transceiver().sent.is_empty());
}

#[test]
fn oversized_chunk_is_protocol_error() {
    let mut s = common::chained_session(8);
    s.transceiver_mut().push_response(vec![0; 12]);
    assert_eq!(
        s.read_blocks(ReadKind::Multiple, false, OptionFlag::Off, 0, 4),
        Err(Error::Protocol)
    );
}

#[test]
fn security_status_chained_short_read() {
    let mut s = common::chained_session(16);
    s.transceiver_mut().push_response(vec![0x01; 16]);
    s.transceiver_mut().push_response(vec![0x00; 3]);
    let st = s
        .read_blocks(ReadKind::ExtendedSecurityStatus, false, OptionFlag::Off, 0, 40)
        .unwrap();
    assert_eq!(st.len(), 19);
    assert_eq!(s.transceiver().frames.len(), 2);
}

#[test]
fn non_chaining_issues_single_exchange() {
    let mut s = TagSession::new(MockTransceiver::new());
    s.transceiver_mut().push_response(vec![0; 400]);
    let data = s
        .read_blocks(ReadKind::ExtendedMultiple, false, OptionFlag::Off, 0, 100)
        .unwrap();
    assert_eq!(data.len(), 400);
    assert_eq!(s.transceiver().frames.len(), 1);
}

#[test]
fn extended_limit_is_512() {
    let mut s = common::chained_session(240);
    let r = s.read_blocks(ReadKind::ExtendedMultiple, false, OptionFlag::Off, 1, 512);
    assert!(matches!(r, Err(Error::InvalidParameter(_))));
    let r = s.read_blocks(ReadKind::Multiple, false, OptionFlag::Off, 255, 2);
    assert!(matches!(r, Err(Error::InvalidParameter(_))));
    assert!(s.transceiver().sent.is_empty());
}

proptest! {
    #[test]
    fn extended_chaining_bounds(
        block_no in 0u16..256,
        num_blocks in 1u16..=256,
        option in any::<bool>(),
    ) {
        let kind = ReadKind::ExtendedMultiple;
        prop_assert!(kind.validate(block_no, num_blocks).is_ok());
        let option = OptionFlag::from(option);
        let mut s = common::chained_session(240);
        let bpb = kind.bytes_per_block(option);
        let per = s.config().max_blocks_per_transfer(bpb);
        let total = usize::from(num_blocks) * bpb;
        let payload = vec![0x5Au8; total];
        for chunk in payload.chunks(usize::from(per) * bpb) {
            s.transceiver_mut().push_response(chunk.to_vec());
        }
        let data = s.read_blocks(kind, false, option, block_no, num_blocks).unwrap();
        prop_assert_eq!(data.len(), total);
        let max_exchanges = usize::from(num_blocks).div_ceil(usize::from(per));
        prop_assert!(s.transceiver().frames.len() <= max_exchanges);
    }
}
