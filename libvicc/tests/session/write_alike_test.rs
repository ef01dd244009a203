#[path = "../common/mod.rs"]
mod common;

use libvicc::session::TagSession;
use libvicc::transport::{MockReply, MockTransceiver};
use libvicc::{EofKind, Error, OptionFlag};

fn session() -> TagSession<MockTransceiver> {
    TagSession::new(MockTransceiver::new())
}

#[test]
fn success_is_inverted_to_protocol_error() {
    let mut s = session();
    assert_eq!(s.write_alike_handling(Ok(vec![])), Err(Error::Protocol));
    assert!(s.transceiver().eofs.is_empty());
}

#[test]
fn timeout_issues_exactly_one_eof() {
    let mut s = session();
    s.transceiver_mut().push_eof_response(vec![0xAB]);
    assert_eq!(s.write_alike_handling(Err(Error::Timeout)), Ok(vec![0xAB]));
    assert_eq!(s.transceiver().eofs, vec![EofKind::WriteAlike]);
}

#[test]
fn collision_issues_eof_with_wait() {
    let mut s = session();
    s.transceiver_mut().push_eof_response(vec![]);
    s.write_alike_handling(Err(Error::Collision)).unwrap();
    assert_eq!(s.transceiver().eofs, vec![EofKind::WriteAlikeWithWait]);
}

#[test]
fn eof_failure_is_not_retried() {
    let mut s = session();
    s.transceiver_mut().push_eof_error(Error::Integrity);
    assert_eq!(
        s.write_alike_handling(Err(Error::Timeout)),
        Err(Error::Integrity)
    );
    assert_eq!(s.transceiver().eofs.len(), 1);
}

#[test]
fn lock_with_option_end_to_end() {
    let mut s = session();
    s.transceiver_mut().push_error(Error::Timeout);
    s.transceiver_mut()
        .eof_replies
        .push_back(MockReply::TagError(0x11));
    assert_eq!(s.lock_block(OptionFlag::On, 4), Err(Error::BlockLocked));
    assert_eq!(s.transceiver().frames, vec![vec![0x22, 0x04]]);
    assert_eq!(s.transceiver().eofs.len(), 1);
}

#[test]
fn write_multiple_with_option_collects_eof() {
    let mut s = session();
    s.transceiver_mut().push_error(Error::Framing);
    s.transceiver_mut().push_eof_response(vec![]);
    let data = common::fixtures::block_pattern(8, 2);
    s.write_multiple_blocks(OptionFlag::On, 8, 2, &data).unwrap();
    assert_eq!(s.transceiver().eofs, vec![EofKind::WriteAlikeWithWait]);
}

#[test]
fn reads_never_solicit_eof() {
    let mut s = session();
    s.transceiver_mut().push_response(vec![0; 5]);
    s.read_single_block(OptionFlag::On, 0).unwrap();
    assert!(s.transceiver().eofs.is_empty());
}
