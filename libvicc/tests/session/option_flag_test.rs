#[path = "../common/mod.rs"]
mod common;

use libvicc::constants::{TIMEOUT_LONG_US, TIMEOUT_SHORT_US};
use libvicc::protocol::RequestFlags;
use libvicc::session::TagSession;
use libvicc::transport::{MockTransceiver, Transceiver};
use libvicc::{ConfigKey, Error};

#[test]
fn same_value_twice_is_one_config_write() {
    let mut s = TagSession::new(MockTransceiver::new());
    s.set_option_bit(1, false).unwrap();
    s.set_option_bit(1, false).unwrap();
    assert_eq!(s.transceiver().writes_to(ConfigKey::Flags), 1);
}

#[test]
fn option_bit_tracks_each_call() {
    let mut s = TagSession::new(MockTransceiver::new());
    for (value, expected) in [(1u8, true), (0, false), (1, true)] {
        s.set_option_bit(value, false).unwrap();
        let flags = RequestFlags::from_config(s.transceiver().get_config(ConfigKey::Flags).unwrap());
        assert_eq!(flags.contains(RequestFlags::OPTION), expected);
    }
    assert_eq!(s.transceiver().writes_to(ConfigKey::Flags), 3);
}

#[test]
fn timing_written_only_when_requested() {
    let mut s = TagSession::new(MockTransceiver::new());
    s.set_option_bit(1, false).unwrap();
    assert_eq!(s.transceiver().writes_to(ConfigKey::TimeoutUs), 0);
    s.set_option_bit(1, true).unwrap();
    assert_eq!(
        s.transceiver().get_config(ConfigKey::TimeoutUs).unwrap(),
        TIMEOUT_SHORT_US
    );
    s.set_option_bit(0, true).unwrap();
    assert_eq!(
        s.transceiver().get_config(ConfigKey::TimeoutUs).unwrap(),
        TIMEOUT_LONG_US
    );
}

#[test]
fn out_of_range_option_is_invalid_parameter() {
    let mut s = TagSession::new(MockTransceiver::new());
    for bad in [2u8, 0x40, 0xFF] {
        assert!(matches!(
            s.set_option_bit(bad, false),
            Err(Error::InvalidParameter(_))
        ));
    }
    assert!(s.transceiver().config_writes.is_empty());
}
