use libvicc::protocol::compute_error_code;
use libvicc::protocol::status::map_additional_info;
use libvicc::transport::MockTransceiver;
use libvicc::Error;

#[test]
fn table_codes_map_to_named_errors() {
    let cases = [
        (0x01, Error::CommandNotSupported),
        (0x02, Error::CommandNotRecognized),
        (0x03, Error::OptionNotSupported),
        (0x0F, Error::NoInformation),
        (0x10, Error::BlockNotAvailable),
        (0x11, Error::BlockLocked),
        (0x13, Error::BlockProgrammingFailure),
        (0x14, Error::BlockNotLocked),
        (0x40, Error::CryptoError),
    ];
    for (code, err) in cases {
        assert_eq!(map_additional_info(code), err, "code {:#04x}", code);
    }
}

#[test]
fn b5_is_block_locked_not_custom() {
    let mut m = MockTransceiver::new();
    m.set_additional_info(0xB5);
    assert_eq!(
        compute_error_code::<_, ()>(&m, Err(Error::Iso15693)),
        Err(Error::BlockLocked)
    );
}

#[test]
fn a5_is_custom_command_error() {
    let mut m = MockTransceiver::new();
    m.set_additional_info(0xA5);
    assert_eq!(
        compute_error_code::<_, ()>(&m, Err(Error::Iso15693)),
        Err(Error::CustomCommand { code: 0xA5 })
    );
}

#[test]
fn non_sentinel_statuses_pass_through() {
    let mut m = MockTransceiver::new();
    // additional info must be ignored for anything but the sentinel
    m.set_additional_info(0x10);
    for err in [
        Error::Timeout,
        Error::Integrity,
        Error::Collision,
        Error::Framing,
        Error::Protocol,
        Error::Transceiver("field off".into()),
    ] {
        assert_eq!(compute_error_code::<_, ()>(&m, Err(err.clone())), Err(err));
    }
    assert_eq!(compute_error_code(&m, Ok(vec![1u8])), Ok(vec![1u8]));
}
