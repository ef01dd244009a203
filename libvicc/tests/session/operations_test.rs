#[path = "../common/mod.rs"]
mod common;

use libvicc::protocol::PasswordId;
use libvicc::session::TagSession;
use libvicc::transport::MockTransceiver;
use libvicc::{Error, ExchangeMode, OptionFlag};

#[test]
fn inventory_style_session_flow() -> anyhow::Result<()> {
    common::init_logging();
    let mut mock = MockTransceiver::new();
    mock.serial = Some(common::fixtures::sample_uid_wire());
    mock.push_response(common::fixtures::system_information_payload());
    mock.push_response(common::fixtures::block_pattern(0, 4));
    mock.push_response(vec![]);
    let mut s = TagSession::new(mock);

    let uid = s.serial_number()?;
    let info = s.get_system_information()?;
    assert_eq!(info.uid, uid);

    let data = s.read_multiple_blocks(OptionFlag::Off, 0, 4)?;
    assert_eq!(data.len(), 16);

    s.write_single_block(OptionFlag::Off, 1, &[1, 1, 1, 1])?;
    assert_eq!(s.transceiver().frames.len(), 3);
    Ok(())
}

#[test]
fn privacy_flow_masks_password() -> anyhow::Result<()> {
    let mut s = TagSession::new(MockTransceiver::new());
    s.transceiver_mut().push_response(vec![0xFF, 0x00]);
    s.transceiver_mut().push_response(vec![]);
    s.set_password(PasswordId::Privacy, [0x0F, 0x0F, 0x0F, 0x0F])?;
    assert_eq!(
        s.transceiver().frames[1],
        vec![0xB3, 0x04, 0x04, 0xF0, 0x0F, 0xF0, 0x0F]
    );
    Ok(())
}

#[test]
fn extended_write_multiple_uses_two_part_exchange() -> anyhow::Result<()> {
    let mut s = TagSession::new(MockTransceiver::new());
    s.transceiver_mut().push_response(vec![]);
    let data = common::fixtures::block_pattern(300, 3);
    s.extended_write_multiple_blocks(OptionFlag::Off, 300, 3, &data)?;
    let modes: Vec<ExchangeMode> = s.transceiver().sent.iter().map(|(m, _)| *m).collect();
    assert_eq!(modes, vec![ExchangeMode::BufferFirst, ExchangeMode::BufferLast]);
    assert_eq!(
        s.transceiver().sent[0].1,
        vec![0x34, 0x2C, 0x01, 0x02, 0x00]
    );
    Ok(())
}

#[test]
fn custom_error_range_surfaces_code() {
    let mut s = TagSession::new(MockTransceiver::new());
    s.transceiver_mut().push_tag_error(0xC3);
    assert_eq!(
        s.read_config(0, 1),
        Err(Error::CustomCommand { code: 0xC3 })
    );
}
