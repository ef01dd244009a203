#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{TAM1_KEY_NO, tam1_key, tam1_nonce, tam1_trnd};
use libvicc::session::Tam1Verification;
use libvicc::test_support::{tam1_session, tam1_tag_response};
use libvicc::utils::reversed;
use libvicc::Error;

#[test]
fn challenge_then_verified_read_buffer() -> anyhow::Result<()> {
    common::init_logging();
    let key = tam1_key();
    let mut s = tam1_session(TAM1_KEY_NO, &key, &tam1_nonce())?;

    let challenge = s.challenge(0)?;
    assert_eq!(challenge.as_bytes(), &tam1_nonce());

    let wire = tam1_tag_response(&key, challenge.as_bytes(), &tam1_trnd());
    s.transceiver_mut().push_response(wire.clone());
    let verify = Tam1Verification {
        key_no: TAM1_KEY_NO,
        key_version: 0,
        challenge,
    };
    let resp = s.read_buffer(Some(&verify))?;
    assert_eq!(resp, wire);
    Ok(())
}

#[test]
fn unverified_read_buffer_is_reversed() -> anyhow::Result<()> {
    let key = tam1_key();
    let mut s = tam1_session(TAM1_KEY_NO, &key, &tam1_nonce())?;
    let wire = tam1_tag_response(&key, &tam1_nonce(), &tam1_trnd());
    s.transceiver_mut().push_response(wire.clone());
    assert_eq!(s.read_buffer(None)?, reversed(&wire));
    Ok(())
}

#[test]
fn stale_challenge_is_rejected() -> anyhow::Result<()> {
    let key = tam1_key();
    // the session hands out a different nonce than the tag answered
    let mut s = tam1_session(TAM1_KEY_NO, &key, &[0x55])?;
    let challenge = s.challenge(0)?;
    s.transceiver_mut()
        .push_response(tam1_tag_response(&key, &tam1_nonce(), &tam1_trnd()));
    let verify = Tam1Verification {
        key_no: TAM1_KEY_NO,
        key_version: 0,
        challenge,
    };
    assert!(matches!(
        s.read_buffer(Some(&verify)),
        Err(Error::Authentication(_))
    ));
    Ok(())
}

#[test]
fn tag_error_on_read_buffer_is_translated() -> anyhow::Result<()> {
    let mut s = tam1_session(TAM1_KEY_NO, &tam1_key(), &tam1_nonce())?;
    s.transceiver_mut().push_tag_error(0x40);
    assert_eq!(s.read_buffer(None), Err(Error::CryptoError));
    Ok(())
}

#[test]
fn one_shot_authenticate() -> anyhow::Result<()> {
    let key = tam1_key();
    let mut s = tam1_session(TAM1_KEY_NO, &key, &tam1_nonce())?;
    s.transceiver_mut()
        .push_response(tam1_tag_response(&key, &tam1_nonce(), &tam1_trnd()));
    assert_eq!(s.authenticate_tam1(2, TAM1_KEY_NO, 0)?, tam1_trnd());
    let frame = &s.transceiver().frames[0];
    assert_eq!(&frame[..4], &[0x35, 0x00, 0x00, 0x02]);
    Ok(())
}
