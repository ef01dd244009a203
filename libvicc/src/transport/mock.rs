// libvicc/src/transport/mock.rs

//! In-memory transceiver for tests.

use std::collections::{HashMap, VecDeque};

use crate::constants::{TIMEOUT_LONG_US, UID_LEN};
use crate::protocol::RequestFlags;
use crate::transport::traits::Transceiver;
use crate::types::{ConfigKey, DataRate, EofKind, ExchangeMode, OperatingMode};
use crate::{Error, Result};

/// Reply queued on the mock.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful response
    Data(Vec<u8>),
    /// Exchange error
    Error(Error),
    /// Error-flagged tag response; sets `AdditionalInfo` to the code
    TagError(u8),
}

/// Mock transceiver for unit tests. It records sent frames, EOFs and
/// configuration writes, and returns queued replies. An empty queue
/// behaves like a silent tag (timeout).
#[derive(Debug)]
pub struct MockTransceiver {
    /// Every exchange call: (mode, bytes)
    pub sent: Vec<(ExchangeMode, Vec<u8>)>,
    /// Complete frames as they went on air (buffered parts joined)
    pub frames: Vec<Vec<u8>>,
    /// Replies for `exchange`, consumed in order
    pub replies: VecDeque<MockReply>,
    /// Every EOF sent
    pub eofs: Vec<EofKind>,
    /// Replies for `send_eof`, consumed in order
    pub eof_replies: VecDeque<MockReply>,
    /// Current config values
    pub config: HashMap<ConfigKey, u16>,
    /// Record of set_config calls
    pub config_writes: Vec<(ConfigKey, u16)>,
    /// UID reported by `serial_no`, wire order
    pub serial: Option<[u8; UID_LEN]>,
    pending: Vec<u8>,
}

impl Default for MockTransceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransceiver {
    /// Mock in ISO mode at 26 kbps with the long timeout.
    pub fn new() -> Self {
        let mut config = HashMap::new();
        config.insert(ConfigKey::Flags, RequestFlags::default().to_config());
        config.insert(ConfigKey::AdditionalInfo, 0);
        config.insert(ConfigKey::TimeoutUs, TIMEOUT_LONG_US);
        config.insert(ConfigKey::RxDataRate, DataRate::Kbps26.as_u16());
        config.insert(ConfigKey::TxDataRate, DataRate::Kbps26.as_u16());
        config.insert(ConfigKey::OperatingMode, OperatingMode::Iso as u16);
        Self {
            sent: Vec::new(),
            frames: Vec::new(),
            replies: VecDeque::new(),
            eofs: Vec::new(),
            eof_replies: VecDeque::new(),
            config,
            config_writes: Vec::new(),
            serial: None,
            pending: Vec::new(),
        }
    }

    /// Queue a response.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push_back(MockReply::Data(resp));
    }

    /// Queue an exchange error.
    pub fn push_error(&mut self, err: Error) {
        self.replies.push_back(MockReply::Error(err));
    }

    /// Queue an error-flagged response carrying `code`.
    pub fn push_tag_error(&mut self, code: u8) {
        self.replies.push_back(MockReply::TagError(code));
    }

    /// Queue a response to the next EOF.
    pub fn push_eof_response(&mut self, resp: Vec<u8>) {
        self.eof_replies.push_back(MockReply::Data(resp));
    }

    /// Queue an error for the next EOF.
    pub fn push_eof_error(&mut self, err: Error) {
        self.eof_replies.push_back(MockReply::Error(err));
    }

    /// Set the pending tag error code.
    pub fn set_additional_info(&mut self, code: u8) {
        self.config.insert(ConfigKey::AdditionalInfo, u16::from(code));
    }

    /// Seed a config value without recording it as a write.
    pub fn preset(&mut self, key: ConfigKey, value: u16) {
        self.config.insert(key, value);
    }

    /// Number of set_config calls for `key`
    pub fn writes_to(&self, key: ConfigKey) -> usize {
        self.config_writes.iter().filter(|(k, _)| *k == key).count()
    }

    /// Last frame sent.
    pub fn last_frame(&self) -> Option<&Vec<u8>> {
        self.frames.last()
    }

    fn take_reply(&mut self, from_eof: bool) -> Result<Vec<u8>> {
        let queue = if from_eof {
            &mut self.eof_replies
        } else {
            &mut self.replies
        };
        match queue.pop_front() {
            None => Err(Error::Timeout),
            Some(MockReply::Data(d)) => Ok(d),
            Some(MockReply::Error(e)) => Err(e),
            Some(MockReply::TagError(code)) => {
                self.set_additional_info(code);
                Err(Error::Iso15693)
            }
        }
    }
}

impl Transceiver for MockTransceiver {
    fn exchange(&mut self, mode: ExchangeMode, data: &[u8]) -> Result<Vec<u8>> {
        self.sent.push((mode, data.to_vec()));
        match mode {
            ExchangeMode::BufferFirst => {
                self.pending = data.to_vec();
                Ok(Vec::new())
            }
            ExchangeMode::BufferLast | ExchangeMode::Default => {
                let mut frame = std::mem::take(&mut self.pending);
                frame.extend_from_slice(data);
                self.frames.push(frame);
                self.take_reply(false)
            }
        }
    }

    fn send_eof(&mut self, kind: EofKind) -> Result<Vec<u8>> {
        self.eofs.push(kind);
        self.take_reply(true)
    }

    fn get_config(&self, key: ConfigKey) -> Result<u16> {
        self.config
            .get(&key)
            .copied()
            .ok_or_else(|| Error::InvalidParameter(format!("unknown config key {:?}", key)))
    }

    fn set_config(&mut self, key: ConfigKey, value: u16) -> Result<()> {
        self.config_writes.push((key, value));
        self.config.insert(key, value);
        Ok(())
    }

    fn serial_no(&self) -> Result<[u8; UID_LEN]> {
        self.serial
            .ok_or_else(|| Error::Transceiver("no tag activated".into()))
    }
}
