// libvicc/src/session/write_alike.rs

//! Completion of write-alike commands sent with Option ON. The tag answers
//! only after an EOF, so the exchange itself is expected to time out.

use log::debug;

use crate::session::TagSession;
use crate::transport::Transceiver;
use crate::types::EofKind;
use crate::{Error, Result};

impl<T: Transceiver> TagSession<T> {
    /// Complete a write-alike command sent with Option ON.
    ///
    /// Such a tag stays silent until it sees an EOF, so an immediate answer
    /// is a protocol violation and a timeout is the normal outcome. Noise
    /// while the tag programs gets the EOF with the longer wait. Any other
    /// error is returned unchanged.
    pub fn write_alike_handling(&mut self, result: Result<Vec<u8>>) -> Result<Vec<u8>> {
        let kind = match result {
            Ok(_) => {
                debug!("write-alike: tag answered before EOF");
                return Err(Error::Protocol);
            }
            Err(Error::Timeout) => EofKind::WriteAlike,
            Err(ref e) if e.is_transient_frame_error() => EofKind::WriteAlikeWithWait,
            Err(e) => return Err(e),
        };
        debug!("write-alike: sending {:?}", kind);
        self.transceiver.send_eof(kind)
    }
}
