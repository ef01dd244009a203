//! In-place byte order reversal for the LSB-first fields of this protocol
//! family (UIDs, keys, authentication buffers).

/// Reverse `buf` in place. Empty and single-byte buffers are unchanged.
pub fn reverse(buf: &mut [u8]) {
    buf.reverse();
}

/// Return a reversed copy of `bytes`.
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    let mut v = bytes.to_vec();
    reverse(&mut v);
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reverse_short_buffers() {
        let mut empty: [u8; 0] = [];
        reverse(&mut empty);
        let mut one = [0x42];
        reverse(&mut one);
        assert_eq!(one, [0x42]);
    }

    #[test]
    fn reverse_odd_and_even() {
        let mut odd = [1, 2, 3];
        reverse(&mut odd);
        assert_eq!(odd, [3, 2, 1]);
        assert_eq!(reversed(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(buf in prop::collection::vec(any::<u8>(), 0..256)) {
            let mut work = buf.clone();
            reverse(&mut work);
            reverse(&mut work);
            prop_assert_eq!(work, buf);
        }
    }
}
