use rstest::rstest;

use super::units;
use crate::{EncodeError, EncodingBuffer};

#[rstest]
#[case(0xDC00)]
#[case(0xDE00)]
#[case(0xDFFF)]
fn lone_low_surrogate_rejected(#[case] unit: u32) {
    let mut buf = EncodingBuffer::with_capacity(1).unwrap();
    assert_eq!(
        buf.encode(&[unit]),
        Err(EncodeError::UnpairedSurrogate(unit))
    );
}

#[rstest]
#[case(0x11_0000)]
#[case(0xFFFF_FFFF)]
fn unit_above_code_space_rejected(#[case] unit: u32) {
    let mut buf = EncodingBuffer::with_capacity(1).unwrap();
    assert_eq!(buf.encode(&[unit]), Err(EncodeError::InvalidCodePoint(unit)));
}

#[test]
fn high_half_followed_by_scalar_rejected() {
    let mut buf = EncodingBuffer::with_capacity(2).unwrap();
    assert_eq!(
        buf.encode(&[0xD800, 0x41]),
        Err(EncodeError::UnpairedSurrogate(0xD800))
    );
}

#[test]
fn high_half_followed_by_high_half_rejected() {
    let mut buf = EncodingBuffer::with_capacity(2).unwrap();
    assert_eq!(
        buf.encode(&[0xD800, 0xD801]),
        Err(EncodeError::UnpairedSurrogate(0xD800))
    );
}

#[test]
fn dangling_high_fails_the_next_call_too() {
    let mut buf = EncodingBuffer::with_capacity(2).unwrap();
    assert_eq!(buf.encode(&[0xD83D]).unwrap(), 0);
    // The pending half poisons a following all-scalar chunk.
    assert_eq!(
        buf.encode(&units("ok")),
        Err(EncodeError::UnpairedSurrogate(0xD83D))
    );
}

#[test]
fn reset_after_error_recovers() {
    let mut buf = EncodingBuffer::with_capacity(4).unwrap();
    assert!(buf.encode(&[0x41, 0xDC00, 0x42]).is_err());

    buf.reset();
    let written = buf.encode(&units("fine")).unwrap();
    assert_eq!(&buf.as_bytes()[..written], b"fine");
}

#[test]
fn errors_carry_loggable_detail() {
    use alloc::string::ToString;

    let mut buf = EncodingBuffer::with_capacity(1).unwrap();
    let err = buf.encode(&[0x11_0000]).unwrap_err();
    assert!(err.to_string().contains("0x110000"));

    buf.reset();
    let err = buf.encode(&[0xDC00]).unwrap_err();
    assert!(err.to_string().contains("0xDC00"));
}
