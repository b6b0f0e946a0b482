//! String buffers are written as a sequence of `u32` length prefixes, each
//! followed by that many bytes of UTF-8.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{buffer::StringBuffer, config::WireOrder, error::BufferError};

use super::Encode;

impl Encode for StringBuffer {
    fn encode(&self, order: WireOrder) -> Result<Vec<u8>, BufferError> {
        let total: usize = self.iter().map(|s| s.len() + 4).sum();
        let mut bytes = Vec::with_capacity(total);
        for s in self.iter() {
            let len = u32::try_from(s.len()).map_err(|_| {
                BufferError::MalformedStrings(format!(
                    "string of {} bytes does not fit a u32 length prefix",
                    s.len()
                ))
            })?;
            let mut prefix = [0; 4];
            match order {
                WireOrder::Little => LittleEndian::write_u32(&mut prefix, len),
                WireOrder::Big => BigEndian::write_u32(&mut prefix, len),
            }
            bytes.extend_from_slice(&prefix);
            bytes.extend_from_slice(s.as_bytes());
        }
        tracing::trace!(elements = self.len(), bytes = bytes.len(), "encoded string buffer");
        Ok(bytes)
    }
}

#[cfg(feature = "strings")]
mod decode {
    use nom::{
        IResult, Parser,
        bytes::complete::take,
        combinator::{all_consuming, cut, map_res},
        error::{ErrorKind, FromExternalError, ParseError},
        multi::many0,
        number::complete::{be_u32, le_u32},
    };

    use crate::{buffer::StringBuffer, codec::Decode, config::WireOrder, error::BufferError};

    fn parse_strings<'a, E>(
        input: &'a [u8],
        order: WireOrder,
    ) -> IResult<&'a [u8], Vec<String>, E>
    where
        E: ParseError<&'a [u8]> + FromExternalError<&'a [u8], std::str::Utf8Error>,
    {
        let prefix: fn(&'a [u8]) -> IResult<&'a [u8], u32, E> = match order {
            WireOrder::Little => le_u32,
            WireOrder::Big => be_u32,
        };
        // A missing prefix ends the sequence. Once a prefix is read, the
        // payload must follow in full.
        let element = move |i: &'a [u8]| -> IResult<&'a [u8], String, E> {
            let (i, len) = prefix(i)?;
            cut(map_res(take(len), |s: &[u8]| {
                std::str::from_utf8(s).map(str::to_string)
            }))
            .parse_complete(i)
        };
        all_consuming(many0(element)).parse_complete(input)
    }

    impl Decode for StringBuffer {
        fn decode(bytes: &[u8], order: WireOrder) -> Result<Self, BufferError> {
            match parse_strings::<nom::error::Error<&[u8]>>(bytes, order) {
                Ok((_, strings)) => {
                    tracing::trace!(
                        elements = strings.len(),
                        bytes = bytes.len(),
                        "decoded string buffer"
                    );
                    Ok(Self::new(strings))
                }
                Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                    let offset = bytes.len() - e.input.len();
                    tracing::debug!(offset, code = ?e.code, "rejected malformed string buffer");
                    let cause = match e.code {
                        ErrorKind::MapRes => "invalid UTF-8".to_string(),
                        ErrorKind::Eof => "unexpected end of input".to_string(),
                        code => format!("{:?}", code),
                    };
                    Err(BufferError::MalformedStrings(format!(
                        "{} at byte {}",
                        cause, offset
                    )))
                }
                Err(nom::Err::Incomplete(_)) => {
                    Err(BufferError::MalformedStrings("Not enough data".to_string()))
                }
            }
        }
    }
}

#[cfg(all(test, feature = "strings"))]
mod tests {
    use crate::{
        buffer::{DataBuffer, StringBuffer},
        codec::{Decode, Encode},
        config::WireOrder,
        error::BufferError,
    };

    fn strings(values: &[&str]) -> StringBuffer {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn layout() {
        let bytes = strings(&["ab", "", "盆栽"]).encode(WireOrder::Little).unwrap();
        assert_eq!(&bytes[..6], &[2, 0, 0, 0, b'a', b'b']);
        assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
        assert_eq!(&bytes[10..14], &[6, 0, 0, 0]);
        assert_eq!(bytes.len(), 20);

        let bytes = strings(&["ab"]).encode(WireOrder::Big).unwrap();
        assert_eq!(bytes, [0, 0, 0, 2, b'a', b'b']);
    }

    #[test]
    fn round_trip() {
        let buffer = strings(&["ab", "", "盆栽", "a\nb"]);
        for order in [WireOrder::Little, WireOrder::Big] {
            let bytes = buffer.encode(order).unwrap();
            assert_eq!(StringBuffer::decode(&bytes, order).unwrap(), buffer);
        }
    }

    #[test]
    fn empty() {
        let buffer = StringBuffer::decode(&[], WireOrder::Little).unwrap();
        assert!(buffer.is_empty());
    }

    fn message(bytes: &[u8]) -> String {
        match StringBuffer::decode(bytes, WireOrder::Little) {
            Err(BufferError::MalformedStrings(message)) => message,
            other => panic!("expected malformed strings, got {:?}", other),
        }
    }

    #[test]
    fn malformed() {
        // truncated prefix
        assert_eq!(message(&[2, 0]), "unexpected end of input at byte 0");
        assert_eq!(
            message(&[1, 0, 0, 0, b'a', 2, 0]),
            "unexpected end of input at byte 5"
        );
        // truncated payload
        assert_eq!(
            message(&[1, 0, 0, 0, b'a', 3, 0, 0, 0, b'x']),
            "unexpected end of input at byte 9"
        );
        assert_eq!(message(&[0xff; 4]), "unexpected end of input at byte 4");
        // invalid utf-8
        assert_eq!(
            message(&[1, 0, 0, 0, b'a', 1, 0, 0, 0, 0xff]),
            "invalid UTF-8 at byte 9"
        );
        assert_ne!(
            message(&[1, 0, 0, 0, 0xff]),
            message(&[2, 0, 0, 0, b'a'])
        );
    }
}
