use crate::types::Payload;
use bytes::{BufMut, BytesMut};

/// Appends the text rendering of a payload.
///
/// Absent and empty payloads append nothing.
/// Structured and field payloads are encoded into a scratch buffer first, so
/// nothing is appended when JSON encoding fails.
pub(crate) fn write_payload(
    dst: &mut BytesMut,
    payload: Option<&Payload>,
) -> Result<(), serde_json::Error> {
    let Some(payload) = payload else {
        return Ok(());
    };
    match payload {
        Payload::Message(msg) => dst.put_slice(msg.as_bytes()),
        Payload::WriterOutput(data) => dst.put_slice(trim_end_whitespace(data)),
        Payload::Fields(fields) if fields.is_empty() => (),
        Payload::Fields(fields) => {
            let data = serde_json::to_vec(fields)?;
            dst.put_slice(&data);
        }
        Payload::Structured(s) => {
            let mut data = Vec::new();
            s.value.write_json(&mut data)?;
            dst.put_slice(s.type_name.as_bytes());
            dst.put_u8(b' ');
            dst.put_slice(&data);
        }
    }
    Ok(())
}

/// Strips trailing Unicode whitespace.
/// Invalid UTF-8 sequences are kept and stop the trimming.
pub(crate) fn trim_end_whitespace(b: &[u8]) -> &[u8] {
    let mut start = 0;
    loop {
        match std::str::from_utf8(&b[start..]) {
            Ok(s) => return &b[..start + s.trim_end().len()],
            Err(e) => match e.error_len() {
                Some(n) => start += e.valid_up_to() + n,
                // Truncated sequence at the very end
                None => return b,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Fields, Structured};
    use serde::{ser::Error as _, Serialize, Serializer};

    #[derive(Debug, Serialize)]
    struct Connected {
        host: &'static str,
        port: u16,
    }

    #[derive(Debug)]
    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    fn render(payload: Option<&Payload>) -> Result<String, serde_json::Error> {
        let mut buf = BytesMut::new();
        write_payload(&mut buf, payload)?;
        Ok(String::from_utf8(buf.to_vec()).unwrap())
    }

    #[test]
    fn absent_payload_renders_nothing() {
        assert_eq!(render(None).unwrap(), "");
    }

    #[test]
    fn empty_payloads_render_nothing() {
        let p = Payload::Fields(Fields::new());
        assert_eq!(render(Some(&p)).unwrap(), "");

        let p = Payload::writer_output(&b""[..]);
        assert_eq!(render(Some(&p)).unwrap(), "");

        let p = Payload::writer_output(&b" \r\n"[..]);
        assert_eq!(render(Some(&p)).unwrap(), "");

        let p = Payload::message("");
        assert_eq!(render(Some(&p)).unwrap(), "");
    }

    #[test]
    fn message_is_verbatim() {
        let p = Payload::message("  spaced out  ");
        assert_eq!(render(Some(&p)).unwrap(), "  spaced out  ");
    }

    #[test]
    fn writer_output_is_trimmed() {
        let p = Payload::writer_output(&b"captured \t\r\n"[..]);
        assert_eq!(render(Some(&p)).unwrap(), "captured");
    }

    #[test]
    fn fields_are_json() {
        let mut fields = Fields::new();
        fields.insert("b".to_owned(), serde_json::json!([1, 2]));
        fields.insert("a".to_owned(), serde_json::json!("x"));
        let p = Payload::Fields(fields);
        assert_eq!(render(Some(&p)).unwrap(), r#"{"a":"x","b":[1,2]}"#);
    }

    #[test]
    fn structured_is_type_name_and_json() {
        let p = Payload::structured(Connected {
            host: "db-1",
            port: 5432,
        });
        assert_eq!(
            render(Some(&p)).unwrap(),
            r#"Connected {"host":"db-1","port":5432}"#
        );

        let p = Payload::Structured(Structured::named("net.Connected", Connected {
            host: "db-2",
            port: 1,
        }));
        assert_eq!(
            render(Some(&p)).unwrap(),
            r#"net.Connected {"host":"db-2","port":1}"#
        );
    }

    #[test]
    fn failed_encoding_appends_nothing() {
        let mut buf = BytesMut::from(&b"prefix "[..]);
        let p = Payload::structured(Unencodable);
        assert!(write_payload(&mut buf, Some(&p)).is_err());
        assert_eq!(&buf[..], b"prefix ");
    }

    #[test]
    fn trim_unicode_whitespace() {
        assert_eq!(trim_end_whitespace(b"abc"), b"abc");
        assert_eq!(trim_end_whitespace(b"abc \n\t"), b"abc");
        assert_eq!(trim_end_whitespace(" abc\u{a0}\u{2003}".as_bytes()), b" abc");
        assert_eq!(trim_end_whitespace(b"   "), b"");
        assert_eq!(trim_end_whitespace(b""), b"");
    }

    #[test]
    fn trim_leaves_invalid_utf8_tail() {
        assert_eq!(trim_end_whitespace(b"abc \xff"), b"abc \xff");
        assert_eq!(trim_end_whitespace(b"\xffabc  "), b"\xffabc");
        assert_eq!(trim_end_whitespace(b"abc \xe2\x80"), b"abc \xe2\x80");
    }
}
