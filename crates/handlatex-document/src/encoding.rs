//! Text decoding and encoding by label.
//!
//! Labels follow the WHATWG Encoding Standard (`utf-8`, `latin1`,
//! `iso-8859-15`, `koi8-r`, ...). Encodings without an encoder of their own,
//! such as UTF-16, are written as UTF-8.

use encoding_rs::{DecoderResult, Encoding};
use handlatex_core::error::HandError;

fn lookup(label: &str) -> Result<&'static Encoding, HandError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| HandError::UnknownEncoding {
        encoding: label.to_owned(),
    })
}

/// Decodes `bytes` strictly, stripping a byte order mark that matches the
/// encoding.
///
/// # Errors
///
/// Returns `HandError::UnknownEncoding` if the label is not recognized and
/// `HandError::Decoding` if the bytes are malformed in that encoding; the
/// reason names the byte offset of the first malformed sequence.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, HandError> {
    let encoding = lookup(label)?;

    let bom_len = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if bom_encoding == encoding => bom_len,
        _ => 0,
    };
    let body = &bytes[bom_len..];

    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(body.len())
            .unwrap_or(body.len()),
    );
    let mut consumed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&body[consumed..], &mut text, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => {
                let remaining = body.len() - consumed;
                text.reserve(
                    decoder
                        .max_utf8_buffer_length_without_replacement(remaining)
                        .unwrap_or(remaining)
                        .max(4),
                );
            }
            DecoderResult::Malformed(len, extra) => {
                // The malformed sequence ends `extra` bytes before the read
                // position.
                let offset = (bom_len + consumed)
                    .saturating_sub(usize::from(extra))
                    .saturating_sub(usize::from(len));
                return Err(HandError::Decoding {
                    encoding: encoding.name().to_owned(),
                    reason: format!("malformed byte sequence at offset {offset}"),
                });
            }
        }
    }
}

/// Encodes `text` for writing.
///
/// # Errors
///
/// Returns `HandError::UnknownEncoding` if the label is not recognized and
/// `HandError::Unencodable` if `text` holds characters the encoding cannot
/// represent.
pub fn encode(text: &str, label: &str) -> Result<Vec<u8>, HandError> {
    let encoding = lookup(label)?;

    let (bytes, used, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(HandError::Unencodable {
            encoding: used.name().to_owned(),
        });
    }
    Ok(bytes.into_owned())
}
