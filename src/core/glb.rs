// glTF-binary (GLB) container parsing.
//
// A GLB file is a 12-byte header followed by length-prefixed chunks. The
// first chunk must be the glTF JSON document; an optional BIN chunk carries
// the packed geometry the JSON accessors point into.

use nom::bytes::complete::{tag, take};
use nom::number::complete::le_u32;
use nom::IResult;
use thiserror::Error;

const GLB_MAGIC: &[u8] = b"glTF";
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"

#[derive(Debug, Error)]
pub enum GlbError {
    #[error("not a GLB container (bad magic)")]
    BadMagic,
    #[error("unsupported GLB version {0}")]
    UnsupportedVersion(u32),
    #[error("truncated GLB container")]
    Truncated,
    #[error("first chunk is not the glTF JSON document")]
    MissingJson,
}

/// Borrowed views into the two chunks of a GLB file.
pub struct GlbChunks<'a> {
    pub json: &'a [u8],
    pub bin: Option<&'a [u8]>,
}

fn header(input: &[u8]) -> IResult<&[u8], u32> {
    let (input, _) = tag(GLB_MAGIC)(input)?;
    let (input, version) = le_u32(input)?;
    let (input, _total_len) = le_u32(input)?;
    Ok((input, version))
}

fn chunk(input: &[u8]) -> IResult<&[u8], (u32, &[u8])> {
    let (input, len) = le_u32(input)?;
    let (input, kind) = le_u32(input)?;
    let (input, data) = take(len)(input)?;
    Ok((input, (kind, data)))
}

/// Split a GLB byte buffer into its JSON and BIN chunks. Chunks after the
/// first BIN chunk are ignored, as the format prescribes.
pub fn parse_glb(bytes: &[u8]) -> Result<GlbChunks<'_>, GlbError> {
    let (rest, version) = header(bytes).map_err(|e| match e {
        nom::Err::Error(err) | nom::Err::Failure(err)
            if err.code == nom::error::ErrorKind::Tag =>
        {
            GlbError::BadMagic
        }
        _ => GlbError::Truncated,
    })?;
    if version != GLB_VERSION {
        return Err(GlbError::UnsupportedVersion(version));
    }

    let (rest, (kind, json)) = chunk(rest).map_err(|_| GlbError::Truncated)?;
    if kind != CHUNK_JSON {
        return Err(GlbError::MissingJson);
    }

    let mut bin = None;
    let mut cursor = rest;
    while !cursor.is_empty() {
        let Ok((next, (kind, data))) = chunk(cursor) else {
            // Trailing padding shorter than a chunk header.
            break;
        };
        if kind == CHUNK_BIN {
            bin = Some(data);
            break;
        }
        cursor = next;
    }

    Ok(GlbChunks { json, bin })
}
