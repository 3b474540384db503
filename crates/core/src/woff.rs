//! WOFF and WOFF2 containers.
//!
//! HarfBuzz and `read-fonts` only read sfnt data, so web fonts are unwrapped
//! into sfnt before they are inspected or subset, and the subset is wrapped
//! back into the flavor of the input.

use std::{
    borrow::Cow,
    io::{self, Cursor, Read, Write},
};

use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};
use read_fonts::{FontRef, types::Tag};
use write_fonts::FontBuilder;

const WOFF_SIGNATURE: u32 = 0x774F_4646;
const WOFF2_SIGNATURE: u32 = 0x774F_4632;

const SFNT_HEADER_LEN: usize = 12;
const SFNT_RECORD_LEN: usize = 16;
const WOFF_HEADER_LEN: usize = 44;
const WOFF_RECORD_LEN: usize = 20;
const WOFF2_HEADER_LEN: usize = 48;

/// Transform version 3 on `glyf`/`loca` means "stored as is".
const WOFF2_NULL_GLYF_TRANSFORM: u8 = 0b1100_0000;
/// Flag index meaning "an explicit 4-byte tag follows".
const WOFF2_ARBITRARY_TAG: u8 = 63;

/// Tags with a one-byte index in the WOFF2 table directory, in index order.
const WOFF2_KNOWN_TAGS: [&[u8; 4]; 63] = [
    b"cmap", b"head", b"hhea", b"hmtx", b"maxp", b"name", b"OS/2", b"post", b"cvt ", b"fpgm",
    b"glyf", b"loca", b"prep", b"CFF ", b"VORG", b"EBDT", b"EBLC", b"gasp", b"hdmx", b"kern",
    b"LTSH", b"PCLT", b"VDMX", b"vhea", b"vmtx", b"BASE", b"GDEF", b"GPOS", b"GSUB", b"EBSC",
    b"JSTF", b"MATH", b"CBDT", b"CBLC", b"COLR", b"CPAL", b"SVG ", b"sbix", b"acnt", b"avar",
    b"bdat", b"bloc", b"bsln", b"cvar", b"fdsc", b"feat", b"fmtx", b"fvar", b"gvar", b"hsty",
    b"just", b"lcar", b"mort", b"morx", b"opbd", b"prop", b"trak", b"Zapf", b"Silf", b"Glat",
    b"Gloc", b"Feat", b"Sill",
];

/// Container format of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Plain TrueType / OpenType.
    Sfnt,
    Woff,
    Woff2,
}

impl Flavor {
    /// Detects the container from the leading signature.
    pub fn detect(data: &[u8]) -> Self {
        match read_u32(data, 0) {
            Some(WOFF_SIGNATURE) => Self::Woff,
            Some(WOFF2_SIGNATURE) => Self::Woff2,
            _ => Self::Sfnt,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WoffError {
    #[error("truncated WOFF data")]
    Truncated,

    #[error("failed to inflate table {tag}: {source}")]
    Inflate { tag: Tag, source: io::Error },

    #[error("table {tag} inflated to {actual} bytes, expected {expected}")]
    TableLength { tag: Tag, expected: usize, actual: usize },

    #[error("failed to decode WOFF2: {0}")]
    Woff2(#[from] woff2::decode::DecodeError),

    #[error("failed to read sfnt data: {0}")]
    Sfnt(#[from] read_fonts::ReadError),

    #[error("failed to compress font data: {0}")]
    Compress(#[from] io::Error),
}

/// Returns sfnt data for `data`, unwrapping WOFF and WOFF2 containers.
pub fn to_sfnt(data: &[u8]) -> Result<Cow<'_, [u8]>, WoffError> {
    match Flavor::detect(data) {
        Flavor::Sfnt => Ok(Cow::Borrowed(data)),
        Flavor::Woff => decode_woff(data).map(Cow::Owned),
        Flavor::Woff2 => Ok(Cow::Owned(woff2::decode::convert_woff2_to_ttf(&mut Cursor::new(
            data,
        ))?)),
    }
}

/// Wraps sfnt data into `flavor`.
pub fn from_sfnt(sfnt: Vec<u8>, flavor: Flavor) -> Result<Vec<u8>, WoffError> {
    match flavor {
        Flavor::Sfnt => Ok(sfnt),
        Flavor::Woff => encode_woff(&sfnt),
        Flavor::Woff2 => encode_woff2(&sfnt),
    }
}

fn decode_woff(data: &[u8]) -> Result<Vec<u8>, WoffError> {
    let num_tables = read_u16(data, 12).ok_or(WoffError::Truncated)? as usize;
    let mut builder = FontBuilder::new();

    for i in 0..num_tables {
        let record = WOFF_HEADER_LEN + i * WOFF_RECORD_LEN;
        let tag = data.get(record..record + 4).ok_or(WoffError::Truncated)?;
        let tag = Tag::new(&[tag[0], tag[1], tag[2], tag[3]]);
        let offset = read_u32(data, record + 4).ok_or(WoffError::Truncated)? as usize;
        let comp_len = read_u32(data, record + 8).ok_or(WoffError::Truncated)? as usize;
        let orig_len = read_u32(data, record + 12).ok_or(WoffError::Truncated)? as usize;

        let stored = data.get(offset..offset + comp_len).ok_or(WoffError::Truncated)?;
        let table = if comp_len < orig_len {
            let mut inflated = Vec::with_capacity(orig_len);
            ZlibDecoder::new(stored)
                .read_to_end(&mut inflated)
                .map_err(|source| WoffError::Inflate { tag, source })?;
            inflated
        } else {
            stored.to_vec()
        };
        if table.len() != orig_len {
            return Err(WoffError::TableLength { tag, expected: orig_len, actual: table.len() });
        }
        builder.add_raw(tag, table);
    }

    Ok(builder.build())
}

/// Size of the sfnt `sfnt` would decode to, as recorded in WOFF headers.
fn total_sfnt_size(font: &FontRef) -> usize {
    let records = font.table_directory.table_records();
    SFNT_HEADER_LEN
        + records.len() * SFNT_RECORD_LEN
        + records.iter().map(|r| padded_len(r.length() as usize)).sum::<usize>()
}

fn encode_woff(sfnt: &[u8]) -> Result<Vec<u8>, WoffError> {
    let font = FontRef::new(sfnt)?;
    let records = font.table_directory.table_records();

    let mut directory = Vec::with_capacity(records.len() * WOFF_RECORD_LEN);
    let mut table_data = Vec::new();
    let data_start = WOFF_HEADER_LEN + records.len() * WOFF_RECORD_LEN;

    for record in records {
        let tag = record.tag();
        let table = font.table_data(tag).map(|d| d.as_bytes()).unwrap_or_default();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(table)?;
        let compressed = encoder.finish()?;
        let stored = if compressed.len() < table.len() { compressed.as_slice() } else { table };

        directory.extend_from_slice(&tag.to_be_bytes());
        push_u32(&mut directory, (data_start + table_data.len()) as u32);
        push_u32(&mut directory, stored.len() as u32);
        push_u32(&mut directory, table.len() as u32);
        push_u32(&mut directory, record.checksum());

        table_data.extend_from_slice(stored);
        table_data.resize(padded_len(table_data.len()), 0);
    }

    let mut woff = Vec::with_capacity(data_start + table_data.len());
    push_u32(&mut woff, WOFF_SIGNATURE);
    push_u32(&mut woff, font.table_directory.sfnt_version());
    push_u32(&mut woff, (data_start + table_data.len()) as u32);
    push_u16(&mut woff, records.len() as u16);
    push_u16(&mut woff, 0); // reserved
    push_u32(&mut woff, total_sfnt_size(&font) as u32);
    push_u16(&mut woff, 1); // major version
    push_u16(&mut woff, 0); // minor version
    woff.extend_from_slice(&[0; 20]); // no metadata or private block
    debug_assert_eq!(woff.len(), WOFF_HEADER_LEN);

    woff.extend(directory);
    woff.extend(table_data);
    Ok(woff)
}

fn encode_woff2(sfnt: &[u8]) -> Result<Vec<u8>, WoffError> {
    let font = FontRef::new(sfnt)?;
    let records = font.table_directory.table_records();

    let mut directory = Vec::new();
    let mut stream = Vec::new();
    for record in records {
        let tag = record.tag();
        let table = font.table_data(tag).map(|d| d.as_bytes()).unwrap_or_default();
        let bytes = tag.to_be_bytes();

        let mut flags = WOFF2_KNOWN_TAGS
            .iter()
            .position(|known| **known == bytes)
            .map_or(WOFF2_ARBITRARY_TAG, |index| index as u8);
        if bytes == *b"glyf" || bytes == *b"loca" {
            flags |= WOFF2_NULL_GLYF_TRANSFORM;
        }
        directory.push(flags);
        if flags & 0x3F == WOFF2_ARBITRARY_TAG {
            directory.extend_from_slice(&bytes);
        }
        push_uint_base128(&mut directory, table.len() as u32);

        // Tables are concatenated without padding inside the compressed stream.
        stream.extend_from_slice(table);
    }

    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut stream.as_slice(),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams::default(),
    )?;

    let unpadded_len = WOFF2_HEADER_LEN + directory.len() + compressed.len();
    let file_len = padded_len(unpadded_len);

    let mut woff2 = Vec::with_capacity(file_len);
    push_u32(&mut woff2, WOFF2_SIGNATURE);
    push_u32(&mut woff2, font.table_directory.sfnt_version());
    push_u32(&mut woff2, file_len as u32);
    push_u16(&mut woff2, records.len() as u16);
    push_u16(&mut woff2, 0); // reserved
    push_u32(&mut woff2, total_sfnt_size(&font) as u32);
    push_u32(&mut woff2, compressed.len() as u32);
    push_u16(&mut woff2, 1); // major version
    push_u16(&mut woff2, 0); // minor version
    woff2.extend_from_slice(&[0; 20]); // no metadata or private block
    debug_assert_eq!(woff2.len(), WOFF2_HEADER_LEN);

    woff2.extend(directory);
    woff2.extend(compressed);
    woff2.resize(file_len, 0);
    Ok(woff2)
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(4) * 4
}

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    data.get(offset..offset + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    data.get(offset..offset + 4).map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn push_u16(buffer: &mut Vec<u8>, value: u16) {
    buffer.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(buffer: &mut Vec<u8>, value: u32) {
    buffer.extend_from_slice(&value.to_be_bytes());
}

fn push_uint_base128(buffer: &mut Vec<u8>, value: u32) {
    for shift in [28, 21, 14, 7] {
        if value >= 1 << shift {
            buffer.push(0x80 | (value >> shift) as u8);
        }
    }
    buffer.push((value & 0x7F) as u8);
}
