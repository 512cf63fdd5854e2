// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Binary library file format.
//!
//! All integers are big-endian. A file starts with a fixed header:
//!
//! | Field   | Type  | Notes                      |
//! |---------|-------|----------------------------|
//! | magic   | `u32` | [`MAGIC`]                  |
//! | version | `u32` | [`CURRENT_VERSION`] = 2    |
//! | count   | `u32` | number of entries          |
//!
//! followed by `count` entries, each made of the fields listed for the file
//! version in [`fields_for_version`], in exactly that order.
//!
//! Text is a `u32` byte length followed by UTF-16BE code units, and byte
//! buffers are a `u32` length followed by the raw bytes. A length of
//! [`NULL_LENGTH`] marks a null value and reads back as empty.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::{
    model::{AlbumRecord, Library, LibraryEntry, UNRATED, clamp_rating},
    store::StoreError,
};

/// "ACMG"
pub(crate) const MAGIC: u32 = 0x4143_4D47;

pub(crate) const CURRENT_VERSION: u32 = 2;

const NULL_LENGTH: u32 = 0xFFFF_FFFF;

/// One field of a stored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Artist,
    Id,
    ReleaseDate,
    ArtworkUrl,
    Artwork,
    Rating,
}

const FIELDS_V1: &[Field] = &[
    Field::Title,
    Field::Artist,
    Field::Id,
    Field::ReleaseDate,
    Field::ArtworkUrl,
    Field::Artwork,
];

const FIELDS_V2: &[Field] = &[
    Field::Title,
    Field::Artist,
    Field::Id,
    Field::ReleaseDate,
    Field::ArtworkUrl,
    Field::Artwork,
    Field::Rating,
];

/// The entry layout of each supported file version.
pub(crate) fn fields_for_version(version: u32) -> Option<&'static [Field]> {
    match version {
        1 => Some(FIELDS_V1),
        2 => Some(FIELDS_V2),
        _ => None,
    }
}

/// Writes the library, in its current order, using the current file version.
pub(crate) fn encode<W: Write>(library: &Library, writer: &mut W) -> Result<(), StoreError> {
    encode_version(library, CURRENT_VERSION, writer)
}

/// Writes the library using the entry layout of a specific file version.
pub(crate) fn encode_version<W: Write>(
    library: &Library,
    version: u32,
    writer: &mut W,
) -> Result<(), StoreError> {
    let fields = fields_for_version(version).ok_or(StoreError::UnsupportedVersion(version))?;

    let count = u32::try_from(library.len()).map_err(|_| StoreError::TooLarge)?;

    writer.write_u32::<BigEndian>(MAGIC)?;
    writer.write_u32::<BigEndian>(version)?;
    writer.write_u32::<BigEndian>(count)?;

    for entry in library.entries() {
        for field in fields {
            write_field(writer, entry, *field)?;
        }
    }

    Ok(())
}

fn write_field<W: Write>(writer: &mut W, entry: &LibraryEntry, field: Field) -> Result<(), StoreError> {
    let album = &entry.album;
    match field {
        Field::Title => write_text(writer, &album.title),
        Field::Artist => write_text(writer, &album.artist),
        Field::Id => write_text(writer, &album.id),
        Field::ReleaseDate => write_text(writer, &album.release_date),
        Field::ArtworkUrl => write_text(writer, &album.artwork_url),
        Field::Artwork => write_bytes(writer, &entry.artwork),
        Field::Rating => Ok(writer.write_i32::<BigEndian>(entry.rating)?),
    }
}

fn write_text<W: Write>(writer: &mut W, text: &str) -> Result<(), StoreError> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let len = units
        .len()
        .checked_mul(2)
        .and_then(|len| u32::try_from(len).ok())
        .filter(|len| *len != NULL_LENGTH)
        .ok_or(StoreError::TooLarge)?;

    writer.write_u32::<BigEndian>(len)?;
    for unit in units {
        writer.write_u16::<BigEndian>(unit)?;
    }

    Ok(())
}

fn write_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<(), StoreError> {
    let len = u32::try_from(bytes.len())
        .ok()
        .filter(|len| *len != NULL_LENGTH)
        .ok_or(StoreError::TooLarge)?;

    writer.write_u32::<BigEndian>(len)?;
    writer.write_all(bytes)?;

    Ok(())
}

/// Reads a complete library.
///
/// Nothing is returned unless the whole stream decodes; a truncated or
/// malformed stream yields [`StoreError::CorruptFile`].
///
/// Entries come back in stored order. Later entries repeating an identifier
/// already seen are dropped.
pub(crate) fn decode<R: Read>(reader: &mut R) -> Result<DecodedLibrary, StoreError> {
    let magic = read_u32(reader)?;
    if magic != MAGIC {
        return Err(StoreError::CorruptFile);
    }

    let version = read_u32(reader)?;
    let fields = fields_for_version(version).ok_or(StoreError::UnsupportedVersion(version))?;

    let count = read_u32(reader)?;

    // The count is untrusted, so don't let it size the allocation
    let mut entries = Vec::new();
    for _ in 0..count {
        entries.push(read_entry(reader, fields)?);
    }

    let (library, duplicates) = Library::from_entries(entries);

    Ok(DecodedLibrary {
        library,
        version,
        duplicates: duplicates.len(),
    })
}

/// The outcome of a successful decode.
#[derive(Debug)]
pub(crate) struct DecodedLibrary {
    pub(crate) library: Library,
    pub(crate) version: u32,
    pub(crate) duplicates: usize,
}

fn read_entry<R: Read>(reader: &mut R, fields: &[Field]) -> Result<LibraryEntry, StoreError> {
    let mut album = AlbumRecord::default();
    let mut artwork = vec![];
    let mut rating = UNRATED;

    for field in fields {
        match field {
            Field::Title => album.title = read_text(reader)?,
            Field::Artist => album.artist = read_text(reader)?,
            Field::Id => album.id = read_text(reader)?,
            Field::ReleaseDate => album.release_date = read_text(reader)?,
            Field::ArtworkUrl => album.artwork_url = read_text(reader)?,
            Field::Artwork => artwork = read_bytes(reader)?,
            Field::Rating => rating = clamp_rating(read_i32(reader)?),
        }
    }

    Ok(LibraryEntry {
        album,
        rating,
        artwork,
    })
}

fn read_text<R: Read>(reader: &mut R) -> Result<String, StoreError> {
    let bytes = read_bytes(reader)?;
    if bytes.len() % 2 != 0 {
        return Err(StoreError::CorruptFile);
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|_| StoreError::CorruptFile)
}

fn read_bytes<R: Read>(reader: &mut R) -> Result<Vec<u8>, StoreError> {
    let len = read_u32(reader)?;
    if len == NULL_LENGTH {
        return Ok(vec![]);
    }

    let mut bytes = Vec::new();
    reader.by_ref().take(u64::from(len)).read_to_end(&mut bytes)?;
    if bytes.len() != len as usize {
        return Err(StoreError::CorruptFile);
    }

    Ok(bytes)
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, StoreError> {
    reader.read_u32::<BigEndian>().map_err(truncated)
}

fn read_i32<R: Read>(reader: &mut R) -> Result<i32, StoreError> {
    reader.read_i32::<BigEndian>().map_err(truncated)
}

fn truncated(err: io::Error) -> StoreError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        StoreError::CorruptFile
    } else {
        StoreError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortOrder;

    fn album(id: &str, title: &str, artist: &str) -> AlbumRecord {
        AlbumRecord {
            title: title.to_string(),
            artist: artist.to_string(),
            id: id.to_string(),
            release_date: "1977-10-14".to_string(),
            artwork_url: format!("https://i.scdn.co/image/{id}"),
        }
    }

    fn sample_library() -> Library {
        let mut library = Library::new(SortOrder::Artist);
        library.add(album("4uG8q3", "Low", "David Bowie"), vec![0x89, b'P', b'N', b'G']);
        library.add(album("1aZ9xx", "Homogenic", "Björk"), vec![]);
        library.add(album("7kQ2pl", "Tago Mago", "Can"), vec![1, 2, 3, 4, 5]);
        library.set_rating("1aZ9xx", 9);
        library.set_rating("7kQ2pl", 6);
        library
    }

    fn to_bytes(library: &Library) -> Vec<u8> {
        let mut bytes = vec![];
        encode(library, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn round_trip_empty_library() {
        let library = Library::default();
        let bytes = to_bytes(&library);

        assert_eq!(bytes.len(), 12);

        let decoded = decode(&mut bytes.as_slice()).unwrap();
        assert!(decoded.library.is_empty());
        assert_eq!(decoded.version, CURRENT_VERSION);
    }

    #[test]
    fn round_trip_single_entry() {
        let mut library = Library::default();
        library.add(album("x", "Title", "Artist"), vec![7; 32]);
        library.set_rating("x", 3);

        let decoded = decode(&mut to_bytes(&library).as_slice()).unwrap();

        assert_eq!(decoded.library.entries(), library.entries());
    }

    #[test]
    fn round_trip_keeps_order_and_ratings() {
        let mut library = sample_library();
        library.set_sort_order(SortOrder::Rating);

        let decoded = decode(&mut to_bytes(&library).as_slice()).unwrap();

        assert_eq!(decoded.library.entries(), library.entries());
        assert_eq!(decoded.duplicates, 0);
        for entry in library.entries() {
            assert!(decoded.library.contains(&entry.album.id));
        }
    }

    #[test]
    fn header_layout() {
        let bytes = to_bytes(&sample_library());

        assert_eq!(&bytes[0..4], b"ACMG");
        assert_eq!(&bytes[4..8], &[0, 0, 0, 2]);
        assert_eq!(&bytes[8..12], &[0, 0, 0, 3]);
    }

    #[test]
    fn text_is_utf16_big_endian() {
        let mut bytes = vec![];
        write_text(&mut bytes, "Bö").unwrap();

        assert_eq!(bytes, vec![0, 0, 0, 4, 0x00, b'B', 0x00, 0xF6]);
        assert_eq!(read_text(&mut bytes.as_slice()).unwrap(), "Bö");
    }

    #[test]
    fn null_lengths_read_as_empty() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF];

        assert_eq!(read_text(&mut bytes.as_slice()).unwrap(), "");
        assert!(read_bytes(&mut bytes.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn version_one_defaults_ratings() {
        let library = sample_library();
        let mut bytes = vec![];
        encode_version(&library, 1, &mut bytes).unwrap();

        let decoded = decode(&mut bytes.as_slice()).unwrap();

        assert_eq!(decoded.version, 1);
        assert_eq!(decoded.library.len(), 3);
        assert!(decoded.library.entries().iter().all(|e| e.rating == 0));
        assert_eq!(decoded.library.entries()[0].album, library.entries()[0].album);
        assert_eq!(decoded.library.entries()[2].artwork, library.entries()[2].artwork);
    }

    #[test]
    fn wrong_magic_is_corrupt() {
        let mut bytes = to_bytes(&sample_library());
        bytes[0] = b'X';

        assert!(matches!(decode(&mut bytes.as_slice()), Err(StoreError::CorruptFile)));
    }

    #[test]
    fn truncated_stream_is_corrupt() {
        let bytes = to_bytes(&sample_library());

        for len in [0, 3, 8, 11, 20, bytes.len() - 1] {
            let result = decode(&mut &bytes[..len]);
            assert!(matches!(result, Err(StoreError::CorruptFile)), "length {len}");
        }
    }

    #[test]
    fn missing_entries_are_corrupt() {
        let mut bytes = to_bytes(&sample_library());
        // Claim one more entry than was written
        bytes[11] = 4;

        assert!(matches!(decode(&mut bytes.as_slice()), Err(StoreError::CorruptFile)));
    }

    #[test]
    fn unknown_versions_are_unsupported() {
        for version in [0u32, 3, 99] {
            let mut bytes = to_bytes(&Library::default());
            bytes[4..8].copy_from_slice(&version.to_be_bytes());

            let result = decode(&mut bytes.as_slice());
            assert!(matches!(result, Err(StoreError::UnsupportedVersion(v)) if v == version));
        }
    }

    #[test]
    fn odd_text_length_is_corrupt() {
        let bytes = [0, 0, 0, 3, 0, b'a', 0];

        assert!(matches!(read_text(&mut bytes.as_slice()), Err(StoreError::CorruptFile)));
    }

    #[test]
    fn stored_ratings_are_clamped() {
        let mut library = Library::default();
        library.add(album("x", "T", "A"), vec![]);
        let mut bytes = to_bytes(&library);
        let len = bytes.len();
        bytes[len - 4..].copy_from_slice(&42i32.to_be_bytes());

        let decoded = decode(&mut bytes.as_slice()).unwrap();

        assert_eq!(decoded.library.entries()[0].rating, 10);
    }

    #[test]
    fn duplicate_identifiers_keep_first() {
        let mut first = Library::default();
        first.add(album("dup", "First", "A"), vec![]);
        let mut bytes = to_bytes(&first);
        let entry = bytes[12..].to_vec();
        bytes.extend_from_slice(&entry);
        bytes[11] = 2;

        let decoded = decode(&mut bytes.as_slice()).unwrap();

        assert_eq!(decoded.library.len(), 1);
        assert_eq!(decoded.duplicates, 1);
    }
}
