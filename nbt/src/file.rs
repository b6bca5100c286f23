use crate::error::Result;
use crate::reader::NbtReader;
use crate::tag::Compound;
use crate::writer::NbtWriter;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

/// NbtFile is the content of a complete NBT file: the named root compound and the compression
/// that was found on disk (used again when writing the file back).
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
    pub name: String,
    pub root: Compound,
    pub compression: Compression,
}

impl NbtFile {
    /// new creates an unnamed, gzip compressed file, which is how the game writes its data files.
    pub fn new(root: Compound) -> NbtFile {
        NbtFile {
            name: String::new(),
            root,
            compression: Compression::Gzip,
        }
    }
}

/// from_bytes decodes a file from memory. Gzip compressed data is detected by its magic bytes.
pub fn from_bytes(data: &[u8]) -> Result<NbtFile> {
    let ((name, root), compression) = if data.starts_with(&GZIP_MAGIC) {
        (
            NbtReader::new(GzDecoder::new(data)).read_named_root()?,
            Compression::Gzip,
        )
    } else {
        (NbtReader::new(data).read_named_root()?, Compression::None)
    };

    Ok(NbtFile {
        name,
        root,
        compression,
    })
}

/// to_bytes encodes a file into memory using the compression stored in the file.
pub fn to_bytes(file: &NbtFile) -> Result<Vec<u8>> {
    let data = match file.compression {
        Compression::None => {
            let mut writer = NbtWriter::new(Vec::new());
            writer.write_named_root(&file.name, &file.root)?;
            writer.into_inner()
        }
        Compression::Gzip => {
            let encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            let mut writer = NbtWriter::new(encoder);
            writer.write_named_root(&file.name, &file.root)?;
            writer.into_inner().finish()?
        }
    };
    Ok(data)
}

/// read_file loads an NBT file from disk.
pub fn read_file(filepath: &Path) -> Result<NbtFile> {
    let data = fs::read(filepath)?;
    log::debug!("Read {} bytes from {}", data.len(), filepath.display());
    from_bytes(&data)
}

/// write_file encodes the file completely before the target is touched, i.e. an encoding error
/// never leaves a truncated file behind.
pub fn write_file(file: &NbtFile, filepath: &Path) -> Result<()> {
    let data = to_bytes(file)?;
    let mut fh = fs::File::create(filepath)?;
    fh.write_all(&data)?;
    fh.flush()?;
    log::debug!("Wrote {} bytes to {}", data.len(), filepath.display());
    Ok(())
}
