use std::io::prelude::*;
use std::io::Cursor;
use zip::read::ZipFile;

pub type PseudoFile = Cursor<Vec<u8>>;

/// Pull one archive entry fully into memory so quick-xml can take it
/// as a seekable reader after the borrow on the archive ends.
pub fn zip_to_pseudofile(mut zip: ZipFile) -> Result<PseudoFile, zip::result::ZipError> {
    let mut tmp = Cursor::new(Vec::with_capacity(zip.size() as usize));
    zip.read_to_end(tmp.get_mut())?;
    Ok(tmp)
}
