use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read a whole file into a Vec.
/// Uses exact-size allocation from fstat + a read loop, so small inputs
/// (the usual case for text tools) cost a single allocation.
pub fn read_file_vec(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let len = file.metadata()?.len() as usize;
    if len == 0 {
        // Size 0 may still mean a pipe or procfs entry; fall back to read_to_end.
        let mut buf = Vec::new();
        (&file).read_to_end(&mut buf)?;
        return Ok(buf);
    }
    let mut buf = vec![0u8; len];
    let n = read_full(&mut &file, &mut buf)?;
    buf.truncate(n);
    Ok(buf)
}

/// Read all of stdin into a Vec.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(64 * 1024);
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read FILE, or stdin when FILE is absent or `-`.
pub fn read_input(file: Option<&str>) -> io::Result<Vec<u8>> {
    match file {
        None | Some("-") => read_stdin(),
        Some(name) => read_file_vec(Path::new(name)),
    }
}

/// Read as many bytes as possible into buf, retrying on partial reads
/// and EINTR. Returns the number of bytes read (less than buf.len()
/// only at EOF).
pub fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
