use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read the whole file and split it into lines.
///
/// The separator is `"\r\n"` when the content contains one, otherwise
/// `"\n"`; content without any newline is returned as a single line. A
/// trailing newline yields a trailing empty string, matching a plain
/// `split` on the separator.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    let lines = if data.contains("\r\n") {
        data.split("\r\n").map(str::to_owned).collect()
    } else if data.contains('\n') {
        data.split('\n').map(str::to_owned).collect()
    } else {
        vec![data]
    };
    Ok(lines)
}

/// Buffered line-by-line reader over a file.
///
/// Streams the file instead of loading it whole; each item is one line
/// with its newline stripped.
pub struct LineReader {
    inner: io::Lines<BufReader<fs::File>>,
}

impl LineReader {
    /// Open `path` for streaming line reads.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        Ok(LineReader {
            inner: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for LineReader {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn splits_on_lf() {
        let td = tempdir().unwrap();
        let f = td.path().join("lf.txt");
        fs::write(&f, "one\ntwo\nthree").unwrap();
        assert_eq!(read_lines(&f).unwrap(), ["one", "two", "three"]);
    }

    #[test]
    fn prefers_crlf_when_present() {
        let td = tempdir().unwrap();
        let f = td.path().join("crlf.txt");
        fs::write(&f, "one\r\ntwo\r\nthree").unwrap();
        assert_eq!(read_lines(&f).unwrap(), ["one", "two", "three"]);
    }

    #[test]
    fn no_newline_is_one_line() {
        let td = tempdir().unwrap();
        let f = td.path().join("single.txt");
        fs::write(&f, "just one").unwrap();
        assert_eq!(read_lines(&f).unwrap(), ["just one"]);
    }

    #[test]
    fn trailing_newline_yields_empty_tail() {
        let td = tempdir().unwrap();
        let f = td.path().join("tail.txt");
        fs::write(&f, "a\nb\n").unwrap();
        assert_eq!(read_lines(&f).unwrap(), ["a", "b", ""]);
    }

    #[test]
    fn streaming_reader_matches_content() {
        let td = tempdir().unwrap();
        let f = td.path().join("stream.txt");
        fs::write(&f, "alpha\nbeta\ngamma\n").unwrap();

        let got: Vec<String> = LineReader::open(&f)
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(got, ["alpha", "beta", "gamma"]);
    }
}
