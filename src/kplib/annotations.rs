use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::{
    file_util::check_file_exists,
    kperr,
    result::{KpError, KpResult},
};

/// One line `<label> <x> <y>` of an annotation file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnoRecord {
    pub label: String,
    pub x: i32,
    pub y: i32,
}
impl AnnoRecord {
    pub fn center(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
impl FromStr for AnnoRecord {
    type Err = KpError;
    fn from_str(s: &str) -> KpResult<Self> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        match tokens[..] {
            [label, x, y] => {
                let parse_coord = |name: &str, token: &str| {
                    token
                        .parse::<i32>()
                        .map_err(|e| kperr!("{name}-coordinate '{token}' is not an integer, {e}"))
                };
                Ok(AnnoRecord {
                    label: label.to_string(),
                    x: parse_coord("x", x)?,
                    y: parse_coord("y", y)?,
                })
            }
            _ => Err(kperr!(
                "expected 3 whitespace separated tokens but found {}",
                tokens.len()
            )),
        }
    }
}

/// Parses one line, `line_nr` is 1-based and only used for the error message.
pub fn parse_line(line: &str, line_nr: usize) -> KpResult<AnnoRecord> {
    line.parse::<AnnoRecord>()
        .map_err(|e| kperr!("line {line_nr} '{line}': {}", e.msg()))
}

/// Lazily yields one record per line. After the first error nothing else is yielded.
pub struct AnnoReader<R: BufRead> {
    lines: Lines<R>,
    line_nr: usize,
    failed: bool,
}
impl<R: BufRead> AnnoReader<R> {
    pub fn new(reader: R) -> Self {
        AnnoReader {
            lines: reader.lines(),
            line_nr: 0,
            failed: false,
        }
    }
}
impl AnnoReader<BufReader<File>> {
    /// The file is closed when the reader is dropped.
    pub fn open(path: &Path) -> KpResult<Self> {
        check_file_exists(path)?;
        let file =
            File::open(path).map_err(|e| kperr!("could not open annotations {path:?}, {e}"))?;
        debug!("opened annotations {path:?}");
        Ok(Self::new(BufReader::new(file)))
    }
}
impl<R: BufRead> Iterator for AnnoReader<R> {
    type Item = KpResult<AnnoRecord>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = self.lines.next()?;
        self.line_nr += 1;
        let res = line
            .map_err(|e| kperr!("could not read line {}, {e}", self.line_nr))
            .and_then(|line| parse_line(&line, self.line_nr));
        self.failed = res.is_err();
        Some(res)
    }
}

pub fn read_annotations(path: &Path) -> KpResult<Vec<AnnoRecord>> {
    AnnoReader::open(path)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_util::get_test_folder;
    use std::io::Cursor;

    fn reader(s: &'static str) -> AnnoReader<Cursor<&'static str>> {
        AnnoReader::new(Cursor::new(s))
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("a 10 20", 1).unwrap(),
            AnnoRecord {
                label: "a".to_string(),
                x: 10,
                y: 20
            }
        );
        let rec = parse_line("  nose\t-3   45  ", 1).unwrap();
        assert_eq!(rec.label, "nose");
        assert_eq!(rec.center(), (-3, 45));
    }

    #[test]
    fn test_parse_line_malformed() {
        let err = parse_line("a 10", 4).unwrap_err();
        assert!(err.msg().starts_with("line 4"));
        assert!(err.msg().contains("found 2"));
        assert!(parse_line("a 10 20 30", 1).is_err());
        assert!(parse_line("", 1).is_err());
        let err = parse_line("a x 20", 1).unwrap_err();
        assert!(err.msg().contains("x-coordinate 'x'"));
        assert!(parse_line("a 10 2.5", 1).is_err());
    }

    #[test]
    fn test_reader_order() {
        let records = reader("a 10 20\nb 30 40\n")
            .collect::<KpResult<Vec<_>>>()
            .unwrap();
        let centers = records.iter().map(AnnoRecord::center).collect::<Vec<_>>();
        assert_eq!(centers, vec![(10, 20), (30, 40)]);
        assert_eq!(records[1].label, "b");
    }

    #[test]
    fn test_reader_stops_after_error() {
        let mut r = reader("a 10 20\nb 30\nc 50 60\n");
        assert!(r.next().unwrap().is_ok());
        let err = r.next().unwrap().unwrap_err();
        assert!(err.msg().starts_with("line 2"));
        assert!(r.next().is_none());
    }

    #[test]
    fn test_read_annotations_file() {
        let records = read_annotations(&get_test_folder().join("out.txt")).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].center(), (10, 20));
        assert!(read_annotations(&get_test_folder().join("out_malformed.txt")).is_err());
        assert!(read_annotations(&get_test_folder().join("doesnotexist.txt")).is_err());
    }
}
