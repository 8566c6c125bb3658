//! Line-by-line reader for newline-delimited lightning events.

use std::io::BufRead;

use super::{EventError, LightningEvent};

/// Streaming iterator over the events in a reader.
///
/// Yields one item per non-blank line. A line that does not decode into a
/// [`LightningEvent`], including one that is not valid UTF-8, yields
/// [`EventError::Malformed`] and iteration continues with the next line. An
/// I/O error is yielded once and ends iteration.
pub struct EventReader<R: BufRead> {
    reader: R,
    line_buffer: Vec<u8>,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: Vec::new(),
            line_number: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far, including blank ones.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<LightningEvent, EventError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.line_buffer.clear();
            match self.reader.read_until(b'\n', &mut self.line_buffer) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;

                    let line = self.line_buffer.trim_ascii();
                    if line.is_empty() {
                        continue;
                    }

                    return Some(serde_json::from_slice(line).map_err(|source| {
                        EventError::Malformed {
                            line: self.line_number,
                            source,
                        }
                    }));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(EventError::Io(e)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_one_event_per_line() {
        let input = r#"{"flashType":1,"latitude":33.5524951,"longitude":-94.5822016}
{"flashType":0,"latitude":8.7020914,"longitude":-12.5358549}
"#;
        let events: Vec<LightningEvent> = EventReader::new(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], LightningEvent::new(1, 33.5524951, -94.5822016));
        assert_eq!(events[1], LightningEvent::new(0, 8.7020914, -12.5358549));
    }

    #[test]
    fn test_skips_blank_lines() {
        let input = "\n{\"flashType\":0,\"latitude\":1.0,\"longitude\":2.0}\n\n   \n";
        let mut reader = EventReader::new(input.as_bytes());

        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().is_none());
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_last_line_without_newline() {
        let input = r#"{"flashType":0,"latitude":1.0,"longitude":2.0}"#;
        let events: Vec<_> = EventReader::new(input.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_ok());
    }

    #[test]
    fn test_malformed_line_reports_line_number_and_continues() {
        let input = r#"{"flashType":0,"latitude":1.0,"longitude":2.0}
not json
{"flashType":"cg","latitude":1.0,"longitude":2.0}
{"flashType":1,"latitude":3.0,"longitude":4.0}
"#;
        let results: Vec<_> = EventReader::new(input.as_bytes()).collect();
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(EventError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            results[2],
            Err(EventError::Malformed { line: 3, .. })
        ));
        assert!(results[3].is_ok());
    }

    #[test]
    fn test_invalid_utf8_line_is_malformed() {
        let mut input = b"{\"flashType\":0,\"latitude\":1.0,\"longitude\":2.0}\n".to_vec();
        input.extend_from_slice(b"{\"flashType\":0,\"note\":\"\xff\xfe\"}\n");
        input.extend_from_slice(b"{\"flashType\":1,\"latitude\":3.0,\"longitude\":4.0}\n");

        let results: Vec<_> = EventReader::new(input.as_slice()).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(EventError::Malformed { line: 2, .. })
        ));
        assert_eq!(
            results[2].as_ref().unwrap(),
            &LightningEvent::new(1, 3.0, 4.0)
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "{\"flashType\":0,\"latitude\":1.0,\"longitude\":2.0}\r\n\r\n";
        let events: Vec<_> = EventReader::new(input.as_bytes()).collect();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(EventReader::new("".as_bytes()).count(), 0);
    }
}
