use super::MessageSink;
use crate::line_mode::LineMode;
use crate::record::ConsoleRecord;
use std::borrow::Borrow;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    fn render_record(&mut self, record: &ConsoleRecord, append_newline: bool) -> io::Result<()> {
        let text = record.render_text();
        self.writer.write_all(text.as_bytes())?;
        if append_newline {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes a single record using the sink's current [`LineMode`].
    pub fn write<R>(&mut self, record: R) -> io::Result<()>
    where
        R: Borrow<ConsoleRecord>,
    {
        self.render_record(record.borrow(), self.line_mode.append_newline())
    }

    /// Writes `record` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode<R>(&mut self, record: R, line_mode: LineMode) -> io::Result<()>
    where
        R: Borrow<ConsoleRecord>,
    {
        self.render_record(record.borrow(), line_mode.append_newline())
    }

    /// Writes each record from the iterator to the underlying writer.
    pub fn write_all<I, R>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = R>,
        R: Borrow<ConsoleRecord>,
    {
        let append_newline = self.line_mode.append_newline();
        for record in records {
            self.render_record(record.borrow(), append_newline)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Emphasis, Stream};

    fn record(tag: &str, args: &[&str]) -> ConsoleRecord {
        ConsoleRecord::new(
            Stream::Log,
            tag,
            args.iter().map(|arg| (*arg).to_owned()).collect(),
        )
    }

    #[test]
    fn sink_appends_newlines_by_default() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write(record("[a]", &["one"])).expect("write succeeds");
        sink.write(record("[b]", &["two", "three"]))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[a] one"));
        assert_eq!(lines.next(), Some("[b] two three"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn write_with_mode_overrides_once() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write_with_mode(record("[a]", &[]), LineMode::WithoutNewline)
            .expect("write succeeds");
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert_eq!(sink.into_inner(), b"[a]".to_vec());
    }

    #[test]
    fn write_all_streams_every_record() {
        let mut sink: MessageSink<Vec<u8>> = MessageSink::default();
        let records = vec![record("[a]", &["1"]), record("[b]", &["2"]), record("[c]", &["3"])];
        let expected = records.len();
        sink.write_all(&records).expect("batch write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), expected);
    }

    #[test]
    fn severe_record_sits_between_blank_lines() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write(record("[x]", &["boom"]).with_emphasis(Emphasis::Severe))
            .expect("write succeeds");
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "\n[x] boom\n\n");
    }

    #[test]
    fn set_line_mode_applies_to_later_writes() {
        let mut sink = MessageSink::new(Vec::new());
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.write(record("[a]", &["x"])).expect("write succeeds");
        sink.flush().expect("flush succeeds");
        assert_eq!(sink.get_ref().as_slice(), b"[a] x");
    }
}
