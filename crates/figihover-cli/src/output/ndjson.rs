use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Writes one JSON document per line, flushing after each.
pub struct NdjsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn emit<T: Serialize>(&mut self, value: &T) -> Result<(), CliError> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_compact_lines() {
        let mut writer = NdjsonWriter::new(Vec::new());
        writer.emit(&json!({ "id": 1 })).expect("emit");
        writer.emit(&json!({ "id": 2 })).expect("emit");

        let out = String::from_utf8(writer.into_inner()).expect("utf-8");
        assert_eq!(out, "{\"id\":1}\n{\"id\":2}\n");
    }
}
