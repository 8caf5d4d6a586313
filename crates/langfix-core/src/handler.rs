use crate::error::SinkError;
use crate::mapper::CharacterMap;
use crate::types::Conversion;
use tracing::debug;

/// Where conversion results are displayed.
pub trait ResultSink {
    fn show(&mut self, conversion: &Conversion) -> Result<(), SinkError>;
}

/// Glue between a host's "convert" event and the character map.
pub struct ConvertHandler<S: ResultSink> {
    map: &'static CharacterMap,
    sink: S,
}

impl<S: ResultSink> ConvertHandler<S> {
    pub fn new(sink: S) -> Self {
        Self {
            map: CharacterMap::kedmanee(),
            sink,
        }
    }

    /// Translates `input` and forwards the result to the sink.
    pub fn on_convert(&mut self, input: &str) -> Result<Conversion, SinkError> {
        let conversion = Conversion::new(input, self.map.translate(input));
        debug!("Convert: {:?} -> {:?}", conversion.input, conversion.output);
        self.sink.show(&conversion)?;
        Ok(conversion)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Keeps display lines in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    lines: Vec<String>,
    closed: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Further results are rejected with [`SinkError::Closed`].
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl ResultSink for VecSink {
    fn show(&mut self, conversion: &Conversion) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.lines.push(conversion.display_text());
        Ok(())
    }
}
