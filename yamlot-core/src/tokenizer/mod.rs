pub use buffered_source::BufferedSource;
pub use indent::IndentStack;
pub use queue::TokenQueue;
pub use reader::Reader;
pub use scanner::{Scanner, Signal, State};
pub use source::{Source, StrSource};
pub use trace::{NoTrace, TraceEvent, TraceSink, TracingSink};

mod buffered_source;
mod char_utils;
mod indent;
mod queue;
mod reader;
mod scanner;
mod source;
mod trace;
