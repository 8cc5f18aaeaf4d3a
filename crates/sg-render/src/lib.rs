/// Output sinks for rendered character grids.
///
/// One trait, two destinations: the console and a standalone HTML page.

pub mod console;
pub mod html;
pub mod sink;

pub use console::ConsoleSink;
pub use html::HtmlSink;
pub use sink::AsciiSink;
