//! Log formatting for workflow runs.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::format_command;

/// Formats log events as workflow commands.
///
/// Debug and trace events become `::debug::`, warnings `::warning::` and
/// errors `::error::`. Info events are printed as plain lines, the way a
/// step writes to its log.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowFormat;

impl WorkflowFormat {
    fn command(level: Level) -> Option<&'static str> {
        if level == Level::ERROR {
            Some("error")
        } else if level == Level::WARN {
            Some("warning")
        } else if level == Level::INFO {
            None
        } else {
            Some("debug")
        }
    }
}

impl<S, N> FormatEvent<S, N> for WorkflowFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        match Self::command(*event.metadata().level()) {
            Some(command) => writeln!(writer, "{}", format_command(command, &[], &message)),
            None => writeln!(writer, "{message}"),
        }
    }
}
