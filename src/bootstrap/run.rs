//! Terminal run loop: load once, then re-render on every query line.

use std::io::Write;

use anyhow::Context;
use bg_app::CatalogSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use super::render::{render_view, PROMPT};

/// Drive a catalog session from line-oriented input.
///
/// Each input line replaces the search query; a line that is not valid UTF-8
/// is skipped. Ends at end of input.
pub async fn run_app<R, W>(mut session: CatalogSession, mut input: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    redraw(&session, &mut out)?;

    let entries = session.load().await;
    info!(entries = entries.len(), "Catalog ready");
    redraw(&session, &mut out)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read query")?;
        if read == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        match std::str::from_utf8(line) {
            Ok(query) => {
                debug!(query, "Query updated");
                session.set_query(query);
            }
            Err(e) => {
                warn!(error = %e, bytes = line.len(), "Ignoring query that is not valid UTF-8");
            }
        }
        redraw(&session, &mut out)?;
    }

    writeln!(out).context("Failed to write output")?;
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn redraw<W: Write>(session: &CatalogSession, out: &mut W) -> anyhow::Result<()> {
    render_view(&session.view(), session.query(), out).context("Failed to render catalog")?;
    write!(out, "{PROMPT}").context("Failed to write prompt")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
