//! The welcome / send / reply round trip over an open connection.

use std::io::Write;

use crate::{
    config::ProbeConfig,
    domain::{ReplyOutcome, interpret_reply},
    error::ProbeError,
    formatter::ProbeFormatter,
    protocol::ClientFrame,
    transport::FrameTransport,
};

/// Run one round trip and write the report to `out`.
///
/// Reads the welcome frame, sends the configured message as a `send_message`
/// frame and waits at most `config.reply_timeout` for the reply. The
/// connection is left open; closing it is the caller's job.
pub async fn run_probe_session<T, W>(
    transport: &mut T,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ReplyOutcome, ProbeError>
where
    T: FrameTransport + ?Sized,
    W: Write,
{
    let welcome = transport
        .next_text()
        .await?
        .ok_or(ProbeError::ClosedBeforeWelcome)?;
    tracing::debug!("Welcome frame: {} bytes", welcome.len());
    writeln!(out, "{}", ProbeFormatter::format_welcome(&welcome))?;

    let frame = ClientFrame::send_message(
        config.channel_id.clone(),
        config.channel_type,
        config.message.clone(),
    );
    let json = serde_json::to_string(&frame).map_err(ProbeError::Encode)?;
    transport.send_text(json).await?;
    writeln!(out, "{}", ProbeFormatter::format_sent(&config.message))?;
    tracing::info!(
        "Sent message to {}/{}, waiting up to {:?} for a reply",
        config.channel_type,
        config.channel_id,
        config.reply_timeout
    );

    let reply = tokio::time::timeout(config.reply_timeout, transport.next_text())
        .await
        .map_err(|_| ProbeError::ReplyTimeout(config.reply_timeout))??
        .ok_or(ProbeError::ClosedBeforeReply)?;
    tracing::debug!("Reply frame: {} bytes", reply.len());

    let outcome = interpret_reply(&reply)?;
    writeln!(out, "{}", ProbeFormatter::format_outcome(&outcome))?;

    Ok(outcome)
}
