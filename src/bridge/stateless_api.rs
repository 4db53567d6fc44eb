// In: src/bridge/stateless_api.rs

use crate::bridge::format::DoubleStats;
use crate::bridge::host_value::HostValue;
use crate::config::CounterConfig;
use crate::error::DoublesError;
use crate::kernels;

/// Counts adjacent equal bytes in the UTF-8 encoding of a text value.
/// Fails with `InvalidArgumentType` before touching anything that is not text.
pub fn count_doubles(value: &HostValue) -> Result<u64, DoublesError> {
    let bytes = value.utf8_bytes("count_doubles")?;
    Ok(kernels::count_byte_doubles(bytes))
}

/// Counts adjacent equal characters in one pass.
pub fn count_doubles_once(value: &HostValue) -> Result<u64, DoublesError> {
    let text = value.text("count_doubles_once")?;
    Ok(kernels::count_char_doubles_once(text))
}

/// Counts adjacent equal UTF-8 bytes in one pass.
pub fn count_doubles_once_bytes(value: &HostValue) -> Result<u64, DoublesError> {
    let bytes = value.utf8_bytes("count_doubles_once_bytes")?;
    Ok(kernels::count_byte_doubles_once(bytes))
}

/// Counts with an explicit unit and traversal.
pub fn count_with(value: &HostValue, config: &CounterConfig) -> Result<u64, DoublesError> {
    let text = value.text("count_doubles_with")?;
    let count = kernels::dispatch(text, config);
    log_metric!(
        "event" = "count_with",
        "unit" = format!("{:?}", config.unit),
        "traversal" = format!("{:?}", config.traversal),
        "byte_len" = text.len(),
        "count" = count
    );
    Ok(count)
}

/// Computes byte- and character-level statistics for a text value.
pub fn analyze(value: &HostValue) -> Result<DoubleStats, DoublesError> {
    let text = value.text("analyze_doubles")?;
    let bytes = text.as_bytes();

    let stats = DoubleStats {
        byte_len: bytes.len() as u64,
        char_len: text.chars().count() as u64,
        byte_pairs: bytes.len().saturating_sub(1) as u64,
        byte_doubles: kernels::count_byte_doubles(bytes),
        char_doubles: kernels::count_char_doubles(text),
    };

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("analyze_doubles: {}", stats.to_json()?);
    }

    Ok(stats)
}
