use std::collections::HashSet;

/// Get current Unix timestamp in milliseconds
pub fn now_unix_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .try_into()
        .unwrap_or(u64::MAX)
}

/// Mint a time-based id that does not collide with any id in `taken`.
///
/// Starts from `now_ms` and steps forward one millisecond at a time, so ids
/// minted in a burst stay unique and keep increasing.
pub fn mint_id(taken: &HashSet<&str>, now_ms: u64) -> String {
    let mut candidate = now_ms;
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

/// Truncate a string to a maximum number of characters, appending '…' if truncated
pub fn truncate_preview(s: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (count, ch) in s.chars().enumerate() {
        if count >= max_chars {
            out.push('…');
            break;
        }
        if ch == '\n' || ch == '\r' {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}
