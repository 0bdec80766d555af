//! Inbox forwarding workflow. Not implemented; this only describes it.

/// Describe what forwarding a thread to `destination` would do.
pub fn describe_forwarding_workflow(destination: &str) -> String {
    format!(
        "Forward your vendor email thread to {}. Inbox polling is not connected yet: \
         in production this mailbox would be checked periodically, each forwarded thread \
         extracted, and the vendor summary shown here.",
        destination.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_destination_and_stub() {
        let msg = describe_forwarding_workflow(" vendor-analysis@example.com ");
        assert!(msg.contains("to vendor-analysis@example.com."));
        assert!(msg.contains("not connected"));
    }
}
