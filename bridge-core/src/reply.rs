//! Reply delivery back into the chat space.
//!
//! [`ReplyDelivery`] is transport-agnostic. Posting answers back is not implemented yet:
//! [`NoopReplyDelivery`] is the default and only logs that delivery was skipped.

use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Delivers a generated reply into a space. Implementations map to a transport (e.g. Google Chat).
#[async_trait]
pub trait ReplyDelivery: Send + Sync {
    /// Posts `text` into the space identified by `space_id`.
    async fn deliver_reply(&self, space_id: &str, text: &str) -> Result<()>;
}

/// Delivery that does nothing. Replies are logged by the dispatcher only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReplyDelivery;

#[async_trait]
impl ReplyDelivery for NoopReplyDelivery {
    async fn deliver_reply(&self, space_id: &str, text: &str) -> Result<()> {
        debug!(
            space = %space_id,
            reply_len = text.len(),
            "Reply delivery not implemented, skipping"
        );
        Ok(())
    }
}
