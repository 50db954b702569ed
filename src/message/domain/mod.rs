//! Pure domain types for the message resource.
//!
//! Value objects validate their contents at construction, so any
//! instance reachable from the rest of the crate already satisfies the
//! board's invariants.

mod ids;
mod message;

pub use ids::MessageId;
pub use message::{
    DraftError, MAX_BODY_BYTES, MAX_USERNAME_CHARS, Message, MessageBody, MessageDraft,
    PersistedMessageData, Username,
};
