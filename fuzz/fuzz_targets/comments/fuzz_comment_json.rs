// Run with: cargo fuzz run fuzz_comment_json
// Feeds arbitrary JSON through CreateCommentPayload -> NewComment and checks the rating gate.
#![no_main]

use groomer_comments::domain::{CreateCommentPayload, NewComment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<CreateCommentPayload>(data) {
        let rating = payload.rating;
        let accepted = NewComment::try_from(payload).is_ok();
        assert_eq!(accepted, (1..=5).contains(&rating));
    }
});
