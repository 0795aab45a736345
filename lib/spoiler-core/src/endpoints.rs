//! Paths of the Story Spoiler API, relative to the service base URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::StoryId;

/// Everything but the unreserved characters of RFC 3986.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Login endpoint, returns the `accessToken`.
pub const AUTHENTICATION: &str = "/api/User/Authentication";

/// Story creation endpoint.
pub const CREATE_STORY: &str = "/api/Story/Create";

/// Story listing endpoint.
pub const ALL_STORIES: &str = "/api/Story/All";

/// Edit endpoint of one story.
pub fn edit_story(id: &StoryId) -> String {
    format!("/api/Story/Edit/{}", encode_segment(id))
}

/// Delete endpoint of one story.
pub fn delete_story(id: &StoryId) -> String {
    format!("/api/Story/Delete/{}", encode_segment(id))
}

/// The identifier always lands in a single path segment.
fn encode_segment(id: &StoryId) -> String {
    utf8_percent_encode(id.as_str(), SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_paths() {
        let id = StoryId::from("23232");

        insta::assert_snapshot!(edit_story(&id), @"/api/Story/Edit/23232");
        insta::assert_snapshot!(delete_story(&id), @"/api/Story/Delete/23232");
    }

    #[test]
    fn test_story_id_is_encoded_as_one_segment() {
        let id = StoryId::from("a/b c");

        insta::assert_snapshot!(edit_story(&id), @"/api/Story/Edit/a%2Fb%20c");
    }

    #[test]
    fn test_uuid_story_id_is_kept_verbatim() {
        let id = StoryId::from("0193b0c4-7c2e-7d4a-9c1e-3f5a2b6d8e90");

        insta::assert_snapshot!(delete_story(&id), @"/api/Story/Delete/0193b0c4-7c2e-7d4a-9c1e-3f5a2b6d8e90");
    }
}
