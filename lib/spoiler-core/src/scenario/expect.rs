use http::StatusCode;

use super::ScenarioError;
use crate::RawResult;
use crate::model::ApiResponse;

const BODY_EXCERPT_LENGTH: usize = 256;

pub(super) fn expect_status(result: &RawResult, expected: StatusCode) -> Result<(), ScenarioError> {
    let actual = result.status_code();
    if actual == expected {
        return Ok(());
    }

    Err(ScenarioError::UnexpectedStatus {
        expected,
        actual,
        body: excerpt(result.text()),
    })
}

pub(super) fn expect_message(
    response: &ApiResponse,
    expected: &'static str,
) -> Result<(), ScenarioError> {
    if response.msg == expected {
        return Ok(());
    }

    Err(ScenarioError::UnexpectedMessage {
        expected,
        actual: response.msg.clone(),
    })
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LENGTH) {
        Some((end, _)) => format!("{}...", body.get(..end).unwrap_or_default()),
        None => body.to_string(),
    }
}
