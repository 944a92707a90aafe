// Shared test fixture for the SubmitRequest command, seeded from JSON.

use crate::modules::requests::core::kind::RequestKind;
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::shared::core::primitives::MILLIS_PER_DAY;
use serde::Deserialize;
use std::fs;

pub const FIXED_CREATED_AT: i64 = 1_700_000_000_000;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequestDto {
    pub request_id: String,
    pub kind: RequestKind,
    pub requester_id: String,
    pub target_id: String,
    pub subject_id: Option<String>,
    pub message: Option<String>,
}

pub struct SubmitRequestBuilder {
    inner: SubmitRequest,
}

impl Default for SubmitRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitRequestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/submit_request.json").unwrap();
        let dto: SubmitRequestDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitRequest {
                request_id: dto.request_id,
                kind: dto.kind,
                created_by: dto.requester_id.clone(),
                requester_id: dto.requester_id,
                target_id: dto.target_id,
                subject_id: dto.subject_id,
                message: dto.message,
                created_at: FIXED_CREATED_AT,
                expires_at: Some(FIXED_CREATED_AT + 14 * MILLIS_PER_DAY),
            },
        }
    }

    pub fn request_id(mut self, v: impl Into<String>) -> Self {
        self.inner.request_id = v.into();
        self
    }

    pub fn kind(mut self, v: RequestKind) -> Self {
        self.inner.kind = v;
        self
    }

    pub fn requester_id(mut self, v: impl Into<String>) -> Self {
        self.inner.requester_id = v.into();
        self
    }

    pub fn target_id(mut self, v: impl Into<String>) -> Self {
        self.inner.target_id = v.into();
        self
    }

    pub fn subject_id(mut self, v: Option<&str>) -> Self {
        self.inner.subject_id = v.map(String::from);
        self
    }

    pub fn message(mut self, v: Option<&str>) -> Self {
        self.inner.message = v.map(String::from);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn expires_at(mut self, v: Option<i64>) -> Self {
        self.inner.expires_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> SubmitRequest {
        self.inner
    }
}

#[cfg(test)]
mod submit_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitRequestBuilder::default().build();
        assert_eq!(built.request_id, "req-fixed-0001");
        assert_eq!(built.kind, RequestKind::EventInvite);
        assert_eq!(built.requester_id, "venue-fixed-0001");
        assert_eq!(built.target_id, "artist-fixed-0001");
        assert_eq!(built.subject_id.as_deref(), Some("event-fixed-0001"));
        assert_eq!(built.created_by, "venue-fixed-0001");
        assert_eq!(built.created_at, FIXED_CREATED_AT);
        assert_eq!(built.expires_at, Some(FIXED_CREATED_AT + 14 * MILLIS_PER_DAY));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = SubmitRequestBuilder::new()
            .request_id("req-123")
            .kind(RequestKind::Representation)
            .requester_id("agent-1")
            .target_id("artist-1")
            .subject_id(Some("artist-1"))
            .message(None)
            .created_at(1_000)
            .expires_at(None)
            .created_by("tester")
            .build();

        assert_eq!(custom.request_id, "req-123");
        assert_eq!(custom.kind, RequestKind::Representation);
        assert_eq!(custom.requester_id, "agent-1");
        assert_eq!(custom.target_id, "artist-1");
        assert_eq!(custom.subject_id.as_deref(), Some("artist-1"));
        assert_eq!(custom.message, None);
        assert_eq!(custom.created_at, 1_000);
        assert_eq!(custom.expires_at, None);
        assert_eq!(custom.created_by, "tester");
    }
}
