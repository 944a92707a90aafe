use crate::modules::requests::adapters::outbound::linked_records::{LinkStatus, ParticipationStatus};
use crate::modules::requests::core::decision::DecideError;
use crate::modules::requests::core::kind::{RequestKind, RequestStatus};
use crate::modules::requests::use_cases::accept_request::command::AcceptRequest;
use crate::modules::requests::use_cases::application_error::ApplicationError;
use crate::modules::requests::use_cases::reject_request::command::RejectRequest;
use crate::modules::requests::use_cases::submit_request::command::SubmitRequest;
use crate::shared::core::primitives::{MILLIS_PER_DAY, now_millis, request_stream_id};
use crate::shell::workers::sweep_overdue;
use crate::tests::fixtures::app::{TestApp, make_test_app};
use crate::tests::fixtures::commands::submit_request::SubmitRequestBuilder;

async fn submit(app: &TestApp, command: SubmitRequest) -> String {
    let stream_id = request_stream_id(&command.request_id);
    app.state
        .submit_handler
        .handle(&stream_id, command)
        .await
        .unwrap();
    app.state.project(&stream_id).await.unwrap();
    stream_id
}

fn fresh(kind: RequestKind, subject_id: &str) -> SubmitRequest {
    let created_at = now_millis();
    SubmitRequestBuilder::new()
        .kind(kind)
        .subject_id(Some(subject_id))
        .created_at(created_at)
        .expires_at(Some(created_at + 14 * MILLIS_PER_DAY))
        .build()
}

fn accept(command: &SubmitRequest) -> AcceptRequest {
    AcceptRequest {
        request_id: command.request_id.clone(),
        accepted_by: command.target_id.clone(),
        accepted_at: command.created_at + 1_000,
    }
}

async fn status(app: &TestApp, request_id: &str) -> RequestStatus {
    app.state
        .queries
        .get_by_id(request_id)
        .await
        .unwrap()
        .unwrap()
        .status
}

#[tokio::test]
async fn submitted_request_can_be_fetched_back() {
    let app = make_test_app().await;
    let command = fresh(RequestKind::BandJoin, "venue-fixed-0001");
    submit(&app, command.clone()).await;

    let view = app
        .state
        .queries
        .get_by_id(&command.request_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(view.kind, RequestKind::BandJoin);
    assert_eq!(view.requester_id, command.requester_id);
    assert_eq!(view.target_id, command.target_id);
    assert_eq!(view.status, RequestStatus::Pending);
}

#[tokio::test]
async fn accepting_a_rejected_request_changes_nothing() {
    let app = make_test_app().await;
    let command = fresh(RequestKind::EventInvite, "event-fixed-0001");
    let stream_id = submit(&app, command.clone()).await;
    app.state
        .reject_handler
        .handle(
            &stream_id,
            RejectRequest {
                request_id: command.request_id.clone(),
                rejected_by: command.target_id.clone(),
                rejected_at: command.created_at + 500,
                reason: None,
            },
        )
        .await
        .unwrap();
    let outbox_before = app.outbox.event_types().await;

    let result = app.state.accept_handler.handle(&stream_id, accept(&command)).await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::NotPending(
            RequestStatus::Rejected
        )))
    ));
    assert_eq!(
        app.links
            .participation("event-fixed-0001", "artist-fixed-0001")
            .await,
        Some(ParticipationStatus::Pending)
    );
    assert_eq!(app.outbox.event_types().await, outbox_before);
}

#[tokio::test]
async fn schedule_conflict_blocks_the_invite_without_touching_participation() {
    let app = make_test_app().await;
    let now = now_millis();
    app.links.schedule_event("event-fixed-0001", now, now + 3_600_000).await;
    app.links
        .schedule_event("event-other-0001", now + 1_800_000, now + 7_200_000)
        .await;
    app.links
        .set_participation("event-other-0001", "artist-fixed-0001", ParticipationStatus::Confirmed)
        .await;
    let command = fresh(RequestKind::EventInvite, "event-fixed-0001");
    let stream_id = submit(&app, command.clone()).await;

    let result = app.state.accept_handler.handle(&stream_id, accept(&command)).await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::ScheduleConflict))
    ));
    assert_eq!(
        app.links
            .participation("event-fixed-0001", "artist-fixed-0001")
            .await,
        Some(ParticipationStatus::Pending)
    );
    assert_eq!(status(&app, &command.request_id).await, RequestStatus::Pending);
}

#[tokio::test]
async fn rejecting_never_touches_linked_records() {
    let app = make_test_app().await;
    let command = fresh(RequestKind::BandJoin, "venue-fixed-0001");
    let stream_id = submit(&app, command.clone()).await;
    app.links.toggle_offline();

    app.state
        .reject_handler
        .handle(
            &stream_id,
            RejectRequest {
                request_id: command.request_id.clone(),
                rejected_by: command.target_id.clone(),
                rejected_at: command.created_at + 500,
                reason: Some("not touring this year".into()),
            },
        )
        .await
        .expect("rejection must not need the linked records store");
    app.state.project(&stream_id).await.unwrap();
    app.links.toggle_offline();

    assert_eq!(status(&app, &command.request_id).await, RequestStatus::Rejected);
    assert_eq!(
        app.links.membership("venue-fixed-0001", "artist-fixed-0001").await,
        Some(LinkStatus::Pending)
    );
}

#[tokio::test]
async fn failed_secondary_update_leaves_the_request_pending_and_retryable() {
    let app = make_test_app().await;
    let command = fresh(RequestKind::Representation, "artist-fixed-0001");
    let stream_id = submit(&app, command.clone()).await;

    app.links.toggle_offline();
    let result = app.state.accept_handler.handle(&stream_id, accept(&command)).await;
    app.state.project(&stream_id).await.unwrap();
    app.links.toggle_offline();

    assert!(matches!(result, Err(ApplicationError::AcceptanceReverted(_))));
    assert_eq!(status(&app, &command.request_id).await, RequestStatus::Pending);
    assert_eq!(
        app.links
            .representation("artist-fixed-0001", "venue-fixed-0001")
            .await,
        Some(LinkStatus::Pending)
    );

    app.state
        .accept_handler
        .handle(&stream_id, accept(&command))
        .await
        .expect("retry failed");
    app.state.project(&stream_id).await.unwrap();

    assert_eq!(status(&app, &command.request_id).await, RequestStatus::Accepted);
    assert_eq!(
        app.links
            .representation("artist-fixed-0001", "venue-fixed-0001")
            .await,
        Some(LinkStatus::Active)
    );
    assert_eq!(
        app.outbox.event_types().await,
        vec!["RequestSubmitted".to_string(), "RequestAccepted".to_string()]
    );
}

#[tokio::test]
async fn overdue_requests_cannot_be_accepted_and_get_swept() {
    let app = make_test_app().await;
    let command = SubmitRequestBuilder::new().build();
    let expires_at = command.expires_at.unwrap();
    let stream_id = submit(&app, command.clone()).await;

    let late = AcceptRequest {
        accepted_at: expires_at,
        ..accept(&command)
    };
    let result = app.state.accept_handler.handle(&stream_id, late).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::Expired))
    ));

    let expired = sweep_overdue(&app.state, now_millis()).await.unwrap();

    assert_eq!(expired, 1);
    assert_eq!(status(&app, &command.request_id).await, RequestStatus::Expired);
    assert_eq!(
        app.links
            .participation("event-fixed-0001", "artist-fixed-0001")
            .await,
        Some(ParticipationStatus::Pending)
    );
}
