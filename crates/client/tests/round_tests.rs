mod support;

use std::sync::Arc;

use client::models::{Round, RoundState, TeamRef, TrackRef};
use client::{ApiClient, ClientError, Session};
use serde_json::json;
use support::MockBackend;

fn authenticated_client(url: String) -> ApiClient {
    let session = Session::in_memory();
    session.set_token("tok").unwrap();
    ApiClient::new(url, Arc::new(session))
}

fn round_seven() -> Round {
    Round {
        id: 7,
        state: RoundState::InProgress,
        track: TrackRef { id: 1, name: None },
        red_team: TeamRef {
            id: 4,
            name: Some("Rojos".to_string()),
        },
        blue_team: TeamRef {
            id: 9,
            name: Some("Azules".to_string()),
        },
    }
}

#[tokio::test]
async fn finalize_issues_two_scores_then_the_state_update() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/puntajes", 200, json!({"id": 101, "puntaje": 5}));
    backend.stub("POST", "/puntajes", 200, json!({"id": 102, "puntaje": 3}));
    backend.stub("PATCH", "/rondas/7", 200, json!({"affected": 1}));

    let api = authenticated_client(backend.url());
    api.rounds().finalize(&round_seven(), 5, 3).await.unwrap();

    let calls = backend.calls();
    let sequence: Vec<(&str, &str)> = calls
        .iter()
        .map(|call| (call.method.as_str(), call.path.as_str()))
        .collect();
    assert_eq!(
        sequence,
        vec![
            ("POST", "/puntajes"),
            ("POST", "/puntajes"),
            ("PATCH", "/rondas/7"),
        ]
    );

    assert_eq!(
        calls[0].body,
        Some(json!({"puntaje": 5, "rondaId": 7, "equipoId": 4}))
    );
    assert_eq!(
        calls[1].body,
        Some(json!({"puntaje": 3, "rondaId": 7, "equipoId": 9}))
    );
    assert_eq!(calls[2].body, Some(json!({"estado": "finalizada"})));
}

#[tokio::test]
async fn failed_blue_score_rolls_back_the_red_score() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/puntajes", 200, json!({"id": 101, "puntaje": 5}));
    backend.stub("POST", "/puntajes", 500, json!({"message": "boom"}));
    backend.stub("DELETE", "/puntajes/eliminar/101", 200, json!({"affected": 1}));

    let api = authenticated_client(backend.url());
    let err = api.rounds().finalize(&round_seven(), 5, 3).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The partially created score is compensated and the round is never
    // marked finished.
    assert_eq!(backend.calls_to("DELETE", "/puntajes/eliminar/101").len(), 1);
    assert!(backend.calls_to("PATCH", "/rondas/7").is_empty());
}

#[tokio::test]
async fn failed_state_update_rolls_back_both_scores() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/puntajes", 200, json!({"id": 101, "puntaje": 5}));
    backend.stub("POST", "/puntajes", 200, json!({"id": 102, "puntaje": 3}));
    backend.stub("PATCH", "/rondas/7", 500, json!({"message": "db down"}));
    backend.stub("DELETE", "/puntajes/eliminar/101", 200, json!({"affected": 1}));
    backend.stub("DELETE", "/puntajes/eliminar/102", 200, json!({"affected": 1}));

    let api = authenticated_client(backend.url());
    let err = api.rounds().finalize(&round_seven(), 5, 3).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(backend.calls_to("DELETE", "/puntajes/eliminar/101").len(), 1);
    assert_eq!(backend.calls_to("DELETE", "/puntajes/eliminar/102").len(), 1);
}

#[tokio::test]
async fn failed_compensation_reports_partial_state() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/puntajes", 200, json!({"id": 101, "puntaje": 5}));
    backend.stub("POST", "/puntajes", 500, json!({"message": "boom"}));
    backend.stub(
        "DELETE",
        "/puntajes/eliminar/101",
        500,
        json!({"message": "still down"}),
    );

    let api = authenticated_client(backend.url());
    let err = api.rounds().finalize(&round_seven(), 5, 3).await.unwrap_err();

    assert!(err.is_partial());
    match err {
        ClientError::PartialState { round, score } => {
            assert_eq!(round, 7);
            assert_eq!(score, 101);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn negative_points_never_reach_the_wire() {
    let backend = MockBackend::start().await;
    let api = authenticated_client(backend.url());

    let err = api.rounds().finalize(&round_seven(), 5, -3).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn toggle_stops_a_running_round() {
    let backend = MockBackend::start().await;
    backend.stub(
        "GET",
        "/rondas/7",
        200,
        json!({"id": 7, "estado": "en_curso", "pista": {"id": 1}, "equipo_rojo": {"id": 4}, "equipo_azul": {"id": 9}}),
    );
    backend.stub("PATCH", "/rondas/7", 200, json!({"affected": 1}));

    let api = authenticated_client(backend.url());
    let next = api.rounds().toggle(7).await.unwrap();

    assert_eq!(next, RoundState::Pending);
    let patches = backend.calls_to("PATCH", "/rondas/7");
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].body, Some(json!({"estado": "pendiente"})));
}

#[tokio::test]
async fn toggle_starts_a_pending_round() {
    let backend = MockBackend::start().await;
    backend.stub(
        "GET",
        "/rondas/7",
        200,
        json!({"id": 7, "estado": "pendiente", "pista": {"id": 1}, "equipo_rojo": {"id": 4}, "equipo_azul": {"id": 9}}),
    );
    backend.stub("PATCH", "/rondas/7", 200, json!({"affected": 1}));

    let api = authenticated_client(backend.url());
    let next = api.rounds().toggle(7).await.unwrap();

    assert_eq!(next, RoundState::InProgress);
    let patches = backend.calls_to("PATCH", "/rondas/7");
    assert_eq!(patches[0].body, Some(json!({"estado": "en_curso"})));
}

#[tokio::test]
async fn round_listing_uses_the_details_endpoint() {
    let backend = MockBackend::start().await;
    backend.stub(
        "GET",
        "/rondas/details",
        200,
        json!([
            {"id": 7, "estado": "pendiente", "pista": "Pista A", "equipoRojo": "Rojos", "equipoAzul": "Azules"},
            {"id": 8, "estado": "finalizada", "pista": "Pista B", "equipoRojo": "Alfa", "equipoAzul": "Beta"}
        ]),
    );

    let api = authenticated_client(backend.url());
    let rounds = api.rounds().list_details().await.unwrap();

    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].track, "Pista A");
    assert_eq!(rounds[1].state, RoundState::Finished);

    // One request for the whole table, no per-row lookups.
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn generate_posts_to_the_generation_endpoint() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/rondas/generar", 200, json!({"created": 4}));

    let api = authenticated_client(backend.url());
    api.rounds().generate().await.unwrap();

    assert_eq!(backend.calls_to("POST", "/rondas/generar").len(), 1);
}
