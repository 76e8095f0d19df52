use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::{json, Value};

use mission_board::api::create_router;
use mission_board::graphql::GraphQlClient;
use mission_board::models::MissionRecord;

/// Scripted upstream GraphQL endpoint on an OS-assigned port. The hosting
/// router's client talks real HTTP, so the mock transport is not enough here.
#[derive(Clone)]
struct FakeUpstream {
    missions: (u16, Value),
    launches: HashMap<String, (u16, Value)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    fn new(missions: Value) -> Self {
        Self {
            missions: (200, json!({ "data": { "missions": missions } })),
            launches: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_failing_missions(status: u16) -> Self {
        Self {
            missions: (status, json!({ "error": "upstream unavailable" })),
            launches: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn rocket(mut self, mission_id: &str, rocket_name: &str) -> Self {
        let body = json!({
            "data": { "launches": [ { "rocket": { "rocket_name": rocket_name } } ] }
        });
        self.launches.insert(mission_id.to_string(), (200, body));
        self
    }

    fn missions_queries(&self) -> usize {
        self.calls
            .lock()
            .expect("Call log poisoned")
            .iter()
            .filter(|op| op.as_str() == "missions")
            .count()
    }
}

async fn handle(
    State(upstream): State<FakeUpstream>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let query = body["query"].as_str().unwrap_or_default();
    let (status, response) = if query.contains("launches") {
        let mission_id = body["variables"]["mission_id"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        upstream
            .calls
            .lock()
            .expect("Call log poisoned")
            .push(mission_id.clone());
        upstream
            .launches
            .get(&mission_id)
            .cloned()
            .unwrap_or((200, json!({ "data": { "launches": [] } })))
    } else {
        upstream
            .calls
            .lock()
            .expect("Call log poisoned")
            .push("missions".to_string());
        upstream.missions.clone()
    };

    (
        StatusCode::from_u16(status).expect("Invalid scripted status"),
        Json(response),
    )
}

/// Serve the fake upstream and return a TestServer over the hosting router.
async fn setup(upstream: FakeUpstream) -> TestServer {
    let app = Router::new().route("/", post(handle)).with_state(upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake upstream died");
    });

    let client = GraphQlClient::new(format!("http://{}", addr));
    TestServer::new(create_router(client)).expect("Failed to create test server")
}

fn mission(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "description": format!("{} description", name),
        "name": name,
        "website": format!("https://example.com/{}", id),
    })
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup(FakeUpstream::new(json!([]))).await;

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod missions {
    use super::*;

    #[tokio::test]
    async fn returns_the_aggregated_records() {
        let upstream = FakeUpstream::new(json!([
            mission("1", "FalconSat"),
            mission("2", "DemoSat"),
        ]))
        .rocket("1", "Falcon 1");
        let server = setup(upstream).await;

        let response = server.get("/api/v1/missions").await;

        response.assert_status_ok();
        let records: Vec<MissionRecord> = response.json();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mission_name, "FalconSat");
        assert_eq!(records[0].rocket_name.as_deref(), Some("Falcon 1"));
        assert!(records[1].rocket_name.is_none());
    }

    #[tokio::test]
    async fn serializes_records_in_camel_case() {
        let upstream = FakeUpstream::new(json!([mission("1", "FalconSat")])).rocket("1", "Falcon 1");
        let server = setup(upstream).await;

        let body: Value = server.get("/api/v1/missions").await.json();

        assert_eq!(body[0]["missionName"], "FalconSat");
        assert_eq!(body[0]["rocketName"], "Falcon 1");
        assert_eq!(body[0]["website"], "https://example.com/1");
    }

    #[tokio::test]
    async fn omits_rocket_name_when_absent() {
        let server = setup(FakeUpstream::new(json!([mission("1", "Thaicom")]))).await;

        let body: Value = server.get("/api/v1/missions").await.json();

        assert!(body[0].get("rocketName").is_none());
    }

    #[tokio::test]
    async fn returns_an_empty_list_for_an_empty_upstream() {
        let server = setup(FakeUpstream::new(json!([]))).await;

        let response = server.get("/api/v1/missions").await;

        response.assert_status_ok();
        let records: Vec<MissionRecord> = response.json();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn sanitizes_upstream_failures() {
        let server = setup(FakeUpstream::with_failing_missions(500)).await;

        let response = server.get("/api/v1/missions").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn aggregates_once_per_request() {
        let upstream = FakeUpstream::new(json!([mission("1", "FalconSat")]));
        let server = setup(upstream.clone()).await;

        server.get("/api/v1/missions").await.assert_status_ok();
        server.get("/api/v1/missions").await.assert_status_ok();

        assert_eq!(upstream.missions_queries(), 2);
    }
}
