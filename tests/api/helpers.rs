use hello_members::{
    app_state::{AppState, MemberStoreType},
    services::data_stores::HashmapMemberStore,
    utils::constants::test,
    Application,
};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub member_store: MemberStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let member_store: MemberStoreType =
            Arc::new(RwLock::new(HashmapMemberStore::default()));

        let app_state = AppState::new(member_store.clone());

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            member_store,
        }
    }

    pub async fn get_hello(&self) -> Response {
        self.http_client
            .get(format!("{}/hello", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_with_name(
        &self,
        route: &str,
        name: Option<&str>,
    ) -> Response {
        let mut request =
            self.http_client.get(format!("{}{}", &self.address, route));
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn get_with_query(
        &self,
        route: &str,
        query: &[(&str, &str)],
    ) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, route))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_member<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/members", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_members(&self) -> Response {
        self.http_client
            .get(format!("{}/members", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member(&self, member_id: &str) -> Response {
        self.http_client
            .get(format!("{}/members/{}", &self.address, member_id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {
        self.member_store.write().await.clear().await;
    }
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn join_member(app: &TestApp, name: &str) -> u64 {
    let response = app
        .post_member(&serde_json::json!({
            "name": name
        }))
        .await;

    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "Failed to join member with name: {name}"
    );
    let body = get_json_response_body(response).await;
    body.get("id")
        .expect("Failed to read id from JSON response")
        .as_u64()
        .expect("Member id should be an unsigned integer")
}
