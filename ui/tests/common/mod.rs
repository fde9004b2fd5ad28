use std::time::Duration;

use egui_kittest::Harness;
use usergrid_ui::UserGridApp;
use usergrid_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server to answer before frames are stepped.
pub const NETWORK_WAIT: Duration = Duration::from_millis(200);

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, UserGridApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserGridApp> {
        &mut self.harness
    }

    /// App whose `/users` endpoint answers with `users`.
    pub async fn new_app(users: serde_json::Value) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(200).set_body_json(users)).await
    }

    #[allow(dead_code)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(status_code)).await
    }

    pub async fn new_app_with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = UserGridApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Steps past the initial fetch so the grid has left `Loading`.
    pub async fn wait_for_load(&mut self) {
        self.harness.step();
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
            if !self.harness.state().state.data_grid.is_loading() {
                break;
            }
        }
        tokio::time::sleep(NETWORK_WAIT).await;
        for _ in 0..5 {
            self.harness.step();
        }
    }
}

/// The three users the tests edit, in the endpoint's shape (extra fields included).
#[allow(dead_code)]
pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031",
            "address": { "city": "Gwenborough" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593",
            "company": { "name": "Deckow-Crist" }
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447"
        }
    ])
}

/// `count` generated users with ids `1..=count`.
#[allow(dead_code)]
pub fn numbered_users(count: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Person {id:02}"),
                "username": format!("person{id}"),
                "email": format!("person{id}@example.com"),
                "phone": format!("555000{id:04}"),
            })
        })
        .collect();
    serde_json::Value::Array(users)
}
