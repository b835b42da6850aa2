#![allow(dead_code)]

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use twitrest::{Config, Credential, RestClient};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAMLheAAAAAAA0%2BuSeid";
pub const SEARCH_PATH: &str = "/1.1/search/tweets.json";
pub const LOOKUP_PATH: &str = "/1.1/users/show.json";

/// Mock API server driven from synchronous tests.
///
/// The blocking client must not run inside the tokio runtime, so the runtime
/// is only entered to start the server and mount mocks.
pub struct MockApi {
    pub server: MockServer,
    rt: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("failed to build runtime");
        let server = rt.block_on(MockServer::start());
        MockApi { server, rt }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    /// Token endpoint accepting the `xxxx`/`yyyy` credential
    pub fn mount_token(&self) {
        self.mount(
            Mock::given(method("POST"))
                .and(path("/oauth2/token"))
                .and(header("Authorization", "Basic eHh4eDp5eXl5"))
                .and(header(
                    "Content-Type",
                    "application/x-www-form-urlencoded;charset=UTF-8",
                ))
                .and(body_string("grant_type=client_credentials"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "token_type": "bearer",
                    "access_token": TOKEN
                }))),
        );
    }

    pub fn client(&self) -> RestClient {
        RestClient::with_config(
            Config::new(self.server.uri()),
            Credential::encode("xxxx", "yyyy"),
        )
        .expect("failed to build client")
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .expect("request recording is enabled")
    }

    pub fn count_requests(&self, http_method: &str, url_path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == url_path)
            .count()
    }
}

pub fn status(id: u64, text: &str) -> Value {
    json!({
        "created_at": "Sun Feb 25 18:11:01 +0000 2018",
        "id": id,
        "id_str": id.to_string(),
        "text": text,
        "retweet_count": 3,
        "favorite_count": 7,
        "lang": "en",
        "user": {
            "id": 42,
            "name": "Ferris",
            "screen_name": "ferris",
            "created_at": "Wed Dec 19 20:20:32 +0000 2007",
            "verified": false
        }
    })
}

pub fn page(statuses: Vec<Value>, next_results: Option<&str>) -> Value {
    let mut metadata = json!({
        "completed_in": 0.035,
        "count": statuses.len(),
        "query": "php"
    });
    if let Some(next) = next_results {
        metadata["next_results"] = json!(next);
    }
    json!({
        "statuses": statuses,
        "search_metadata": metadata
    })
}
