#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::{Value, json};
use spotexp::{
    config::SpotifyConfig,
    management::ArtistChooser,
    spotify::{ApiError, ApiResponse, SpotifyClient, Transport},
    types::{Artist, TokenRecord},
};

pub const API_URL: &str = "https://api.test/v1";
pub const TOKEN_URL: &str = "https://accounts.test/api/token";
pub const AUTH_URL: &str = "https://accounts.test/authorize";
pub const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

pub fn test_config() -> SpotifyConfig {
    SpotifyConfig {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: REDIRECT_URI.to_string(),
        scope: "user-read-private playlist-read-private".to_string(),
        auth_url: Url::parse(AUTH_URL).expect("valid auth url"),
        token_url: TOKEN_URL.to_string(),
        api_url: API_URL.to_string(),
        market: "US".to_string(),
    }
}

pub fn api(path: &str) -> String {
    format!("{API_URL}/{path}")
}

/// One request seen by the [`FakeTransport`].
#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub authorization: String,
    pub params: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type Scripted = Result<ApiResponse, ApiError>;

/// Transport answering from scripted responses, keyed by method and URL.
///
/// Each scripted response is used once. A request without a remaining
/// response panics, so unexpected calls fail the test.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, method: &str, url: &str, response: Scripted) {
        self.routes
            .lock()
            .unwrap()
            .entry(format!("{method} {url}"))
            .or_default()
            .push_back(response);
    }

    pub fn on_get(&self, url: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.push("GET", url, Ok(ApiResponse::new(status, body)));
    }

    /// Scripts a GET that fails before any status code arrives.
    pub fn on_get_failure(&self, url: &str) {
        self.push("GET", url, Err(transport_failure()));
    }

    pub fn on_post(&self, url: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.push("POST", url, Ok(ApiResponse::new(status, body)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str, url: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.url == url)
            .collect()
    }

    fn answer(
        &self,
        method: &'static str,
        url: &str,
        authorization: String,
        params: &[(&str, &str)],
    ) -> Scripted {
        self.calls.lock().unwrap().push(Call {
            method,
            url: url.to_string(),
            authorization,
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        let key = format!("{method} {url}");
        self.routes
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("unexpected request: {key}"))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        bearer_token: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        self.answer("GET", url, format!("Bearer {bearer_token}"), query)
    }

    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        self.answer("POST", url, authorization.to_string(), form)
    }
}

pub fn transport_failure() -> ApiError {
    ApiError::Json(serde_json::from_str::<Value>("{").unwrap_err())
}

pub fn client(transport: &Arc<FakeTransport>) -> SpotifyClient {
    SpotifyClient::new(transport.clone(), API_URL)
}

/// Chooser replaying a fixed list of answers; `None` once they run out.
pub struct ScriptedChooser {
    answers: VecDeque<usize>,
    pub asked: usize,
}

impl ScriptedChooser {
    pub fn new(answers: &[usize]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: 0,
        }
    }
}

impl ArtistChooser for ScriptedChooser {
    fn choose(&mut self, _candidates: &[Artist]) -> Option<usize> {
        self.asked += 1;
        self.answers.pop_front()
    }
}

pub fn stored_token(access: &str, refresh: Option<&str>) -> TokenRecord {
    TokenRecord {
        access_token: access.to_string(),
        refresh_token: refresh.map(str::to_string),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        scope: "user-read-private".to_string(),
        obtained_at: Some(1_700_000_000),
    }
}

pub fn artist_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "popularity": 71,
        "followers": { "href": null, "total": 1_234_567 },
        "genres": ["trip hop", "electronica"],
        "images": [
            { "url": format!("https://i.test/{id}/640.jpg"), "height": 640, "width": 640 },
            { "url": format!("https://i.test/{id}/160.jpg"), "height": 160, "width": 160 }
        ],
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{id}") },
        "type": "artist",
        "uri": format!("spotify:artist:{id}")
    })
}

pub fn track_json(name: &str, album: &str) -> Value {
    json!({
        "name": name,
        "popularity": 60,
        "preview_url": null,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{name}") },
        "album": {
            "name": album,
            "images": [{ "url": format!("https://i.test/{album}.jpg"), "height": 300, "width": 300 }]
        }
    })
}

pub fn album_json(id: &str, name: &str, artists: &[(&str, &str)]) -> Value {
    json!({
        "id": id,
        "name": name,
        "release_date": "1994-08-22",
        "album_type": "album",
        "images": [{ "url": format!("https://i.test/{id}.jpg"), "height": 640, "width": 640 }],
        "external_urls": { "spotify": format!("https://open.spotify.com/album/{id}") },
        "artists": artists
            .iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>()
    })
}

pub fn search_response(artists: Vec<Value>) -> Value {
    json!({
        "artists": {
            "href": "https://api.test/v1/search",
            "items": artists,
            "limit": 5,
            "offset": 0,
            "total": 1,
            "next": null
        }
    })
}

pub fn paging(items: Vec<Value>) -> Value {
    json!({ "items": items, "total": 0, "next": null })
}
