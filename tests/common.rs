use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};
use lingo::utils::clock::ManualClock;
use lingo::{Config, build_server_with_state, build_state};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

pub const DEMO_USER: &str = "demo-user";

/// Server under test plus the clock it reads "now" from.
pub struct FlowServer {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 10, 0, 0).unwrap()
}

pub fn setup_server() -> FlowServer {
    let config = Config::default();
    let clock = Arc::new(ManualClock::new(start_time()));
    let state = build_state(&config, clock.clone()).unwrap();
    let app = build_server_with_state(state, &config);

    FlowServer {
        server: TestServer::new(app).unwrap(),
        clock,
    }
}

#[derive(Debug)]
pub struct FlowContext {
    pub store: HashMap<&'static str, Value>, // a way to pass data between steps
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn store(&mut self, key: &'static str, val: Value) {
        self.store.insert(key, val);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.store.get(key).expect("missing store key")
    }

    #[allow(unused)]
    pub fn get_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned,
    {
        let obj = self.get(key);
        serde_json::from_value(obj.clone()).expect("Invalid json format")
    }
}

pub struct Action {
    #[allow(unused)]
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub dyn_path: Option<Box<dyn Fn(&FlowContext) -> String + Send + Sync>>,
    pub body: Option<Value>,
    pub raw_body: Option<&'static str>,
    pub dyn_body: Option<Box<dyn Fn(&FlowContext) -> Value + Send + Sync>>,
    pub expect: StatusCode,
    pub advance_clock: Option<Duration>,
    pub body_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
    pub save_as: Option<&'static str>,
}

impl Action {
    pub fn new<P: Into<String>>(name: &'static str, method: &'static str, path: P) -> Self {
        Self {
            name,
            method,
            path: path.into(),
            dyn_path: None,
            body: None,
            raw_body: None,
            dyn_body: None,
            expect: StatusCode::OK,
            advance_clock: None,
            body_asserts: vec![],
            save_as: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sends `body` verbatim as `application/json`, even when it is not JSON.
    #[allow(unused)]
    pub fn with_raw_body(mut self, body: &'static str) -> Self {
        self.raw_body = Some(body);
        self
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    /// Moves the server clock forward before sending the request.
    #[allow(unused)]
    pub fn after(mut self, by: Duration) -> Self {
        self.advance_clock = Some(by);
        self
    }

    #[allow(unused)]
    pub fn with_dyn_path<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> String + Send + Sync + 'static,
    {
        self.dyn_path = Some(Box::new(f));
        self
    }

    #[allow(unused)]
    pub fn with_dyn_body<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> Value + Send + Sync + 'static,
    {
        self.dyn_body = Some(Box::new(f));
        self
    }

    #[allow(unused)]
    pub fn with_save_as(mut self, key: &'static str) -> Self {
        self.save_as = Some(key);
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, flow: &FlowServer) {
        let mut ctx = FlowContext::new(); // create new context for this flow
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);

            if let Some(by) = action.advance_clock {
                flow.clock.advance(by);
            }

            let path = if let Some(dyn_path_fn) = action.dyn_path {
                dyn_path_fn(&ctx)
            } else {
                action.path.clone()
            };

            let mut req = match action.method {
                "GET" => flow.server.get(&path),
                "POST" => flow.server.post(&path),
                _ => panic!("unsupported method {}", action.method),
            };

            match (action.dyn_body, action.body, action.raw_body) {
                (Some(f), _, _) => req = req.json(&f(&ctx)),
                (_, Some(json), _) => req = req.json(&json),
                (_, _, Some(raw)) => {
                    req = req.text(raw).content_type("application/json");
                }
                _ => {}
            }

            let resp = req.await;
            resp.assert_status(action.expect);

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                for check in action.body_asserts {
                    check(&body);
                }
            }

            if let Some(save_key) = action.save_as {
                let body = resp.json::<Value>();
                ctx.store(save_key, body);
            }
        }
    }
}

// Common actions builders

pub fn progress_action(language: &str) -> Action {
    Action::new("progress", "GET", format!("/api/progress/{language}"))
}

pub fn lesson_action(language: &str, lesson_number: &str) -> Action {
    Action::new("lesson", "GET", format!("/api/lesson/{language}/{lesson_number}"))
}

pub fn complete_action(language: &str, lesson_number: u32, correct: u32, total: u32) -> Action {
    Action::new("complete_lesson", "POST", "/api/complete-lesson").with_body(json!({
        "userId": DEMO_USER,
        "language": language,
        "level": lesson_number.saturating_sub(1) / 5 + 1,
        "lessonNumber": lesson_number,
        "correctAnswers": correct,
        "totalQuestions": total,
    }))
}

#[allow(unused)]
pub fn check_action(language: &str, lesson_number: u32, index: usize, answer: Value) -> Action {
    Action::new("check_answer", "POST", "/api/check-answer").with_body(json!({
        "userId": DEMO_USER,
        "language": language,
        "level": 1,
        "lessonNumber": lesson_number,
        "questionIndex": index,
        "userAnswer": answer,
    }))
}
