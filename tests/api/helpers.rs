use email_relay::configuration::get_configuration;
use email_relay::email::HttpEmailClient;
use email_relay::startup::Application;
use email_relay::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
    pub default_from: String,
    pub default_reply_to: String,
}

impl TestApp {
    pub async fn post_send(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/send", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn options_send(&self) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, format!("{}/send", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // The mock server stands in for the email-delivery provider.
    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = None;
        c.provider.base_url = email_server.uri();
        c.provider.api_key = Secret::new("test-api-key".into());
        c.provider.default_from = "relay@example.com".into();
        c.provider.default_reply_to = "replies@example.com".into();
        c
    };

    let email_client = HttpEmailClient::new(
        configuration.provider.base_url.clone(),
        configuration.provider.api_key.clone(),
        configuration.provider.timeout(),
    );

    let Application { server, mut port } =
        Application::build(&configuration, Box::new(email_client))
            .await
            .expect("Failed to build application.");
    let _ = tokio::spawn(server.launch());

    TestApp {
        address: format!("http://127.0.0.1:{}", port.get().await),
        email_server,
        api_client: reqwest::Client::new(),
        default_from: configuration.provider.default_from,
        default_reply_to: configuration.provider.default_reply_to,
    }
}
