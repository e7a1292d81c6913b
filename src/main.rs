use email_relay::configuration::get_configuration;
use email_relay::email::HttpEmailClient;
use email_relay::startup::Application;
use email_relay::telemetry::{get_subscriber, init_subscriber};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let subscriber = get_subscriber("email-relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let email_client = HttpEmailClient::new(
        configuration.provider.base_url.clone(),
        configuration.provider.api_key.clone(),
        configuration.provider.timeout(),
    );
    let app = Application::build(&configuration, Box::new(email_client)).await?;
    app.server.launch().await?;
    Ok(())
}
