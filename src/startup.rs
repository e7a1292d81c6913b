use crate::catchers::*;
use crate::configuration::Settings;
use crate::cors::Cors;
use crate::email::EmailProvider;
use crate::port_saver;
use crate::port_saver::BoundPort;
use crate::routes::*;
use rocket::{Config, Ignite, Rocket};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: BoundPort,
}

impl Application {
    pub async fn build(
        configuration: &Settings,
        provider: Box<dyn EmailProvider>,
    ) -> Result<Application, rocket::Error> {
        let (port_saver, port) = port_saver::create_pair();
        let provider: Arc<dyn EmailProvider> = Arc::from(provider);
        let server = rocket::custom(Config {
            port: configuration.application.port.unwrap_or(0),
            address: configuration.application.host,
            ..Config::debug_default()
        })
        .attach(port_saver)
        .attach(Cors)
        .manage(provider)
        .manage(configuration.provider.sender_defaults())
        .mount(
            "/",
            routes![
                health_check::health_check,
                send::send,
                send::send_preflight,
                send::send_not_json,
                send::send_get,
                send::send_put,
                send::send_delete,
                send::send_patch
            ],
        )
        .register(
            "/",
            catchers![
                unprocessable_entity_to_bad_request,
                bad_request,
                not_found,
                internal_server_error
            ],
        )
        .ignite()
        .await?;
        Ok(Application { server, port })
    }
}
