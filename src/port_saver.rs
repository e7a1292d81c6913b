use rocket::fairing::Info;
use rocket::{Orbit, Rocket};
use tokio::sync::watch;

/// Pair a liftoff fairing with a handle that resolves to the port the server
/// actually bound. Lets the test harness ask for port 0 and find out what
/// the OS assigned.
pub fn create_pair() -> (PortSaver, BoundPort) {
    let (tx, rx) = watch::channel(None);
    (PortSaver { sender: tx }, BoundPort { receiver: rx })
}

pub struct BoundPort {
    receiver: watch::Receiver<Option<u16>>,
}

impl BoundPort {
    pub async fn get(&mut self) -> u16 {
        loop {
            if let Some(port) = *self.receiver.borrow() {
                return port;
            }
            self.receiver
                .changed()
                .await
                .expect("The server was dropped before liftoff.");
        }
    }
}

pub struct PortSaver {
    sender: watch::Sender<Option<u16>>,
}

#[rocket::async_trait]
impl rocket::fairing::Fairing for PortSaver {
    fn info(&self) -> Info {
        Info {
            name: "Port Saver",
            kind: rocket::fairing::Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let _ = self.sender.send(Some(rocket.config().port));
    }
}
