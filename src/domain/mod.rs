mod send_request;

pub use send_request::*;
