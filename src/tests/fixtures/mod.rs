pub mod app;

pub mod commands {
    pub mod submit_request;
}

pub mod events {
    pub mod domain_event;
    pub mod request_submitted_v1;
}
