pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
        pub mod session;
    }
}

pub mod modules {
    pub mod requests {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod kind;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod submit_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod accept_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod reject_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod expire_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod query_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod conflict_check;
                pub mod intent_outbox;
                pub mod linked_records;
                pub mod linked_records_in_memory;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
