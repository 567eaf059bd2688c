//! One-time setup shared by the integration test binaries: tracing and an
//! in-process mock server on a random port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::OnceLock;

use reqres_core::{logging, ApiConfig, ApiSession};

static MOCK_ADDR: OnceLock<SocketAddr> = OnceLock::new();

/// Start the mock server on first use and return its address.
pub fn mock_addr() -> SocketAddr {
    *MOCK_ADDR.get_or_init(|| {
        logging::init_for_tests();

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                reqres_mock::run(listener).await
            })
            .unwrap();
        });

        addr
    })
}

pub fn mock_config() -> ApiConfig {
    ApiConfig::default().with_base_url(format!("http://{}/api", mock_addr()))
}

pub fn mock_session() -> ApiSession {
    mock_config().session()
}
