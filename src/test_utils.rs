//! Shared test utilities for leadline
//!
//! Common fixtures and helper functions used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::api::{FetchRequest, FetchResponse};
    use crate::app::App;
    use crate::config::Config;
    use crate::router::Route;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc::{self, Receiver, Sender};

    /// Helper to create an App on the home page with default config
    pub fn test_app() -> App {
        App::new(1, Route::Home, &Config::default())
    }

    /// Helper to create an App wired to in-memory fetch channels.
    ///
    /// Returns the app, the receiving end of its requests, and the sending
    /// end for scripted responses.
    pub fn test_app_with_channels(
        start: Route,
    ) -> (App, Receiver<FetchRequest>, Sender<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = App::new(1, start, &Config::default());
        app.set_fetch_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Serve one canned HTTP response on a loopback port and return its base URL
    pub fn serve_once(status: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}", addr)
    }
}
