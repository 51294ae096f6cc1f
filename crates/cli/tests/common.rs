// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Address nothing listens on; requests to it fail fast.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// An isolated home for one test: config file and data directory live in a
/// temp dir, and no endpoint leaks in from the caller's environment.
pub struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp.path().join("data")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    /// `beermap` with no endpoint configured.
    pub fn beermap(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("beermap");
        cmd.env("BEERMAP_CONFIG", self.config_path())
            .env("BEERMAP_DATA_DIR", self.data_dir())
            .env_remove("BEERMAP_URL")
            .env_remove("BEERMAP_ANON_KEY")
            .env_remove("BEERMAP_LOG");
        cmd
    }

    /// `beermap` pointed at `url`.
    pub fn beermap_at(&self, url: &str) -> Command {
        let mut cmd = self.beermap();
        cmd.env("BEERMAP_URL", url)
            .env("BEERMAP_ANON_KEY", "test-anon-key");
        cmd
    }
}

/// Minimal blocking HTTP server answering one canned response per
/// connection, in order, and recording each raw request.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept() else {
                    return;
                };
                let request = read_request(&mut socket);
                captured.lock().unwrap().push(request);
                let reply = format!(
                    "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(reply.as_bytes());
                let _ = socket.flush();
            }
        });

        StubServer {
            url,
            requests,
            handle: Some(handle),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(socket: &mut std::net::TcpStream) -> String {
    let mut reader = BufReader::new(socket);
    let mut head = String::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        head.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }
    let mut body = vec![0; content_length];
    let _ = reader.read_exact(&mut body);
    head + &String::from_utf8_lossy(&body)
}

/// A stored row as the remote table returns it.
pub fn spot_json(id: &str, name: &str, beer_type: &str, rating: f64, day: u32) -> String {
    format!(
        r#"{{"id":"{id}","name":"{name}","type":"{beer_type}","rating":{rating},"comment":"{name} notes","latitude":37.8044,"longitude":-122.2712,"photo":null,"created_at":"2026-01-{day:02}T12:00:00Z","updated_at":"2026-01-{day:02}T12:00:00Z"}}"#
    )
}
