#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use image::{ImageFormat, Rgb, RgbImage};
use realcheck_core::client::{ClassificationResponse, Classifier, TransportError};
use realcheck_core::selection::SelectedImage;

/// Encode a `width` x `height` gradient as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

/// Write a PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(width, height)).expect("write png");
    path
}

pub fn sample_image(name: &str) -> SelectedImage {
    SelectedImage::from_bytes(name, png_bytes(4, 4))
}

/// Classifier double that replays scripted outcomes in order.
pub struct MockClassifier {
    outcomes: Mutex<VecDeque<Result<ClassificationResponse, TransportError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn new(outcomes: Vec<Result<ClassificationResponse, TransportError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// File names seen, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, image: &SelectedImage) -> Result<ClassificationResponse, TransportError> {
        self.calls.lock().unwrap().push(image.file_name().to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockClassifier ran out of scripted outcomes")
    }
}

pub fn service_unavailable() -> TransportError {
    TransportError::Status {
        status: 503,
        body: "model not loaded".into(),
    }
}

/// One-shot HTTP server on an ephemeral port. Captures the raw request and
/// answers it with a canned response.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Vec<u8>>,
}

impl StubServer {
    pub fn respond_once(status: u16, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().ok();
            request
        });

        Self {
            url: format!("http://{addr}/predict"),
            handle,
        }
    }

    /// Accept one connection and never answer it.
    pub fn silent(hold_for: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(hold_for);
                drop(stream);
            }
        });
        format!("http://{addr}/predict")
    }

    /// An address with nothing listening on it.
    pub fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}/predict")
    }

    pub fn request(self) -> Vec<u8> {
        self.handle.join().expect("stub server thread")
    }
}

fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = find(&buf, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let body_len = buf.len() - header_end - 4;

        if let Some(len) = content_length(&headers) {
            if body_len >= len {
                break;
            }
        } else if headers.contains("transfer-encoding: chunked") {
            if buf.ends_with(b"0\r\n\r\n") {
                break;
            }
        } else {
            break;
        }
    }
    buf
}

fn content_length(headers: &str) -> Option<usize> {
    headers
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
}

pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
