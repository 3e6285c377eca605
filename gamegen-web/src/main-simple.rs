//! Static file server for the built frontend
//!
//! Serves the Trunk output in `dist/`. Paths without a matching file get
//! `dist/index.html`, so client routes like `/generate` load on a full page
//! request.
//!
//! Usage: `gamegen-server [ADDR]` (default `127.0.0.1:8080`, log level from `RUST_LOG`).

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    server::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::fs;
    use std::io::{self, BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::path::{Component, Path, PathBuf};
    use std::time::Duration;

    use tracing_subscriber::EnvFilter;

    const DEFAULT_ADDR: &str = "127.0.0.1:8080";
    const DIST_DIR: &str = "dist";
    const INDEX_FILE: &str = "index.html";
    /// Connections are served one at a time, so a silent client may only hold
    /// the loop this long.
    const READ_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn run() -> io::Result<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

        let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listener = TcpListener::bind(&addr)?;
        let dist = PathBuf::from(DIST_DIR);

        tracing::info!(%addr, dist = %dist.display(), "Static server listening");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = handle_client(stream, &dist, READ_TIMEOUT) {
                        tracing::warn!(error = %e, "Request failed");
                    }
                }
                Err(e) => tracing::error!(error = %e, "Connection error"),
            }
        }
        Ok(())
    }

    fn handle_client(mut stream: TcpStream, dist: &Path, read_timeout: Duration) -> io::Result<()> {
        stream.set_read_timeout(Some(read_timeout))?;

        let mut request_line = String::new();
        BufReader::new(&mut stream).read_line(&mut request_line)?;

        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
        let path = target.split_once('?').map_or(target, |(path, _query)| path);

        let file = resolve(dist, path, |p| p.is_file());
        let response = match fs::read(&file) {
            Ok(body) => {
                tracing::debug!(path, file = %file.display(), "200");
                (200, "OK", content_type(&file), body)
            }
            Err(e) => {
                tracing::warn!(path, file = %file.display(), error = %e, "404");
                (404, "NOT FOUND", "text/plain; charset=utf-8", b"Not found".to_vec())
            }
        };
        let (status, reason, mime, body) = response;

        write!(
            stream,
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            reason,
            mime,
            body.len()
        )?;
        stream.write_all(&body)?;
        stream.flush()
    }

    /// Map a request path onto a file below `dist`.
    ///
    /// Anything that is not a plain relative path to an existing file,
    /// including `..` segments, falls back to the index page.
    pub(crate) fn resolve(dist: &Path, request_path: &str, exists: impl Fn(&Path) -> bool) -> PathBuf {
        let index = dist.join(INDEX_FILE);
        let relative = Path::new(request_path.trim_start_matches('/'));

        if relative.as_os_str().is_empty()
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return index;
        }

        let candidate = dist.join(relative);
        if exists(&candidate) {
            candidate
        } else {
            index
        }
    }

    pub(crate) fn content_type(file: &Path) -> &'static str {
        match file.extension().and_then(|ext| ext.to_str()) {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("wasm") => "application/wasm",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::Instant;

        fn dist() -> PathBuf {
            PathBuf::from("dist")
        }

        #[test]
        fn test_root_serves_index() {
            assert_eq!(resolve(&dist(), "/", |_| true), dist().join("index.html"));
            assert_eq!(resolve(&dist(), "", |_| true), dist().join("index.html"));
        }

        #[test]
        fn test_client_route_falls_back_to_index() {
            assert_eq!(resolve(&dist(), "/generate", |_| false), dist().join("index.html"));
        }

        #[test]
        fn test_existing_asset_is_served() {
            let file = resolve(&dist(), "/gamegen-web_bg.wasm", |_| true);
            assert_eq!(file, dist().join("gamegen-web_bg.wasm"));
            assert_eq!(content_type(&file), "application/wasm");
        }

        #[test]
        fn test_parent_segments_are_refused() {
            assert_eq!(resolve(&dist(), "/../Cargo.toml", |_| true), dist().join("index.html"));
            assert_eq!(resolve(&dist(), "/assets/../../etc/passwd", |_| true), dist().join("index.html"));
        }

        #[test]
        fn test_silent_client_times_out() {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let _client = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
            let (stream, _) = listener.accept().unwrap();

            let started = Instant::now();
            let err = handle_client(stream, &dist(), Duration::from_millis(100)).unwrap_err();

            assert!(matches!(err.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut));
            assert!(started.elapsed() < Duration::from_secs(5));
        }

        #[test]
        fn test_content_types() {
            assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
            assert_eq!(content_type(Path::new("dist/style.css")), "text/css");
            assert_eq!(content_type(Path::new("dist/blob")), "application/octet-stream");
        }
    }
}
