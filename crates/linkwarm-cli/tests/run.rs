//! End-to-end runs against a throwaway local HTTP server.

use std::io::Write;
use std::net::SocketAddr;

use clap::Parser;
use linkwarm_cli::{App, Summary, run};
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `200 ok` for every path except `/missing`, which gets a 404.
async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                let status = if head.starts_with("GET /missing ") {
                    "404 Not Found"
                } else {
                    "200 OK"
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok"
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn app(args: &[&str]) -> App {
    let mut argv = vec!["linkwarm"];
    argv.extend_from_slice(args);
    App::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_standard_run_counts_non_200_as_failure() {
    let addr = serve().await;
    let ok = format!("http://{addr}/app.js");
    let css = format!("http://{addr}/app.css");
    let missing = format!("http://{addr}/missing");

    let summary = run::execute(app(&[&ok, &css, &missing])).await.unwrap();

    assert_eq!(
        summary,
        Summary {
            dispatched: 3,
            skipped: 0,
            completed: 2,
            failed: 1,
        }
    );
}

#[tokio::test]
async fn test_high_priority_run_ignores_status() {
    let addr = serve().await;
    let missing = format!("http://{addr}/missing");

    let summary = run::execute(app(&["--priority", "high", &missing]))
        .await
        .unwrap();

    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_high_priority_without_fetch_checks_status() {
    let addr = serve().await;
    let missing = format!("http://{addr}/missing");

    let summary = run::execute(app(&["--priority", "high", "--no-fetch", &missing]))
        .await
        .unwrap();

    assert_eq!(summary.completed, 0);
    assert_eq!(summary.failed, 1);
}

#[tokio::test]
async fn test_urls_from_file_and_config() {
    let addr = serve().await;

    let mut urls = NamedTempFile::new().unwrap();
    writeln!(urls, "# warm these").unwrap();
    writeln!(urls, "http://{addr}/a.js").unwrap();
    writeln!(urls).unwrap();
    writeln!(urls, "http://{addr}/b.js").unwrap();

    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "user_agent = \"linkwarm-test\"").unwrap();
    writeln!(config, "[headers]").unwrap();
    writeln!(config, "Purpose = \"prefetch\"").unwrap();

    let summary = run::execute(app(&[
        "--file",
        urls.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]))
    .await
    .unwrap();

    assert_eq!(summary.dispatched, 2);
    assert_eq!(summary.completed, 2);
}

#[tokio::test]
async fn test_duplicate_urls_in_one_run_are_both_issued() {
    let addr = serve().await;
    let url = format!("http://{addr}/dup.js");

    let summary = run::execute(app(&[&url, &url])).await.unwrap();

    assert_eq!(summary.dispatched, 2);
    assert_eq!(summary.skipped, 0);
}

#[tokio::test]
async fn test_unreachable_host_is_not_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let summary = run::execute(app(&[&format!("http://{addr}/gone.js")]))
        .await
        .unwrap();

    assert_eq!(summary.failed, 1);
}

#[tokio::test]
async fn test_no_urls_is_an_error() {
    let err = run::execute(app(&[])).await.unwrap_err();
    assert!(err.to_string().contains("no URLs"));
}

#[tokio::test]
async fn test_missing_config_is_an_error() {
    let err = run::execute(app(&["--config", "/no/such/linkwarm.toml", "a.js"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}
