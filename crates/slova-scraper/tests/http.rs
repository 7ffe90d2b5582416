use slova_config::source::SourceConfig;
use slova_scraper::{HttpSource, ScrapeError, scrape};
use slova_types::WordPair;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned response on a local port and return its URL
async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();

        let head = format!(
            "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/words")
}

#[tokio::test]
async fn test_invalid_bytes_do_not_abort_scrape() {
    let mut body = b"<html><body><p>\xff\xfe</p><table>".to_vec();
    body.extend_from_slice("<tr><td>1</td><td>the</td><td></td><td>артикль</td></tr>".as_bytes());
    body.extend_from_slice(b"</table></body></html>");
    let url = serve_once("HTTP/1.1 200 OK", body).await;

    let source = HttpSource::new(&SourceConfig::new()).unwrap();
    let dictionary = scrape(&source, &url).await.unwrap();

    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("1"), Some(&WordPair::new("the", "артикль")));
}

#[tokio::test]
async fn test_non_200_status_is_rejected() {
    let url = serve_once("HTTP/1.1 404 Not Found", b"gone".to_vec()).await;

    let source = HttpSource::new(&SourceConfig::new()).unwrap();
    let err = scrape(&source, &url).await.unwrap_err();

    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
}
