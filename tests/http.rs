use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct StatsResponse {
    date: String,
    path: String,
    page_views: u64,
    total_views: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut dir = std::env::temp_dir();
    dir.push(format!("site_app_http_{}_{}", std::process::id(), nanos));
    dir
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/stats")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_dir: &PathBuf) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_site_app"))
        .env("PORT", port.to_string())
        .env("SITE_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(&unique_data_dir()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_stats(client: &Client, base_url: &str, path: &str) -> StatsResponse {
    client
        .get(format!("{base_url}/api/stats"))
        .query(&[("path", path)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_page_view_increments_counts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_stats(&client, &server.base_url, "/").await;

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    let body = page.text().await.unwrap();
    assert!(body.contains("Views today"));
    assert!(body.contains("All-time views"));

    let after = fetch_stats(&client, &server.base_url, "/").await;
    assert_eq!(after.page_views, before.page_views + 1);
    assert_eq!(after.total_views, before.total_views + 1);
    assert_eq!(after.path, "/");
    assert!(!after.date.is_empty());
}

#[tokio::test]
async fn http_multi_page_views_accumulate_total() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let home_before = fetch_stats(&client, &server.base_url, "/").await;
    let blog_before = fetch_stats(&client, &server.base_url, "/blog-archive").await;

    for path in ["/", "/blog-archive"] {
        let page = client
            .get(format!("{}{path}", server.base_url))
            .send()
            .await
            .unwrap();
        assert!(page.status().is_success());
    }

    let home_after = fetch_stats(&client, &server.base_url, "/").await;
    let blog_after = fetch_stats(&client, &server.base_url, "/blog-archive").await;
    assert_eq!(home_after.page_views, home_before.page_views + 1);
    assert_eq!(blog_after.page_views, blog_before.page_views + 1);
    assert_eq!(home_after.total_views, home_before.total_views + 2);
    assert_eq!(blog_after.total_views, home_after.total_views);
}

#[tokio::test]
async fn http_stats_reads_do_not_record() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first = fetch_stats(&client, &server.base_url, "/").await;
    let second = fetch_stats(&client, &server.base_url, "/").await;
    assert_eq!(first.page_views, second.page_views);
    assert_eq!(first.total_views, second.total_views);
}

#[tokio::test]
async fn http_stats_rejects_relative_path() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/stats", server.base_url))
        .query(&[("path", "blog")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_corrupt_ledger_starts_fresh() {
    let _guard = TEST_LOCK.lock().await;
    let data_dir = unique_data_dir();
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("pageStats.json"), "{this is not json").unwrap();

    let server = spawn_server(&data_dir).await;
    let client = Client::new();

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    let body = page.text().await.unwrap();
    assert_eq!(body.matches(r#"<span class="count">1</span>"#).count(), 2);

    let stats = fetch_stats(&client, &server.base_url, "/").await;
    assert_eq!(stats.page_views, 1);
    assert_eq!(stats.total_views, 1);
}
