use std::{
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    sync::{Arc, Mutex},
    thread,
};
use tokio::time::{timeout, Duration, Instant};

static PORT: Mutex<u16> = Mutex::new(18080);
const TIMEOUT: Duration = Duration::from_secs(30);

pub fn get_port() -> u16 {
    let mut port = PORT.lock().unwrap();
    *port += 1;
    *port
}

/// A throwaway frontend bundle with a known index page.
pub fn make_dist(name: &str, index: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "chessbet-it-{}-{}",
        std::process::id(),
        name
    ));
    fs::create_dir_all(&root).expect("Failed to create dist dir");
    fs::write(root.join("index.html"), index).expect("Failed to write index.html");
    root
}

pub struct ServerGuard {
    pub process: Option<Child>,
    logs: Arc<Mutex<Vec<String>>>,
}

impl ServerGuard {
    pub fn new() -> Self {
        Self {
            process: None,
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn start(&mut self, port: u16, dist: &Path) -> String {
        if self.process.is_some() {
            panic!("Server is already running!");
        }

        let addr = format!("127.0.0.1:{}", port);
        self.process = Some(
            Command::new(env!("CARGO_BIN_EXE_chessbet-server"))
                .arg(&addr)
                .arg("--dist")
                .arg(dist)
                .arg("--log")
                .arg("debug")
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .expect("Failed to start server"),
        );

        self.start_capture_logs();

        let base_url = format!("http://{}", addr);
        let start_time = Instant::now();

        loop {
            if start_time.elapsed() >= TIMEOUT {
                panic!(
                    "Timed out waiting for server to start after {} seconds",
                    TIMEOUT.as_secs()
                );
            }

            tokio::time::sleep(Duration::from_millis(200)).await;

            match timeout(TIMEOUT, reqwest::get(&base_url)).await {
                Ok(Ok(_)) => return base_url,
                Ok(Err(_)) => println!("Connection refused. trying again..."),
                Err(_) => println!("Timeout during connection attempt"),
            }
        }
    }

    fn start_capture_logs(&mut self) {
        let process = self
            .process
            .as_mut()
            .expect("Server process is not running");

        let logs = Arc::clone(&self.logs);
        let stdout = process.stdout.take().expect("Failed to capture stdout");

        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                logs.lock().unwrap().push(line);
            }
        });
    }

    pub fn read_logs(&self) -> Vec<String> {
        let mut logs = self.logs.lock().unwrap();
        logs.drain(..).collect()
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}
