use bollard::{API_DEFAULT_VERSION, Docker};

use super::list::{Connection, Connector};
use super::types::{ContainerSummary, DockerError, ListOptions};

/// Seconds bollard waits on a single request.
const REQUEST_TIMEOUT: u64 = 120;

/// Opens a fresh [`bollard`] client per call.
///
/// Without an explicit host the client reads `DOCKER_HOST` (and the TLS
/// variables) from the environment and falls back to the platform's local
/// socket.
#[derive(Debug, Clone, Default)]
pub struct EngineConnector {
    host: Option<String>,
}

impl EngineConnector {
    pub fn new(host: Option<String>) -> Self {
        Self { host }
    }

    fn client(&self) -> Result<Docker, bollard::errors::Error> {
        let Some(host) = self.host.as_deref() else {
            return Docker::connect_with_defaults();
        };

        #[cfg(unix)]
        if host.starts_with("unix://") {
            return Docker::connect_with_unix(host, REQUEST_TIMEOUT, API_DEFAULT_VERSION);
        }
        #[cfg(windows)]
        if host.starts_with("npipe://") {
            return Docker::connect_with_named_pipe(host, REQUEST_TIMEOUT, API_DEFAULT_VERSION);
        }
        Docker::connect_with_http(host, REQUEST_TIMEOUT, API_DEFAULT_VERSION)
    }
}

impl Connector for EngineConnector {
    type Connection = EngineConnection;

    /// Build the client and negotiate the API version with the daemon.
    async fn connect(&self) -> Result<EngineConnection, DockerError> {
        let docker = self
            .client()
            .map_err(DockerError::Connect)?
            .negotiate_version()
            .await
            .map_err(DockerError::Unreachable)?;

        tracing::debug!(
            host = self.host.as_deref().unwrap_or("<env>"),
            api_version = ?docker.client_version(),
            "connected to docker daemon"
        );
        Ok(EngineConnection {
            docker: Some(docker),
        })
    }
}

/// One negotiated client. Dropping the client on close releases its
/// connection pool.
#[derive(Debug)]
pub struct EngineConnection {
    docker: Option<Docker>,
}

impl Connection for EngineConnection {
    async fn list_containers(
        &mut self,
        opts: &ListOptions,
    ) -> Result<Vec<ContainerSummary>, DockerError> {
        let docker = self.docker.as_ref().ok_or(DockerError::Closed)?;
        docker
            .list_containers(Some(opts.to_request()))
            .await
            .map_err(DockerError::QueryRejected)
    }

    fn close(&mut self) {
        if self.docker.take().is_some() {
            tracing::trace!("docker connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::docker::list::list_exited;

    /// Minimal stand-in for the engine's HTTP API, one request per connection.
    struct FakeDaemon {
        addr: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeDaemon {
        fn start(containers: String, list_status: u16) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = format!("tcp://{}", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));
            let log = requests.clone();

            std::thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    serve(stream, &containers, list_status, &log);
                }
            });

            Self { addr, requests }
        }

        fn connector(&self) -> EngineConnector {
            EngineConnector::new(Some(self.addr.clone()))
        }

        fn request_lines(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    fn serve(stream: TcpStream, containers: &str, list_status: u16, log: &Mutex<Vec<String>>) {
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }
        // Drain headers; requests here carry no body.
        let mut header = String::new();
        while reader.read_line(&mut header).is_ok_and(|n| n > 0) && header != "\r\n" {
            header.clear();
        }
        log.lock().unwrap().push(request_line.trim().to_string());

        let (status, body) = if request_line.contains("/version") {
            (200, r#"{"ApiVersion":"1.43","MinAPIVersion":"1.12","Version":"24.0.7"}"#.to_string())
        } else if request_line.contains("/containers/json") {
            if list_status == 200 {
                (200, containers.to_string())
            } else {
                (list_status, r#"{"message":"invalid filter"}"#.to_string())
            }
        } else {
            (404, r#"{"message":"not found"}"#.to_string())
        };

        let mut stream = reader.into_inner();
        let _ = write!(
            stream,
            "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
    }

    fn container_json(id: &str, labels: usize) -> String {
        let labels: Vec<String> = (0..labels)
            .map(|i| format!(r#""lethe.label.{i}":"{}""#, "x".repeat(64)))
            .collect();
        format!(
            r#"{{"Id":"{id}","Names":["/{id}"],"Image":"lethe:1","State":"exited","Status":"Exited (0)","Labels":{{{}}}}}"#,
            labels.join(",")
        )
    }

    fn names(containers: &[ContainerSummary]) -> Vec<&str> {
        containers
            .iter()
            .filter_map(|c| c.names.as_ref()?.first().map(String::as_str))
            .collect()
    }

    #[tokio::test]
    async fn lists_exited_containers_in_daemon_order() {
        let body = format!("[{},{}]", container_json("a1", 0), container_json("c3", 0));
        let daemon = FakeDaemon::start(body, 200);

        let containers = list_exited(&daemon.connector()).await.unwrap();

        assert_eq!(names(&containers), ["/a1", "/c3"]);
        assert_eq!(containers[1].image.as_deref(), Some("lethe:1"));

        let requests = daemon.request_lines();
        let list = requests
            .iter()
            .find(|r| r.contains("/containers/json"))
            .expect("no list request");
        assert!(list.contains("/v1.43/"), "version not negotiated: {list}");
        assert!(list.contains("all=true"), "missing all=true: {list}");
        assert!(list.contains("exited"), "missing status filter: {list}");
    }

    #[tokio::test]
    async fn large_listing_is_read_to_the_end() {
        // Well over any OS pipe or socket buffer.
        let body: Vec<String> = (0..400).map(|i| container_json(&format!("c{i}"), 10)).collect();
        let body = format!("[{}]", body.join(","));
        assert!(body.len() > 200_000);
        let daemon = FakeDaemon::start(body, 200);

        let containers = tokio::time::timeout(Duration::from_secs(10), list_exited(&daemon.connector()))
            .await
            .expect("listing hung on a large response")
            .unwrap();

        assert_eq!(containers.len(), 400);
        assert_eq!(names(&containers)[399], "/c399");
    }

    #[tokio::test]
    async fn rejected_query_is_an_error() {
        let daemon = FakeDaemon::start(String::new(), 400);

        let err = list_exited(&daemon.connector()).await.unwrap_err();

        assert!(matches!(err, DockerError::QueryRejected(_)), "got {err:?}");
        assert!(err.to_string().contains("invalid filter"), "got {err}");
    }

    #[tokio::test]
    async fn unreachable_daemon_fails_at_connect() {
        // Bind then drop to get a port nobody listens on.
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let connector = EngineConnector::new(Some(format!("tcp://{addr}")));

        let err = list_exited(&connector).await.unwrap_err();

        assert!(matches!(err, DockerError::Unreachable(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn closed_connection_refuses_queries() {
        let daemon = FakeDaemon::start("[]".to_string(), 200);
        let mut conn = daemon.connector().connect().await.unwrap();

        conn.close();

        assert!(matches!(
            conn.list_containers(&ListOptions::exited()).await,
            Err(DockerError::Closed)
        ));
        assert!(!daemon.request_lines().iter().any(|r| r.contains("/containers/json")));
    }
}
