//! TCP front end that feeds parsed requests to a [`Router`].

use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::parser::{declared_content_length, head_end, parse_request};
use crate::router::{Context, Router};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// An HTTP server serving the routes of one [`Router`].
///
/// The router is frozen when the server is created; routes cannot be added
/// while serving.
pub struct HttpServer {
    pub config: ServerConfig,
    router: Arc<Router>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    fn log_routes(&self) {
        info!("Registered routes:");
        let mut routes: Vec<String> = self
            .router
            .registry()
            .iter()
            .map(|(method, route)| format!("{method} {}", route.pattern))
            .collect();
        routes.sort();
        for route in routes {
            info!("  {route}");
        }
    }

    /// Serve until Ctrl+C or an unrecoverable accept error.
    pub async fn start(&self) -> Result<(), Error> {
        self.log_routes();

        let listener = TcpListener::bind(self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);

        let permits = Arc::new(Semaphore::new(self.config.max_connections));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let mut tasks = JoinSet::new();

        let ctrl_c_tx = shutdown_tx.clone();
        let ctrl_c = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = ctrl_c_tx.send(()).await;
                }
                Err(e) => error!("Error setting up Ctrl+C handler: {e}"),
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((socket, addr)) => {
                            self.spawn_connection(socket, addr, &permits, &mut tasks).await;
                        }
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                            if e.kind() == std::io::ErrorKind::BrokenPipe {
                                break;
                            }
                            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        ctrl_c.abort();
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let drained = tokio::time::timeout(self.config.shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;
        if drained.is_err() {
            warn!("Shutdown timeout elapsed with connections still open");
        }

        info!("Server shutdown complete");
        Ok(())
    }

    async fn spawn_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        permits: &Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        let Ok(permit) = permits.clone().try_acquire_owned() else {
            warn!("Connection limit reached, rejecting connection from {addr}");
            let response = HttpResponse::text(
                StatusCode::ServiceUnavailable,
                "Server is at capacity, please try again later",
            );
            let _ = socket.write_all(&response.to_bytes()).await;
            return;
        };

        let router = self.router.clone();
        let read_buffer_size = self.config.read_buffer_size;

        tasks.spawn(async move {
            let _permit = permit;
            Self::serve_connection(&mut socket, addr, &router, read_buffer_size).await;
        });
    }

    /// Handle one connection and log how it ended.
    ///
    /// Failures stay with the connection; they never stop the server.
    pub async fn serve_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        addr: SocketAddr,
        router: &Router,
        read_buffer_size: usize,
    ) {
        match Self::handle_connection(socket, router, read_buffer_size).await {
            Ok(()) => {}
            Err(e) if is_disconnect(&e) => debug!("Connection from {addr} dropped: {e}"),
            Err(e) => error!("Error handling connection from {addr}: {e}"),
        }
    }

    /// Read a request: the header section, then as much of the body as
    /// Content-Length declares. At most `limit` bytes are read.
    async fn read_request(
        socket: &mut (impl AsyncRead + Unpin),
        limit: usize,
    ) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; limit];
        let mut filled = 0;

        while filled < buf.len() {
            let n = socket.read(&mut buf[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;

            if let Some(end) = head_end(&buf[..filled]) {
                let body_len = declared_content_length(&buf[..end]).unwrap_or(0);
                if filled >= end + 4 + body_len {
                    break;
                }
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }

    /// Read one request from `socket`, route it and write the response.
    ///
    /// A request larger than `read_buffer_size` is parsed from what fits,
    /// which usually fails as an incomplete body.
    ///
    /// Unparsable requests get a 400 and handler failures a 500; both are
    /// also returned as errors. A request with no matching route gets the
    /// router's 404 and counts as handled.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let buf = Self::read_request(socket, read_buffer_size).await?;
        if buf.is_empty() {
            return Ok(());
        }

        let request = match parse_request(&buf) {
            Ok(request) => request,
            Err(e) => {
                let response = HttpResponse::text(StatusCode::BadRequest, format!("Error parsing request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(e.into());
            }
        };

        let method = request.method.clone();
        let path = request.path.clone();

        let response = match router.dispatch(Context::new(request)).await {
            Ok(response) => response,
            Err(e) => {
                let response = HttpResponse::text(StatusCode::InternalServerError, format!("Internal server error: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(e);
            }
        };

        debug!("{method} {path} -> {status}", status = response.status.as_u16());
        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;

        Ok(())
    }
}

/// Whether `e` means the peer went away rather than something broke.
pub(crate) fn is_disconnect(e: &Error) -> bool {
    use std::io::ErrorKind;

    matches!(
        e,
        Error::IoError(io) if matches!(
            io.kind(),
            ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe | ErrorKind::UnexpectedEof
        )
    )
}
