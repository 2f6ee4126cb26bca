use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Fault;
use crate::http::connection::Connection;
use crate::http::handler::FileHandler;
use crate::log::EventLog;

/// A bound socket serving one connection at a time.
pub struct Listener {
    listener: TcpListener,
    handler: FileHandler,
    log: Arc<dyn EventLog>,
}

impl Listener {
    /// Binds the configured endpoint and records the start in the event log.
    pub async fn bind(cfg: &ServerConfig, log: Arc<dyn EventLog>) -> Result<Self, Fault> {
        let listener = match TcpListener::bind(cfg.addr).await {
            Ok(listener) => listener,
            Err(e) => {
                let fault = Fault::Socket(e);
                report(&fault, log.as_ref());
                return Err(fault);
            }
        };

        log.write(&format!(
            "[SERVER STARTED] - webRoot={} webIP={} webPort={}",
            cfg.root,
            cfg.ip(),
            cfg.port()
        ));
        info!(root = %cfg.root, addr = %cfg.addr, "Working...");

        Ok(Self {
            listener,
            handler: FileHandler::new(cfg.root.clone()),
            log,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and serves connections until the first fault, which is logged
    /// and returned. A failing client stops the whole server, not just its
    /// own connection.
    pub async fn serve(self) -> Result<(), Fault> {
        let result = self.accept_loop().await;
        if let Err(fault) = &result {
            report(fault, self.log.as_ref());
        }
        result
    }

    async fn accept_loop(&self) -> Result<(), Fault> {
        loop {
            let (socket, peer) = self.listener.accept().await.map_err(Fault::Socket)?;
            info!("Accepted connection from {}", peer);

            // Served to completion before the next accept.
            let mut conn = Connection::new(socket, &self.handler, self.log.as_ref());
            conn.run().await?;
        }
    }
}

/// Binds and serves until a fault stops the server.
pub async fn run(cfg: &ServerConfig, log: Arc<dyn EventLog>) -> Result<(), Fault> {
    Listener::bind(cfg, log).await?.serve().await
}

fn report(fault: &Fault, log: &dyn EventLog) {
    tracing::error!(error = %fault, "{}", fault.message());
    log.write(&format!("[ERROR] - {}", fault.message()));
}
