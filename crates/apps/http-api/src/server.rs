use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// How the accept loop ended when asked to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// Every in-flight request finished before the deadline
    Completed,
    /// The deadline passed first and the accept loop was aborted
    TimedOut,
}

/// An HTTP accept loop running on its own task
pub struct Server {
    local_addr: SocketAddr,
    stop: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl Server {
    /// Start serving `router` on `listener` in the background
    pub fn spawn(listener: TcpListener, router: Router) -> io::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (stop, stopped) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    // A dropped sender also means stop.
                    let _ = stopped.await;
                })
                .await
        });

        info!(%local_addr, "server is running");
        Ok(Self {
            local_addr,
            stop,
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests, giving up at `deadline`
    pub async fn drain(self, deadline: Instant) -> Drain {
        let Server { stop, mut task, .. } = self;

        // The task may already be gone if the listener failed.
        let _ = stop.send(());

        tokio::select! {
            joined = &mut task => {
                match joined {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => error!(error = %err, "server exited with an error while draining"),
                    Err(err) => error!(error = %err, "server task failed while draining"),
                }
                Drain::Completed
            }
            _ = tokio::time::sleep_until(deadline) => {
                warn!("shutdown timeout elapsed with requests still in flight");
                task.abort();
                Drain::TimedOut
            }
        }
    }
}
