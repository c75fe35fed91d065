//! Module implementing the shutdown signal handling.
//!
//! Handlers are installed eagerly by [`ShutdownSignal::install`] so that a
//! signal delivered at any point after installation is observed, even if
//! nothing is awaiting it yet.

use colored::Colorize;

#[cfg(unix)]
pub struct ShutdownSignal {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownSignal {
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            // equivalent to Ctrl+C
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    pub async fn recv(&mut self) {
        tokio::select! {
            _ = self.sigint.recv() => {
                tracing::info!("received SIGINT signal, initiating graceful shutdown");
            }
            _ = self.sigterm.recv() => {
                tracing::info!("received SIGTERM signal, initiating graceful shutdown");
            }
        }
    }
}

// Best-effort implementation for non-unix systems
#[cfg(not(unix))]
pub struct ShutdownSignal {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(not(unix))]
impl ShutdownSignal {
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    pub async fn recv(&mut self) {
        self.ctrl_c.recv().await;
        tracing::info!("received CTRL+C signal, initiating graceful shutdown");
    }
}

pub fn print_goodbye() {
    println!("\n\n👋 Shutting down Agility gracefully...");
    println!("{}\n", "✅ Goodbye!".green());
}
