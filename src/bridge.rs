use mpris_server::Server;
use tokio::signal::unix::{SignalKind, signal};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::core::{BridgeError, Result};
use crate::services::mpris::{POLL_INTERVAL, RadiotrayNgPlayer, StateMonitor};
use crate::services::radiotray::{PlayerProcess, RadiotrayNgService};

/// Suffix appended to `org.mpris.MediaPlayer2.` to form the bus name.
const MPRIS_BUS_SUFFIX: &str = "radiotray_ng";

/// Run the bridge until the player exits or an interrupt arrives.
///
/// Launches the player process, waits for its control service to appear on
/// the session bus, registers the MPRIS service and then drives a single
/// select loop servicing poll ticks, child exit and POSIX signals. On
/// SIGINT/SIGTERM the player is asked to quit and waited for, so a clean
/// interrupt exits with status zero.
///
/// # Errors
/// Returns a [`BridgeError`] for the fatal startup conditions: the player
/// cannot be launched, the session bus is unreachable, the control service
/// never appears, or the MPRIS registration fails.
pub async fn run(args: Args) -> Result<()> {
    let mut process = PlayerProcess::spawn(args.play)?;

    let connection = match zbus::Connection::session().await {
        Ok(connection) => connection,
        Err(err) => {
            process.kill().await;
            return Err(BridgeError::SessionBus(err));
        }
    };

    let service = match RadiotrayNgService::connect(&connection).await {
        Ok(service) => service,
        Err(err) => {
            process.kill().await;
            return Err(err.into());
        }
    };

    let server = match Server::new(MPRIS_BUS_SUFFIX, RadiotrayNgPlayer::new(service.clone())).await
    {
        Ok(server) => server,
        Err(err) => {
            process.kill().await;
            return Err(BridgeError::MprisRegistration(err.to_string()));
        }
    };
    info!("MPRIS service registered as org.mpris.MediaPlayer2.{MPRIS_BUS_SUFFIX}");

    let mut monitor = StateMonitor::new(service.clone());
    let mut poll = tokio::time::interval(POLL_INTERVAL);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    loop {
        tokio::select! {
            _ = sigint.recv() => {
                info!("received SIGINT");
                shutdown(&service, &mut process).await;
                break;
            }
            _ = sigterm.recv() => {
                info!("received SIGTERM");
                shutdown(&service, &mut process).await;
                break;
            }
            status = process.wait() => {
                match status {
                    Ok(status) => info!("player process exited ({status}), shutting down"),
                    Err(err) => warn!("failed waiting on the player process: {err}"),
                }
                break;
            }
            _ = poll.tick() => monitor.tick(&server).await,
        }
    }

    // Dropping the server handle releases the MPRIS bus name.
    drop(server);
    Ok(())
}

/// Ask the player to quit and wait for its process to exit.
async fn shutdown(service: &RadiotrayNgService, process: &mut PlayerProcess) {
    // The player tends to drop off the bus without answering the quit call.
    if let Err(err) = service.quit().await {
        debug!("quit request went unanswered: {err}");
    }
    info!("waiting for the player process to exit");
    if let Err(err) = process.wait().await {
        warn!("failed waiting on the player process: {err}");
    }
}
