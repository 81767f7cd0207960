//! # Signal handling utility functions

/// It will call `cb` once for Ctrl-c events (or SIGTERM signals in Unix).
#[cfg(unix)]
pub fn ctrl_c<T: Fn() + 'static>(cb: T) {
    use futures::future::{self, Either};

    let f = async move {
        // SIGTERM is what `kill $(pidof lamport-wallet)` sends; without a
        // handler the daemon would die before answering the requester.
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install the SIGTERM handler");

        let ctrl_c = Box::pin(tokio::signal::ctrl_c());
        let sigterm = Box::pin(async move {
            sigterm.recv().await;
        });

        match future::select(ctrl_c, sigterm).await {
            Either::Left(_) => log::trace!("Received CTRL-C"),
            Either::Right(_) => log::trace!("Received SIGTERM signal"),
        }

        cb();
    };

    actix::spawn(f);
}

/// It will call `cb` once for Ctrl-c events.
#[cfg(windows)]
pub fn ctrl_c<T: Fn() + 'static>(cb: T) {
    let f = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for CTRL-C event");
        log::trace!("Received CTRL-C");

        cb();
    };

    actix::spawn(f);
}
