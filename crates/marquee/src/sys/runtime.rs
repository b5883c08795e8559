use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>, config_path: PathBuf) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            tokio::spawn(async move {
                crate::config::run_async_watcher(tx, config_path).await;
            });

            std::future::pending::<()>().await;
        });
    });
}
