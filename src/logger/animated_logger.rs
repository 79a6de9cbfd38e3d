use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_FRAME_MILLIS;

const ANIMATION_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr spinner shown while waiting on a provider.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        Self {
            message,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_FRAME_MILLIS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, ANIMATION_FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % ANIMATION_FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish(&format!("✅  {}", final_message)).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish(&format!("❌ {}", error_message)).await;
    }

    async fn finish(&mut self, line: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprint!("\r\x1b[K{}\n", line);
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stops_spinner_task() {
        let mut logger = AnimatedLogger::new("DigiBot düşünüyor".to_string());
        logger.start();
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        logger.stop("Yanıt hazır").await;

        assert!(logger.task_handle.is_none());
        assert!(logger.stop_sender.is_none());
    }
}
