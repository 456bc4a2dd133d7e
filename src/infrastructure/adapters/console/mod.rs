//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::domain::entities::Reply;
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "btc-bot".to_string(),
                username: "console".to_string(),
            },
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Prompt and read one line, `None` on end of input
    pub async fn read_line(&self, prompt: &str) -> Result<Option<String>, BotError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await
            .map_err(|e| BotError::Internal(e.to_string()))?;
        stdout.flush().await
            .map_err(|e| BotError::Internal(e.to_string()))?;

        let line = self.lines.lock().await
            .next_line()
            .await
            .map_err(|e| BotError::Internal(e.to_string()))?;

        Ok(line.map(|l| l.trim().to_string()))
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        Ok(())
    }

    async fn send_reply(&self, _chat_id: &str, reply: &Reply) -> Result<String, BotError> {
        println!("[BOT] {}", reply.text);
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
