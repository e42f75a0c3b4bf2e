//! Callback Worker - Scheduler Callback Processor

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::capabilities::SchedulerCallbackCapability;
use crate::application::commands::SchedulerCallbackCommand;
use crate::application::ports::FiredCallback;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct CallbackWorkerConfig {
    /// 最大并发回调数
    pub max_concurrent: usize,
}

impl Default for CallbackWorkerConfig {
    fn default() -> Self {
        Self { max_concurrent: 8 }
    }
}

/// 回调 Worker
///
/// 从队列消费到期回调并交给 SchedulerCallbackCapability，不同用户的回调可以并发处理
pub struct CallbackWorker {
    config: CallbackWorkerConfig,
    queue_receiver: mpsc::Receiver<FiredCallback>,
    handler: Arc<dyn SchedulerCallbackCapability>,
}

impl CallbackWorker {
    pub fn new(
        config: CallbackWorkerConfig,
        queue_receiver: mpsc::Receiver<FiredCallback>,
        handler: Arc<dyn SchedulerCallbackCapability>,
    ) -> Self {
        Self {
            config,
            queue_receiver,
            handler,
        }
    }

    /// 启动 Worker，队列关闭后返回
    pub async fn run(mut self) {
        tracing::info!(
            max_concurrent = self.config.max_concurrent,
            "CallbackWorker started"
        );

        // 使用 semaphore 控制并发
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_concurrent.max(1)));
        let mut in_flight = tokio::task::JoinSet::new();

        while let Some(fired) = self.queue_receiver.recv().await {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::error!("Failed to acquire semaphore permit");
                    continue;
                }
            };

            let handler = self.handler.clone();
            in_flight.spawn(async move {
                let _permit = permit; // 持有 permit 直到回调完成
                Self::process(handler, fired).await;
            });

            // 回收已完成的任务
            while in_flight.try_join_next().is_some() {}
        }

        while in_flight.join_next().await.is_some() {}
        tracing::info!("CallbackWorker stopped");
    }

    async fn process(handler: Arc<dyn SchedulerCallbackCapability>, fired: FiredCallback) {
        let schedule_id = fired.schedule_id.clone();
        if let Err(e) = handler.on_callback(SchedulerCallbackCommand::from(fired)).await {
            tracing::warn!(
                schedule_id = %schedule_id,
                error = %e,
                retryable = e.is_retryable(),
                "Scheduler callback failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SchedulerCallbackCapability for RecordingHandler {
        async fn on_callback(&self, cmd: SchedulerCallbackCommand) -> Result<(), ApplicationError> {
            self.seen.lock().unwrap().push(cmd.schedule_id.clone());
            if cmd.payload == "fail" {
                return Err(ApplicationError::retry_later("boom"));
            }
            Ok(())
        }
    }

    fn fired(schedule_id: &str, payload: &str) -> FiredCallback {
        FiredCallback {
            schedule_id: schedule_id.to_string(),
            payload: payload.to_string(),
            is_recurring: false,
        }
    }

    #[tokio::test]
    async fn test_worker_drains_queue() {
        let (tx, rx) = mpsc::channel(8);
        let handler = Arc::new(RecordingHandler::default());
        let worker = CallbackWorker::new(CallbackWorkerConfig::default(), rx, handler.clone());

        tx.send(fired("alice-clear", "clear-activity")).await.unwrap();
        tx.send(fired("bob", "fail")).await.unwrap();
        tx.send(fired("carol", "heartbeat")).await.unwrap();
        drop(tx);

        worker.run().await;

        let mut seen = handler.seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec!["alice-clear", "bob", "carol"]);
    }
}
