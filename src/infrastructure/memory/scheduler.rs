//! Tokio-based One-Time Scheduler Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::ports::{FiredCallback, SchedulerError, SchedulerPort};

struct Timer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// 一次性定时调度器
///
/// 每个 schedule id 对应一个 tokio 定时任务，到期后把回调投递到队列，
/// 由 CallbackWorker 消费
pub struct TokioScheduler {
    timers: Arc<DashMap<String, Timer>>,
    next_generation: AtomicU64,
    queue_sender: mpsc::Sender<FiredCallback>,
}

impl TokioScheduler {
    pub fn new(queue_sender: mpsc::Sender<FiredCallback>) -> Self {
        Self {
            timers: Arc::new(DashMap::new()),
            next_generation: AtomicU64::new(0),
            queue_sender,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 未触发的调度数量
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, schedule_id: &str) -> bool {
        self.timers.contains_key(schedule_id)
    }
}

#[async_trait]
impl SchedulerPort for TokioScheduler {
    async fn schedule_one_time(
        &self,
        delay_secs: i64,
        payload: &str,
        schedule_id: &str,
    ) -> Result<String, SchedulerError> {
        if delay_secs < 0 {
            return Err(SchedulerError::Rejected(format!(
                "negative delay: {}s",
                delay_secs
            )));
        }
        if self.queue_sender.is_closed() {
            return Err(SchedulerError::Unavailable("callback queue closed".to_string()));
        }

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let fired = FiredCallback {
            schedule_id: schedule_id.to_string(),
            payload: payload.to_string(),
            is_recurring: false,
        };
        let timers = self.timers.clone();
        let sender = self.queue_sender.clone();

        // 持有 entry 锁直到新定时器登记完成，避免零延迟任务先于登记触发
        let slot = self.timers.entry(schedule_id.to_string());
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(delay_secs as u64)).await;

            // 只移除自己，不影响之后替换进来的同名调度
            timers.remove_if(&fired.schedule_id, |_, t| t.generation == generation);

            let schedule_id = fired.schedule_id.clone();
            if let Err(e) = sender.send(fired).await {
                tracing::warn!(schedule_id = %schedule_id, error = %e, "Failed to deliver scheduled callback");
            }
        });

        let timer = Timer { generation, handle };
        match slot {
            Entry::Occupied(mut occupied) => {
                occupied.insert(timer).handle.abort();
                tracing::debug!(schedule_id = %schedule_id, "Replaced existing schedule");
            }
            Entry::Vacant(vacant) => {
                vacant.insert(timer);
            }
        }

        tracing::debug!(schedule_id = %schedule_id, delay_secs, "Callback scheduled");
        Ok(schedule_id.to_string())
    }

    async fn cancel_schedule(&self, schedule_id: &str) -> Result<(), SchedulerError> {
        let (_, timer) = self
            .timers
            .remove(schedule_id)
            .ok_or_else(|| SchedulerError::NotFound(schedule_id.to_string()))?;
        timer.handle.abort();

        tracing::debug!(schedule_id = %schedule_id, "Schedule cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_zero_delay_fires_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = TokioScheduler::new(tx);

        let handle = scheduler
            .schedule_one_time(0, "clear-activity", "alice-clear")
            .await
            .unwrap();
        assert_eq!(handle, "alice-clear");

        let fired = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fired.schedule_id, "alice-clear");
        assert_eq!(fired.payload, "clear-activity");
        assert!(!fired.is_recurring);

        tokio::task::yield_now().await;
        assert!(!scheduler.is_scheduled("alice-clear"));
    }

    #[tokio::test]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = TokioScheduler::new(tx);

        scheduler.schedule_one_time(60, "p", "alice-clear").await.unwrap();
        assert!(scheduler.is_scheduled("alice-clear"));

        scheduler.cancel_schedule("alice-clear").await.unwrap();
        assert_eq!(scheduler.pending_count(), 0);
        assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_cancel_unknown_is_not_found() {
        let (tx, _rx) = mpsc::channel(8);
        let scheduler = TokioScheduler::new(tx);

        let result = scheduler.cancel_schedule("nobody-clear").await;
        assert!(matches!(result, Err(SchedulerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reschedule_replaces_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = TokioScheduler::new(tx);

        scheduler.schedule_one_time(60, "old", "alice-clear").await.unwrap();
        scheduler.schedule_one_time(0, "new", "alice-clear").await.unwrap();

        let fired = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fired.payload, "new");
        assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_negative_delay_rejected() {
        let (tx, _rx) = mpsc::channel(8);
        let scheduler = TokioScheduler::new(tx);

        let result = scheduler.schedule_one_time(-1, "p", "x").await;
        assert!(matches!(result, Err(SchedulerError::Rejected(_))));
    }
}
