use std::{
    sync::Arc,
    time::Duration,
};

use tokio::{
    runtime::{
        Handle,
        Runtime,
    },
    sync::mpsc::{
        self,
        UnboundedReceiver,
        UnboundedSender,
    },
    time::{
        interval_at,
        sleep_until,
        Instant,
        MissedTickBehavior,
    },
};
use tokio_util::sync::CancellationToken;

use super::{
    handle::{
        CancellableTask,
        TaskHandle,
    },
    types::{
        Effect,
        TaskResult,
    },
};
use crate::{
    core::{
        generation::GenerationTicket,
        slot::RevealPlan,
        WizardError,
    },
    dictionary::{
        DefinitionSource,
        LookupTicket,
    },
};

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs timers and lookups off the UI thread and queues their results until
/// the UI polls them.
pub struct TaskManager {
    // Kept alive for the lifetime of the manager when it owns its runtime.
    _runtime: Option<Arc<Runtime>>,
    handle: Handle,
    receiver: UnboundedReceiver<TaskResult>,
    sender: UnboundedSender<TaskResult>,
    source: Arc<dyn DefinitionSource>,
    timers: Vec<TaskHandle>,
    waker: Option<Waker>,
}

impl TaskManager {
    pub fn new(source: Arc<dyn DefinitionSource>) -> Result<Self, WizardError> {
        let runtime = Arc::new(
            Runtime::new()
                .map_err(|e| WizardError::Runtime(format!("Failed to create runtime: {e}")))?,
        );
        let handle = runtime.handle().clone();
        Ok(Self::build(Some(runtime), handle, source))
    }

    /// Spawns onto an existing runtime instead of owning one.
    pub fn with_handle(handle: Handle, source: Arc<dyn DefinitionSource>) -> Self {
        Self::build(None, handle, source)
    }

    fn build(
        runtime: Option<Arc<Runtime>>,
        handle: Handle,
        source: Arc<dyn DefinitionSource>,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            _runtime: runtime,
            handle,
            receiver,
            sender,
            source,
            timers: Vec::new(),
            waker: None,
        }
    }

    /// Called after every queued result, e.g. to request a repaint.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub async fn next_result(&mut self) -> Option<TaskResult> {
        self.receiver.recv().await
    }

    /// Timers that are still running.
    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|t| !t.is_finished() && !t.is_cancelled()).count()
    }

    pub fn run(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.timers.retain(|timer| !timer.is_finished());

        for effect in effects {
            match effect {
                Effect::CancelReveals => self.cancel_timers(),
                Effect::ScheduleGeneration { ticket, delay } => {
                    self.schedule_generation(ticket, delay)
                }
                Effect::StartReveals(plans) => self.start_reveals(plans),
                Effect::FetchDefinition(ticket) => self.fetch_definition(ticket),
            }
        }
    }

    fn task_context(&self) -> (UnboundedSender<TaskResult>, Option<Waker>) {
        (self.sender.clone(), self.waker.clone())
    }

    fn cancel_timers(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("Cancelling {} pending timer(s)", self.timers.len());
        }
        for timer in self.timers.drain(..) {
            log::trace!("Cancelling {:?}", timer.kind());
            timer.cancel();
        }
    }

    fn schedule_generation(&mut self, ticket: GenerationTicket, delay: Duration) {
        let (sender, waker) = self.task_context();
        let token = CancellationToken::new();
        let child = token.clone();

        let join_handle = self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    notify(&sender, waker.as_ref(), TaskResult::GenerationDue(ticket));
                }
            }
        });

        self.timers.push(TaskHandle::new(CancellableTask::GenerationDebounce, token, join_handle));
    }

    fn start_reveals(&mut self, plans: Vec<RevealPlan>) {
        // One shared start instant keeps settle order identical to deadline order.
        let started = Instant::now();

        for plan in plans {
            let (sender, waker) = self.task_context();
            let token = CancellationToken::new();
            let join_handle =
                self.handle.spawn(run_reveal(plan, started, token.clone(), sender, waker));

            self.timers.push(TaskHandle::new(
                CancellableTask::Reveal { index: plan.index },
                token,
                join_handle,
            ));
        }
    }

    fn fetch_definition(&self, ticket: LookupTicket) {
        let (sender, waker) = self.task_context();
        let source = Arc::clone(&self.source);

        self.handle.spawn(async move {
            let result = source.lookup(&ticket.word).await.map_err(|e| e.user_message());
            notify(&sender, waker.as_ref(), TaskResult::DefinitionFetched { ticket, result });
        });
    }
}

async fn run_reveal(
    plan: RevealPlan,
    started: Instant,
    token: CancellationToken,
    sender: UnboundedSender<TaskResult>,
    waker: Option<Waker>,
) {
    let deadline = sleep_until(started + plan.settle_after);
    tokio::pin!(deadline);

    let period = plan.tick.max(Duration::from_millis(1));
    let mut ticker = interval_at(started + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let RevealPlan { epoch_id, index, .. } = plan;

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                log::trace!("Reveal for slot {} (epoch {}) cancelled", index, epoch_id);
                return;
            }
            _ = &mut deadline => {
                notify(&sender, waker.as_ref(), TaskResult::RevealSettled { epoch_id, index });
                return;
            }
            _ = ticker.tick() => {
                if !notify(&sender, waker.as_ref(), TaskResult::RevealTick { epoch_id, index }) {
                    return;
                }
            }
        }
    }
}

fn notify(sender: &UnboundedSender<TaskResult>, waker: Option<&Waker>, result: TaskResult) -> bool {
    if sender.send(result).is_err() {
        return false;
    }
    if let Some(waker) = waker {
        waker();
    }
    true
}
